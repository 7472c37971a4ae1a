// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod format;
mod sieve;
mod tables;

pub mod documents;
pub mod registry;

// This is the public API of the brdocs library
pub use checksum::{
    mod11_10_hybrid, mod11_remainder, mod11_times_ten, mod11_two_floor, mod97_verifier,
    remainder_identity, ChecksumSpec,
};
pub use documents::{
    angola_nif, cep, cnpj, cpf, german_tin, legal_process, license_plate, phone, pis, renavam,
    voter_id, DocumentKind,
};
pub use registry::{lookup_optional, LookupError, RegistryClient, RegistryRecord};
pub use sieve::sieve;
pub use tables::{federative_unit_code, is_valid_legal_nature, legal_nature_description};
