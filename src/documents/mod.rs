//! One module per document type, each exposing the same four-function shape:
//! `remove_symbols`, `is_valid`, `format_X` (where the document has a printed
//! mask) and `generate`. Every validator fails closed: malformed input of any
//! kind returns `false`, never a panic.

pub mod angola_nif;
pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod german_tin;
pub mod legal_process;
pub mod license_plate;
pub mod phone;
pub mod pis;
pub mod renavam;
pub mod voter_id;

use strum::{Display, EnumIter};

/// Every supported document type, for callers that dispatch dynamically
/// (and for the property tests, which iterate all of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
    Pis,
    Renavam,
    VoterId,
    LegalProcess,
    GermanTin,
    AngolaNif,
    Cep,
    Phone,
    LicensePlate,
}

impl DocumentKind {
    /// Validates `input` as this document type.
    pub fn is_valid(&self, input: &str) -> bool {
        match self {
            DocumentKind::Cpf => cpf::is_valid(input),
            DocumentKind::Cnpj => cnpj::is_valid(input),
            DocumentKind::Pis => pis::is_valid(input),
            DocumentKind::Renavam => renavam::is_valid(input),
            DocumentKind::VoterId => voter_id::is_valid(input),
            DocumentKind::LegalProcess => legal_process::is_valid(input),
            DocumentKind::GermanTin => german_tin::is_valid(input),
            DocumentKind::AngolaNif => angola_nif::is_valid(input),
            DocumentKind::Cep => cep::is_valid(input),
            DocumentKind::Phone => phone::is_valid(input),
            DocumentKind::LicensePlate => license_plate::is_valid(input),
        }
    }

    /// Strips this document type's visual-aid symbols from `input`.
    pub fn remove_symbols(&self, input: &str) -> String {
        match self {
            DocumentKind::Cpf => cpf::remove_symbols(input),
            DocumentKind::Cnpj => cnpj::remove_symbols(input),
            DocumentKind::Pis => pis::remove_symbols(input),
            DocumentKind::Renavam => renavam::remove_symbols(input),
            DocumentKind::VoterId => voter_id::remove_symbols(input),
            DocumentKind::LegalProcess => legal_process::remove_symbols(input),
            DocumentKind::GermanTin => german_tin::remove_symbols(input),
            DocumentKind::AngolaNif => angola_nif::remove_symbols(input),
            DocumentKind::Cep => cep::remove_symbols(input),
            DocumentKind::Phone => phone::remove_symbols(input),
            DocumentKind::LicensePlate => license_plate::remove_symbols(input),
        }
    }

    /// Formats `input` with this document type's printed mask. Document
    /// types without a mask (RENAVAM, the Angolan NIF) return the bare
    /// validated string.
    pub fn format(&self, input: &str) -> Option<String> {
        match self {
            DocumentKind::Cpf => cpf::format_cpf(input),
            DocumentKind::Cnpj => cnpj::format_cnpj(input),
            DocumentKind::Pis => pis::format_pis(input),
            DocumentKind::Renavam => renavam::is_valid(input).then(|| input.to_string()),
            DocumentKind::VoterId => voter_id::format_voter_id(input),
            DocumentKind::LegalProcess => legal_process::format_legal_process(input),
            DocumentKind::GermanTin => german_tin::format_german_tin(input),
            DocumentKind::AngolaNif => angola_nif::is_valid(input).then(|| input.to_string()),
            DocumentKind::Cep => cep::format_cep(input),
            DocumentKind::Phone => phone::format_phone(input),
            DocumentKind::LicensePlate => license_plate::format_license_plate(input),
        }
    }

    /// Generates a random instance of this document type. The output always
    /// satisfies [`DocumentKind::is_valid`].
    pub fn generate(&self) -> String {
        match self {
            DocumentKind::Cpf => cpf::generate(),
            DocumentKind::Cnpj => cnpj::generate(),
            DocumentKind::Pis => pis::generate(),
            DocumentKind::Renavam => renavam::generate(),
            DocumentKind::VoterId => voter_id::generate(),
            DocumentKind::LegalProcess => legal_process::generate(),
            DocumentKind::GermanTin => german_tin::generate(),
            DocumentKind::AngolaNif => angola_nif::generate(),
            DocumentKind::Cep => cep::generate(),
            DocumentKind::Phone => phone::generate(),
            DocumentKind::LicensePlate => license_plate::generate(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn dispatch_matches_modules() {
        assert!(DocumentKind::Cpf.is_valid("11144477735"));
        assert!(!DocumentKind::Cnpj.is_valid("11144477735"));
        assert_eq!(
            DocumentKind::Cep.format("01310200").as_deref(),
            Some("01310-200")
        );
        assert_eq!(DocumentKind::Cpf.remove_symbols("111.444.777-35"), "11144477735");
    }

    #[test]
    fn every_kind_generates_valid_documents() {
        for kind in DocumentKind::iter() {
            let document = kind.generate();
            assert!(kind.is_valid(&document), "{kind}: {document}");
        }
    }
}
