//! RENAVAM, the Brazilian national vehicle registry number: ten base digits
//! and one modulus-11 verifier.
//!
//! The official description applies cycling weights 2..9 to the *reversed*
//! base; unrolled back to reading order that is the weight table below. The
//! remainder rule is `(10r mod 11) mod 10` rather than the CPF-style
//! two-floor rule. RENAVAM has no printed separator mask, so there is no
//! `format_` function here.

use crate::checksum::{mod11_times_ten, ChecksumSpec};
use crate::sieve::{digit_string, digit_values, sieve};
use rand::Rng;

const LENGTH: usize = 11;
const SYMBOLS: &[char] = &[' ', '-'];

const VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_times_ten,
};

/// Strips spaces and dashes occasionally used when transcribing a RENAVAM.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format and checksum validation.
pub fn is_valid(input: &str) -> bool {
    match digit_values(input, LENGTH) {
        Some(digits) => VERIFIER.verify_at(&digits, 10),
        None => false,
    }
}

/// Generates a random valid RENAVAM.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = (0..10).map(|_| rng.gen_range(0..10)).collect();
    let check = VERIFIER
        .check_digit(&digits)
        .expect("base length matches weights");
    digits.push(check);
    digit_string(&digits)
}
