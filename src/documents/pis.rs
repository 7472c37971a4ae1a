//! PIS/PASEP, the Brazilian social-integration program number: ten base
//! digits and one modulus-11 verifier.

use crate::checksum::{mod11_two_floor, ChecksumSpec};
use crate::format::insert_separators;
use crate::sieve::{digit_string, digit_values, sieve};
use rand::Rng;

const LENGTH: usize = 11;
const SYMBOLS: &[char] = &['.', '-'];
const MASK: &[(usize, char)] = &[(3, '.'), (8, '.'), (10, '-')];

const VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_two_floor,
};

/// Strips the visual-aid symbols of a formatted PIS (`.` and `-`).
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

/// Renders a valid PIS as `NNN.NNNNN.NN-N`, or `None` if `input` fails
/// [`is_valid`].
pub fn format_pis(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random valid PIS.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = (0..10).map(|_| rng.gen_range(0..10)).collect();
    let check = VERIFIER
        .check_digit(&digits)
        .expect("base length matches weights");
    digits.push(check);
    digit_string(&digits)
}
