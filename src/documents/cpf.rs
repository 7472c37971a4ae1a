//! CPF (Cadastro de Pessoas Físicas), the Brazilian individual taxpayer
//! number: nine base digits plus two chained modulus-11 verifiers.

use crate::checksum::{mod11_two_floor, ChecksumSpec};
use crate::format::insert_separators;
use crate::sieve::{all_same_digit, digit_string, digit_values, sieve};
use rand::Rng;

const LENGTH: usize = 11;
const SYMBOLS: &[char] = &['.', '-'];
const MASK: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

const FIRST_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_two_floor,
};
const SECOND_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_two_floor,
};

/// Strips the visual-aid symbols of a formatted CPF (`.` and `-`).
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format and checksum validation. Does not check that the number was ever
/// issued.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    // Degenerate sequences like 11111111111 satisfy the checksum by
    // coincidence and are never issued.
    if all_same_digit(&digits) {
        return false;
    }
    FIRST_VERIFIER.verify_at(&digits, 9) && SECOND_VERIFIER.verify_at(&digits, 10)
}

/// Renders a valid CPF as `NNN.NNN.NNN-NN`, or `None` if `input` fails
/// [`is_valid`].
pub fn format_cpf(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random valid CPF.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    loop {
        let mut digits: Vec<u32> = (0..9).map(|_| rng.gen_range(0..10)).collect();
        if all_same_digit(&digits) {
            continue;
        }
        let first = FIRST_VERIFIER
            .check_digit(&digits)
            .expect("base length matches weights");
        digits.push(first);
        let second = SECOND_VERIFIER
            .check_digit(&digits)
            .expect("base length matches weights");
        digits.push(second);
        return digit_string(&digits);
    }
}
