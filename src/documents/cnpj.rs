//! CNPJ (Cadastro Nacional da Pessoa Jurídica), the Brazilian company
//! registration number: eight base digits, a four-digit branch number, and
//! two chained modulus-11 verifiers.

use crate::checksum::{mod11_two_floor, ChecksumSpec};
use crate::format::insert_separators;
use crate::sieve::{all_same_digit, digit_string, digit_values, sieve};
use rand::Rng;

const LENGTH: usize = 14;
const SYMBOLS: &[char] = &['.', '/', '-'];
const MASK: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

const FIRST_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_two_floor,
};
const SECOND_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    modulus: 11,
    remainder_rule: mod11_two_floor,
};

/// Strips the visual-aid symbols of a formatted CNPJ (`.`, `/` and `-`).
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format and checksum validation. Does not check registry existence.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    if all_same_digit(&digits) {
        return false;
    }
    FIRST_VERIFIER.verify_at(&digits, 12) && SECOND_VERIFIER.verify_at(&digits, 13)
}

/// Renders a valid CNPJ as `NN.NNN.NNN/NNNN-NN`, or `None` if `input` fails
/// [`is_valid`].
pub fn format_cnpj(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random valid CNPJ for branch 0001 (the head office).
pub fn generate() -> String {
    generate_with_branch(1)
}

/// Generates a random valid CNPJ for a specific branch number. Branch
/// numbers above 9999 wrap into the four-digit field.
pub fn generate_with_branch(branch: u32) -> String {
    let mut rng = rand::thread_rng();
    let branch = branch % 10_000;
    loop {
        let mut digits: Vec<u32> = (0..8).map(|_| rng.gen_range(0..10)).collect();
        digits.extend([branch / 1000, branch / 100 % 10, branch / 10 % 10, branch % 10]);
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
