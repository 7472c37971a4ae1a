//! Angolan NIF (Número de Identificação Fiscal): ten digits, leading digit
//! 1 or 2 (individuals) or 5 (companies), closing with a two-digit mod-89
//! remainder over the eight-digit base.
//!
//! The remainder is expressed through the weighted engine with weights
//! `10^k mod 89`, so `sum mod 89` equals the base read as a number mod 89.

use crate::checksum::{remainder_identity, ChecksumSpec};
use crate::sieve::{digit_string, digit_values, sieve};
use rand::seq::SliceRandom;
use rand::Rng;

const LENGTH: usize = 10;
const SYMBOLS: &[char] = &[' ', '.', '-'];
const LEADING: &[u32] = &[1, 2, 5];

// Powers of ten reduced mod 89, most significant position first.
const VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[49, 85, 53, 32, 21, 11, 10, 1],
    modulus: 89,
    remainder_rule: remainder_identity,
};

/// Strips spaces, dots and dashes from a transcribed NIF.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format and checksum validation.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    if !LEADING.contains(&digits[0]) {
        return false;
    }
    match VERIFIER.check_digit(&digits[..8]) {
        Some(remainder) => digits[8] * 10 + digits[9] == remainder,
        None => false,
    }
}

/// Generates a random valid NIF.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = Vec::with_capacity(LENGTH);
    digits.push(*LEADING.choose(&mut rng).expect("leading set is not empty"));
    digits.extend((0..7).map(|_| rng.gen_range(0..10)));
    let remainder = VERIFIER
        .check_digit(&digits)
        .expect("base length matches weights");
    digits.extend([remainder / 10, remainder % 10]);
    digit_string(&digits)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_nifs() {
        // 12345678 mod 89 == 43
        assert!(is_valid("1234567843"));
        // 50000001 mod 89 == 68
        assert!(is_valid("5000000168"));
    }

    #[test]
    fn invalid_nifs() {
        let invalid = vec![
            // wrong remainder
            "1234567844",
            "1234567800",
            // remainder pair 89 and above can never match
            "1234567899",
            // leading digit outside {1, 2, 5}
            "3234567843",
            "0234567843",
            "123456784",
            "12345678430",
            "",
            "123456784x",
        ];
        for nif in invalid {
            assert!(!is_valid(nif), "expected invalid: {nif:?}");
        }
    }

    #[test]
    fn generated_nifs_validate() {
        for _ in 0..1000 {
            let nif = generate();
            assert!(is_valid(&nif), "generated invalid nif: {nif}");
        }
    }
}
