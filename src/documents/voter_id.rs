//! Título de eleitor, the Brazilian voter registration number: eight
//! sequential digits, a two-digit TSE federative-unit code, and two
//! modulus-11 verifiers.
//!
//! The verifier rule keeps the remainder itself as the digit (10 maps to 0),
//! with one historical quirk: for São Paulo (`01`) and Minas Gerais (`02`)
//! registrations a zero remainder produces digit 1, not 0.

use crate::checksum::{mod11_remainder, ChecksumSpec};
use crate::format::insert_separators;
use crate::sieve::{digit_string, digit_values, sieve};
use crate::tables;
use rand::seq::SliceRandom;
use rand::Rng;

const LENGTH: usize = 12;
const SYMBOLS: &[char] = &[' ', '.', '-'];
const MASK: &[(usize, char)] = &[(4, ' '), (8, ' ')];

const FIRST_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[2, 3, 4, 5, 6, 7, 8, 9],
    modulus: 11,
    remainder_rule: mod11_remainder,
};
const SECOND_VERIFIER: ChecksumSpec = ChecksumSpec {
    weights: &[7, 8, 9],
    modulus: 11,
    remainder_rule: mod11_remainder,
};

fn verifier_digit(spec: &ChecksumSpec, base: &[u32], unit_code: &str) -> Option<u32> {
    let remainder = spec.remainder(base)?;
    if remainder == 0 && matches!(unit_code, "01" | "02") {
        return Some(1);
    }
    Some(mod11_remainder(remainder))
}

fn unit_code_of(digits: &[u32]) -> String {
    digit_string(&digits[8..10])
}

/// Strips spaces, dots and dashes from a transcribed voter ID.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format, federative-unit membership and checksum validation.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    let unit = unit_code_of(&digits);
    if !tables::is_federative_unit_code(&unit) {
        return false;
    }
    let first = verifier_digit(&FIRST_VERIFIER, &digits[..8], &unit);
    if first != Some(digits[10]) {
        return false;
    }
    let second_base = [digits[8], digits[9], digits[10]];
    verifier_digit(&SECOND_VERIFIER, &second_base, &unit) == Some(digits[11])
}

/// Renders a valid voter ID as `NNNN NNNN NNNN`, or `None` if `input` fails
/// [`is_valid`].
pub fn format_voter_id(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random valid voter ID for a random federative unit.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let &(code, _) = tables::FEDERATIVE_UNITS
        .choose(&mut rng)
        .expect("federative-unit table is not empty");
    generate_for_code(code)
}

/// Generates a voter ID for a federative unit given by its abbreviation
/// (`"SP"`, `"MG"`, ...). `None` for unknown abbreviations.
pub fn generate_for_unit(abbrev: &str) -> Option<String> {
    tables::federative_unit_code(abbrev).map(generate_for_code)
}

fn generate_for_code(code: &str) -> String {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = (0..8).map(|_| rng.gen_range(0..10)).collect();
    digits.extend(code.chars().map(|c| c.to_digit(10).unwrap_or(0)));
    let first = verifier_digit(&FIRST_VERIFIER, &digits[..8], code)
        .expect("base length matches weights");
    digits.push(first);
    let second_base = [digits[8], digits[9], first];
    let second = verifier_digit(&SECOND_VERIFIER, &second_base, code)
        .expect("base length matches weights");
    digits.push(second);
    digit_string(&digits)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_voter_ids() {
        assert!(is_valid("217633460930"));
    }

    #[test]
    fn invalid_voter_ids() {
        let invalid = vec![
            // federative-unit code 90 does not exist
            "123456789011",
            // wrong first verifier
            "217633460920",
            // wrong second verifier
            "217633460931",
            // wrong length
            "21763346093",
            "2176334609300",
            "",
            "21763346093x",
        ];
        for id in invalid {
            assert!(!is_valid(id), "expected invalid: {id:?}");
        }
    }

    #[test]
    fn formatting() {
        assert_eq!(
            format_voter_id("217633460930").as_deref(),
            Some("2176 3346 0930")
        );
        assert_eq!(format_voter_id("123456789011"), None);
    }

    #[test]
    fn generated_voter_ids_validate() {
        for _ in 0..1000 {
            let id = generate();
            assert!(is_valid(&id), "generated invalid voter id: {id}");
        }
    }

    #[test]
    fn unit_discriminator() {
        // SP and MG exercise the zero-remainder override path.
        for abbrev in ["SP", "MG", "SC", "ZZ"] {
            for _ in 0..200 {
                let id = generate_for_unit(abbrev).unwrap();
                assert!(is_valid(&id), "generated invalid {abbrev} id: {id}");
            }
        }
        assert_eq!(generate_for_unit("XX"), None);
    }
}
