//! Brazilian phone numbers: a two-digit DDD area code followed by a
//! nine-digit mobile number (leading 9) or an eight-digit landline (leading
//! 2-5). Shape checks only; no carrier or allocation lookup.

use crate::format::insert_separators;
use crate::sieve::{digit_string, sieve};
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

const SYMBOLS: &[char] = &['(', ')', '-', '+', ' '];

lazy_static! {
    static ref MOBILE: Regex = Regex::new(r"^[1-9][1-9]9[0-9]{8}$").unwrap();
    static ref LANDLINE: Regex = Regex::new(r"^[1-9][1-9][2-5][0-9]{7}$").unwrap();
}

/// Strips the visual-aid symbols of a formatted phone number
/// (parentheses, dash, plus and space).
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// True for a bare mobile number: DDD plus nine digits starting with 9.
pub fn is_valid_mobile(input: &str) -> bool {
    MOBILE.is_match(input)
}

/// True for a bare landline number: DDD plus eight digits starting 2-5.
pub fn is_valid_landline(input: &str) -> bool {
    LANDLINE.is_match(input)
}

/// True for either kind of bare phone number.
pub fn is_valid(input: &str) -> bool {
    is_valid_mobile(input) || is_valid_landline(input)
}

/// Renders a valid phone number as `(NN)NNNNN-NNNN` (mobile) or
/// `(NN)NNNN-NNNN` (landline), or `None` if `input` fails [`is_valid`].
pub fn format_phone(input: &str) -> Option<String> {
    if is_valid_mobile(input) {
        Some(format!(
            "({}){}",
            &input[..2],
            insert_separators(&input[2..], &[(5, '-')])
        ))
    } else if is_valid_landline(input) {
        Some(format!(
            "({}){}",
            &input[..2],
            insert_separators(&input[2..], &[(4, '-')])
        ))
    } else {
        None
    }
}

fn random_ddd(rng: &mut impl Rng) -> Vec<u32> {
    vec![rng.gen_range(1..10), rng.gen_range(1..10)]
}

/// Generates a random valid mobile number.
pub fn generate_mobile_phone() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = random_ddd(&mut rng);
    digits.push(9);
    digits.extend((0..8).map(|_| rng.gen_range(0..10)));
    digit_string(&digits)
}

/// Generates a random valid landline number.
pub fn generate_landline_phone() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = random_ddd(&mut rng);
    digits.push(rng.gen_range(2..6));
    digits.extend((0..7).map(|_| rng.gen_range(0..10)));
    digit_string(&digits)
}

/// Generates a random valid phone number of either kind.
pub fn generate() -> String {
    if rand::thread_rng().gen_bool(0.5) {
        generate_mobile_phone()
    } else {
        generate_landline_phone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_phones() {
        assert!(is_valid_mobile("11994516361"));
        assert!(is_valid_landline("1938814933"));
        assert!(is_valid("11994516361"));
        assert!(is_valid("1938814933"));
    }

    #[test]
    fn invalid_phones() {
        let invalid = vec![
            // DDD digits must be 1-9
            "01994516361",
            "10994516361",
            // mobile must start with 9, landline with 2-5
            "11894516361",
            "1918814933",
            "1968814933",
            // wrong length
            "119945163612",
            "193881493",
            "",
            // symbols not stripped
            "(11)99451-6361",
            "11 99451 6361",
            "1199451636a",
        ];
        for phone in invalid {
            assert!(!is_valid(phone), "expected invalid: {phone:?}");
        }
    }

    #[test]
    fn formatting() {
        assert_eq!(
            format_phone("11994516361").as_deref(),
            Some("(11)99451-6361")
        );
        assert_eq!(format_phone("1938814933").as_deref(), Some("(19)3881-4933"));
        assert_eq!(format_phone("01994516361"), None);
        assert!(is_valid(&remove_symbols("(11)99451-6361")));
        assert!(is_valid(&remove_symbols("+55 11 99451-6361").trim_start_matches("55")));
    }

    #[test]
    fn generated_phones_validate() {
        for _ in 0..1000 {
            assert!(is_valid_mobile(&generate_mobile_phone()));
            assert!(is_valid_landline(&generate_landline_phone()));
            assert!(is_valid(&generate()));
        }
    }
}
