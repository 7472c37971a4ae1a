//! German Steuerliche Identifikationsnummer (IdNr): ten base digits with a
//! structural repetition rule, plus an ISO 7064 MOD 11,10 hybrid check digit.
//!
//! Structure rule: the leading digit is nonzero and, among the first ten
//! digits, exactly one value appears twice or three times; the rest are
//! distinct.

use crate::checksum::mod11_10_hybrid;
use crate::sieve::{digit_string, digit_values, sieve};
use rand::seq::SliceRandom;
use rand::Rng;

const LENGTH: usize = 11;
const SYMBOLS: &[char] = &[' '];
const MASK: &[(usize, char)] = &[(2, ' '), (5, ' '), (8, ' ')];

fn has_valid_structure(base: &[u32]) -> bool {
    if base[0] == 0 {
        return false;
    }
    let mut counts = [0u8; 10];
    for &digit in base {
        counts[digit as usize] += 1;
    }
    let mut repeated = counts.iter().copied().filter(|&c| c > 1);
    matches!((repeated.next(), repeated.next()), (Some(2) | Some(3), None))
}

/// Strips the grouping spaces of a printed IdNr.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Structure and checksum validation.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    has_valid_structure(&digits[..10]) && mod11_10_hybrid(&digits[..10]) == digits[10]
}

/// Renders a valid IdNr with its grouping spaces (`NN NNN NNN NNN`), or
/// `None` if `input` fails [`is_valid`].
pub fn format_german_tin(input: &str) -> Option<String> {
    is_valid(input).then(|| crate::format::insert_separators(input, MASK))
}

/// Generates a random valid IdNr: nine distinct digits with one of them
/// duplicated, shuffled until the leading digit is nonzero.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    loop {
        let mut pool: Vec<u32> = (0..10).collect();
        pool.shuffle(&mut rng);
        // Drop one value, duplicate another: nine distinct + one repeat.
        let mut base: Vec<u32> = pool[..9].to_vec();
        base.push(pool[rng.gen_range(0..9)]);
        base.shuffle(&mut rng);
        if base[0] == 0 {
            continue;
        }
        let check = mod11_10_hybrid(&base);
        base.push(check);
        return digit_string(&base);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_idnrs() {
        // Published BZSt test number.
        assert!(is_valid("86095742719"));
        assert!(is_valid(&remove_symbols("86 095 742 719")));
    }

    #[test]
    fn invalid_idnrs() {
        let invalid = vec![
            // wrong check digit
            "86095742710",
            "86095742718",
            // leading zero
            "06095742719",
            // no repeated digit among the first ten
            "12345678901",
            // digit repeated four times
            "11117654320",
            // two different repeated digits
            "11223456780",
            "8609574271",
            "860957427190",
            "",
            "8609574271x",
        ];
        for id in invalid {
            assert!(!is_valid(id), "expected invalid: {id:?}");
        }
    }

    #[test]
    fn formatting() {
        assert_eq!(
            format_german_tin("86095742719").as_deref(),
            Some("86 095 742 719")
        );
        assert_eq!(format_german_tin("86095742710"), None);
    }

    #[test]
    fn generated_idnrs_validate() {
        for _ in 0..1000 {
            let id = generate();
            assert!(is_valid(&id), "generated invalid IdNr: {id}");
        }
    }
}
