//! Numeração única do CNJ, the Brazilian legal-process number:
//! `NNNNNNN-DD.AAAA.J.TR.OOOO` — a seven-digit sequential, an ISO 7064
//! MOD 97-10 verifier pair, the filing year, the judiciary segment, the
//! court code and the origin unit.
//!
//! Validity requires both the checksum and membership of the `J`/`TR` pair
//! in the court registry.

use crate::checksum::mod97_verifier;
use crate::format::insert_separators;
use crate::sieve::{digit_string, digit_values, sieve};
use crate::tables;
use chrono::Datelike;
use rand::seq::SliceRandom;
use rand::Rng;

const LENGTH: usize = 20;
const SYMBOLS: &[char] = &['-', '.'];
const MASK: &[(usize, char)] = &[(7, '-'), (9, '.'), (13, '.'), (14, '.'), (16, '.')];

/// The verifier pair is computed over the number with its two check digits
/// removed: sequential, year, segment, court, origin, in that order.
fn verifier_base(digits: &[u32]) -> Vec<u32> {
    let mut base = Vec::with_capacity(18);
    base.extend_from_slice(&digits[..7]);
    base.extend_from_slice(&digits[9..]);
    base
}

/// Strips the dashes and dots of a formatted process number.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Format, court-registry membership and checksum validation.
pub fn is_valid(input: &str) -> bool {
    let digits = match digit_values(input, LENGTH) {
        Some(digits) => digits,
        None => return false,
    };
    let segment = digits[13];
    let court = digits[14] * 10 + digits[15];
    if !tables::is_court_code(segment, court) {
        return false;
    }
    let verifier = digits[7] * 10 + digits[8];
    mod97_verifier(&verifier_base(&digits)) == verifier
}

/// Renders a valid process number as `NNNNNNN-DD.AAAA.J.TR.OOOO`, or `None`
/// if `input` fails [`is_valid`].
pub fn format_legal_process(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random valid process number filed in the current year, in a
/// random judiciary segment.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let year = chrono::Utc::now().year() as u32;
    let segment = rng.gen_range(1..=9);
    generate_for(year, segment).expect("segments 1-9 are all registered")
}

/// Generates a process number for a specific filing year and judiciary
/// segment (1-9). `None` for segments absent from the court registry.
pub fn generate_for(year: u32, segment: u32) -> Option<String> {
    let mut rng = rand::thread_rng();
    let courts = tables::court_codes(segment)?;
    let court = *courts.choose(&mut rng)?;
    let year = year % 10_000;

    let mut digits: Vec<u32> = (0..7).map(|_| rng.gen_range(0..10)).collect();
    digits.extend([year / 1000, year / 100 % 10, year / 10 % 10, year % 10]);
    digits.push(segment);
    digits.extend([court / 10, court % 10]);
    digits.extend((0..4).map(|_| rng.gen_range(0..10)));

    let verifier = mod97_verifier(&digits);
    let mut full = Vec::with_capacity(LENGTH);
    full.extend_from_slice(&digits[..7]);
    full.extend([verifier / 10, verifier % 10]);
    full.extend_from_slice(&digits[7..]);
    Some(digit_string(&full))
}
