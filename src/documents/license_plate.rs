//! Brazilian vehicle license plates: the pre-2018 `LLLNNNN` format and the
//! Mercosul `LLLNLNN` format.

use crate::sieve::sieve;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

const SYMBOLS: &[char] = &['-', ' '];

lazy_static! {
    static ref OLD_FORMAT: Regex = Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap();
    static ref MERCOSUL: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").unwrap();
}

/// Strips the dash and spaces of a transcribed plate.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// True for an old-format plate (`ABC1234`). Case-insensitive.
pub fn is_valid_old_format(input: &str) -> bool {
    OLD_FORMAT.is_match(&input.to_uppercase())
}

/// True for a Mercosul plate (`ABC1D23`). Case-insensitive.
pub fn is_valid_mercosul(input: &str) -> bool {
    MERCOSUL.is_match(&input.to_uppercase())
}

/// True for a plate in either format.
pub fn is_valid(input: &str) -> bool {
    is_valid_old_format(input) || is_valid_mercosul(input)
}

/// Renders a valid plate for display: `ABC-1234` for the old format,
/// uppercase `ABC1D23` for Mercosul. `None` if `input` fails [`is_valid`].
pub fn format_license_plate(input: &str) -> Option<String> {
    let plate = input.to_uppercase();
    if is_valid_old_format(&plate) {
        Some(format!("{}-{}", &plate[..3], &plate[3..]))
    } else if is_valid_mercosul(&plate) {
        Some(plate)
    } else {
        None
    }
}

/// Converts an old-format plate to its Mercosul equivalent: the second
/// numeral becomes the letter at its alphabet offset (0 -> A, ..., 9 -> J).
/// `None` if `input` is not a valid old-format plate.
pub fn convert_to_mercosul(input: &str) -> Option<String> {
    if !is_valid_old_format(input) {
        return None;
    }
    let mut plate: Vec<u8> = input.to_uppercase().into_bytes();
    plate[4] = b'A' + (plate[4] - b'0');
    String::from_utf8(plate).ok()
}

fn random_letter(rng: &mut impl Rng) -> char {
    (b'A' + rng.gen_range(0..26)) as char
}

/// Generates a random Mercosul plate.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut plate = String::with_capacity(7);
    for _ in 0..3 {
        plate.push(random_letter(&mut rng));
    }
    plate.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    plate.push(random_letter(&mut rng));
    for _ in 0..2 {
        plate.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    }
    plate
}

/// Generates a random old-format plate.
pub fn generate_old_format() -> String {
    let mut rng = rand::thread_rng();
    let mut plate = String::with_capacity(7);
    for _ in 0..3 {
        plate.push(random_letter(&mut rng));
    }
    for _ in 0..4 {
        plate.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    }
    plate
}
