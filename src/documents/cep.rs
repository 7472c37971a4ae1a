//! CEP (Código de Endereçamento Postal), the Brazilian postal code. Eight
//! digits, shape only — CEPs carry no check digit.

use crate::format::insert_separators;
use crate::sieve::{digit_string, digit_values, sieve};
use rand::Rng;

const LENGTH: usize = 8;
const SYMBOLS: &[char] = &['-', '.'];
const MASK: &[(usize, char)] = &[(5, '-')];

/// Strips the dash and dot of a formatted CEP.
pub fn remove_symbols(input: &str) -> String {
    sieve(input, SYMBOLS)
}

/// Shape validation: exactly eight ASCII digits.
pub fn is_valid(input: &str) -> bool {
    digit_values(input, LENGTH).is_some()
}

/// Renders a valid CEP as `NNNNN-NNN`, or `None` if `input` fails
/// [`is_valid`].
pub fn format_cep(input: &str) -> Option<String> {
    is_valid(input).then(|| insert_separators(input, MASK))
}

/// Generates a random well-formed CEP.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let digits: Vec<u32> = (0..LENGTH).map(|_| rng.gen_range(0..10)).collect();
    digit_string(&digits)
}
