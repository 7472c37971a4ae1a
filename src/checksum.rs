//! Weighted check-digit arithmetic shared by the document modules.
//!
//! Every document type with a computable verifier digit is described by a
//! [`ChecksumSpec`]: a weight per base-digit position, a modulus, and a rule
//! mapping the raw remainder to the final check digit. Multi-digit verifiers
//! (CPF, CNPJ, voter ID) are chained by the caller: the first computed digit
//! is appended to the base before the second spec is applied.

/// One verifier digit's worth of checksum parameters.
#[derive(Debug, Clone, Copy)]
pub struct ChecksumSpec {
    pub weights: &'static [u32],
    pub modulus: u32,
    pub remainder_rule: fn(u32) -> u32,
}

impl ChecksumSpec {
    /// Raw `weighted-sum mod modulus`, before the remainder rule. `None`
    /// when the digit count does not match the weight count.
    pub fn remainder(&self, base: &[u32]) -> Option<u32> {
        if base.len() != self.weights.len() {
            return None;
        }
        let sum: u32 = base
            .iter()
            .zip(self.weights.iter())
            .map(|(digit, weight)| digit * weight)
            .sum();
        Some(sum % self.modulus)
    }

    /// Computes the check digit for `base`, or `None` when the digit count
    /// does not match the weight count.
    pub fn check_digit(&self, base: &[u32]) -> Option<u32> {
        self.remainder(base).map(self.remainder_rule)
    }

    /// Verifies that `digits` ends with the check digit computed over the
    /// positions before `check_index`.
    pub fn verify_at(&self, digits: &[u32], check_index: usize) -> bool {
        match digits.get(check_index) {
            Some(&expected) => self.check_digit(&digits[..check_index]) == Some(expected),
            None => false,
        }
    }
}

/// The dominant modulus-11 rule: remainders 0 and 1 both collapse to 0,
/// anything else becomes `11 - r`. Used by CPF, CNPJ and PIS.
pub fn mod11_two_floor(remainder: u32) -> u32 {
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// RENAVAM's rule: `(10 * r mod 11) mod 10`, which is `11 - r` with the
/// overflow at `r == 1` folded back to 0.
pub fn mod11_times_ten(remainder: u32) -> u32 {
    (remainder * 10 % 11) % 10
}

/// Voter-ID rule: the remainder is the digit, except 10 maps to 0. The
/// São Paulo/Minas Gerais zero-remainder override lives in the voter-ID
/// module since it depends on the federative-union field, not the sum.
pub fn mod11_remainder(remainder: u32) -> u32 {
    if remainder == 10 {
        0
    } else {
        remainder
    }
}

/// Identity rule for specs whose check value is the remainder itself
/// (the Angolan mod-89 pair).
pub fn remainder_identity(remainder: u32) -> u32 {
    remainder
}

/// ISO 7064 MOD 97-10 verifier pair over a digit stream: `98 - (N * 100 mod
/// 97)` where `N` is the number the digits spell. Streamed left to right so
/// 18-digit inputs never need a wide integer.
pub fn mod97_verifier(digits: &[u32]) -> u32 {
    let mut remainder: u32 = 0;
    for &digit in digits {
        remainder = (remainder * 10 + digit) % 97;
    }
    98 - (remainder * 100) % 97
}

/// ISO 7064 MOD 11,10 hybrid check digit (German IdNr). Iterative, so it
/// does not factor through a [`ChecksumSpec`] weight table.
pub fn mod11_10_hybrid(digits: &[u32]) -> u32 {
    let mut product: u32 = 10;
    for &digit in digits {
        let mut sum = (digit + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (sum * 2) % 11;
    }
    (11 - product) % 10
}
