//! Symbol sieve and digit helpers shared by the document modules.

/// Removes every character present in `symbols` from `raw`, preserving the
/// order and case of everything else — including characters outside the
/// document's expected alphabet. A stray character the sieve does not know
/// about survives into the output and fails the downstream shape check,
/// surfacing corrupted input instead of silently repairing it.
pub fn sieve(raw: &str, symbols: &[char]) -> String {
    raw.chars().filter(|c| !symbols.contains(c)).collect()
}

/// Parses `input` as a fixed-length ASCII digit string. `None` if the length
/// is wrong or any character is not a decimal digit.
pub(crate) fn digit_values(input: &str, expected_len: usize) -> Option<Vec<u32>> {
    if input.chars().count() != expected_len {
        return None;
    }
    input.chars().map(|c| c.to_digit(10)).collect()
}

/// Renders a digit-value sequence back into an ASCII string. Values are
/// always 0-9 here; anything else is a programming error upstream.
pub(crate) fn digit_string(digits: &[u32]) -> String {
    digits.iter().map(|&d| (b'0' + d as u8) as char).collect()
}

/// True when every digit in the sequence is identical. Degenerate sequences
/// like `11111111111` checksum-validate by coincidence and are rejected by
/// the documents that guard against them.
pub(crate) fn all_same_digit(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod test {
    use super::*;

    const CPF_SYMBOLS: &[char] = &['.', '-'];

    #[test]
    fn strips_only_listed_symbols() {
        assert_eq!(sieve("111.444.777-35", CPF_SYMBOLS), "11144477735");
        // Unknown characters survive so the length check can reject them.
        assert_eq!(sieve("111.444x777-35", CPF_SYMBOLS), "111444x77735");
        assert_eq!(sieve("01310-200", &['-']), "01310200");
        assert_eq!(sieve("", CPF_SYMBOLS), "");
    }

    #[test]
    fn sieve_is_idempotent() {
        for input in ["111.444.777-35", "ab--..cd", "já visto ñô", "1234"] {
            let once = sieve(input, CPF_SYMBOLS);
            assert_eq!(sieve(&once, CPF_SYMBOLS), once);
        }
    }

    #[test]
    fn digit_values_rejects_shape_errors() {
        assert_eq!(digit_values("123", 3), Some(vec![1, 2, 3]));
        assert_eq!(digit_values("12a", 3), None);
        assert_eq!(digit_values("123", 4), None);
        assert_eq!(digit_values("", 0), Some(vec![]));
        // Multi-byte character in a digit position.
        assert_eq!(digit_values("1ñ3", 3), None);
    }

    #[test]
    fn all_same_detection() {
        assert!(all_same_digit(&[1, 1, 1, 1]));
        assert!(all_same_digit(&[7]));
        assert!(all_same_digit(&[]));
        assert!(!all_same_digit(&[1, 1, 2]));
    }
}
