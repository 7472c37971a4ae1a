//! Positional separator re-insertion for the `format_*` functions.

/// Rebuilds a display string by inserting `separators` (byte offset into the
/// bare digit string, separator char) while copying `digits` left to right.
/// Offsets are positions in the *unformatted* string and must be sorted.
/// Callers only pass strings that already passed their validator, so the
/// input is plain ASCII.
pub(crate) fn insert_separators(digits: &str, separators: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len());
    let mut next_sep = separators.iter().peekable();
    for (idx, c) in digits.chars().enumerate() {
        while let Some(&&(at, sep)) = next_sep.peek() {
            if at == idx {
                out.push(sep);
                next_sep.next();
            } else {
                break;
            }
        }
        out.push(c);
    }
    for &(_, sep) in next_sep {
        out.push(sep);
    }
    out
}
