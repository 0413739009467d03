//! Byte-bounded string helpers

/// Cuts `input` to at most `max_len` bytes without splitting a character.
///
/// Returns the kept prefix and whether anything was cut.
pub(crate) fn truncate_to_boundary(input: &str, max_len: usize) -> (&str, bool) {
    if input.len() <= max_len {
        return (input, false);
    }
    let mut end = max_len;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    (input.get(..end).unwrap_or_default(), true)
}
