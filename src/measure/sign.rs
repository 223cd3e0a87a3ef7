/// Leading negative marker
pub const NEGATIVE_MARKER: char = '-';

/// Strip at most one leading negative marker.
/// Returns whether it was present and the remaining input.
pub fn split_sign(input: &str) -> (bool, &str) {
    match input.strip_prefix(NEGATIVE_MARKER) {
        Some(rest) => (true, rest),
        None => (false, input),
    }
}
