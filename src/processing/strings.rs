//! String/sequence conversions: split, join, reverse.

use crate::types::Sequence;

/// Split `s` on `separator`.
///
/// An empty separator splits into individual characters (an empty string yields an empty
/// sequence). Otherwise a separator found `k` times yields `k + 1` segments, including empty
/// leading/trailing segments.
pub fn split(s: &str, separator: &str) -> Sequence<String> {
    if separator.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(separator).map(String::from).collect()
}

/// Concatenate elements with `separator` between consecutive elements.
pub fn join<S>(sequence: &Sequence<S>, separator: &str) -> String
where
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in sequence.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Reverse `sequence` in place and return the same sequence.
///
/// This is a convenience wrapper around [`Sequence::reverse_items`].
pub fn reverse<A>(sequence: &mut Sequence<A>) -> &mut Sequence<A> {
    sequence.reverse_items()
}

/// Count occurrences of `c` in `s` as `split(s, c).len() - 1`.
pub fn count_occurrences(s: &str, c: char) -> usize {
    let mut buf = [0u8; 4];
    split(s, c.encode_utf8(&mut buf)).len() - 1
}
