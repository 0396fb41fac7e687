//! Element mapping for [`crate::types::Sequence`].

use crate::types::Sequence;

/// Returns a new [`Sequence`] by applying `transform` to every element.
///
/// This is a convenience wrapper around [`Sequence::map_items`].
pub fn map<A, B, F>(sequence: &Sequence<A>, transform: F) -> Sequence<B>
where
    F: FnMut(&A) -> B,
{
    sequence.map_items(transform)
}

/// Same contract as [`map`], written as an explicit loop that pushes into a fresh sequence.
pub fn map_with_loop<A, B, F>(sequence: &Sequence<A>, mut transform: F) -> Sequence<B>
where
    F: FnMut(&A) -> B,
{
    let mut out = Vec::with_capacity(sequence.len());
    for item in sequence {
        out.push(transform(item));
    }
    Sequence::new(out)
}
