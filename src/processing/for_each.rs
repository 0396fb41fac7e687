//! Per-element visiting for [`crate::types::Sequence`].

use crate::types::Sequence;

/// Call `visit` once per element, in order, with `(element, index, whole sequence)`.
///
/// There is no early exit and no return value; use an iterator when either is needed.
/// This is a convenience wrapper around [`Sequence::for_each_item`].
pub fn for_each<A, F>(sequence: &Sequence<A>, visit: F)
where
    F: FnMut(&A, usize, &[A]),
{
    sequence.for_each_item(visit)
}
