//! Reduction (fold) operations for [`crate::types::Sequence`].

use crate::error::TransformResult;
use crate::types::Sequence;

/// Reduce a sequence using its first element as the initial accumulator.
///
/// - Folding starts from the second element.
/// - A single-element sequence returns that element without calling `combine`.
/// - Returns [`crate::TransformError::EmptyReduce`] for an empty sequence.
pub fn reduce<A, F>(sequence: &Sequence<A>, combine: F) -> TransformResult<A>
where
    A: Clone,
    F: FnMut(A, &A) -> A,
{
    sequence.reduce_items(combine)
}

/// Reduce a sequence starting from an explicit `initial` accumulator.
///
/// The accumulator type may differ from the element type. Returns `initial` for an empty
/// sequence.
pub fn reduce_with<A, Acc, F>(sequence: &Sequence<A>, initial: Acc, combine: F) -> Acc
where
    F: FnMut(Acc, &A) -> Acc,
{
    sequence.fold_items(initial, combine)
}
