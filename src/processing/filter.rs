//! Element filtering for [`crate::types::Sequence`].

use crate::types::Sequence;

/// Returns a new [`Sequence`] containing only elements for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`Sequence::filter_items`].
pub fn filter<A, F>(sequence: &Sequence<A>, predicate: F) -> Sequence<A>
where
    A: Clone,
    F: FnMut(&A) -> bool,
{
    sequence.filter_items(predicate)
}
