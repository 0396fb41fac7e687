//! Core in-memory collection type.
//!
//! Every transform in this crate operates on a [`Sequence`]: an ordered, indexable list of
//! elements. Non-mutating transforms (`map`/`filter`/`reduce`/`for_each`) borrow the sequence and
//! produce a new sequence or scalar. The two mutating transforms (`sort`/`reverse`) take
//! `&mut self`, reorder in place, and hand back the same sequence.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};

/// Ordered in-memory sequence of elements.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    /// Element storage, in order.
    pub items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create a sequence from its elements.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Create a new sequence by applying `transform` to every element.
    ///
    /// The output has the same length and order as `self`; `self` is left untouched.
    pub fn map_items<B, F>(&self, mut transform: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        Sequence::new(self.items.iter().map(|item| transform(item)).collect())
    }

    /// Create a new sequence containing only elements that match `predicate`.
    ///
    /// Surviving elements keep their relative order.
    pub fn filter_items<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let items = self
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        Self { items }
    }

    /// Fold all elements into an accumulator, starting from `initial`.
    ///
    /// Returns `initial` unchanged for an empty sequence.
    pub fn fold_items<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().fold(initial, |acc, item| combine(acc, item))
    }

    /// Fold all elements using the first element as the initial accumulator.
    ///
    /// Folding starts from the second element. Fails with [`TransformError::EmptyReduce`] on an
    /// empty sequence.
    pub fn reduce_items<F>(&self, mut combine: F) -> TransformResult<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self
            .items
            .split_first()
            .ok_or(TransformError::EmptyReduce)?;
        Ok(rest.iter().fold(first.clone(), |acc, item| combine(acc, item)))
    }

    /// Stable in-place sort using `compare`. Returns the same sequence.
    pub fn sort_items_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self
    }

    /// Stable in-place sort by each element's string rendering.
    ///
    /// This is plain lexicographic ordering, so numbers sort by their digits:
    /// `[23, 7, 12, 45]` becomes `[12, 23, 45, 7]`.
    pub fn sort_items_lexicographic(&mut self) -> &mut Self
    where
        T: ToString,
    {
        self.items.sort_by_cached_key(|item| item.to_string());
        self
    }

    /// Reverse element order in place. Returns the same sequence.
    pub fn reverse_items(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Call `visit` once per element, in order, with the element, its index and the whole
    /// sequence.
    pub fn for_each_item<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        for (index, item) in self.items.iter().enumerate() {
            visit(item, index, self.items.as_slice());
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
