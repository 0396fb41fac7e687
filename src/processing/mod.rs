//! In-memory sequence transformations.
//!
//! Every function here operates on a [`crate::types::Sequence`] and is a thin wrapper around the
//! corresponding `Sequence` method:
//!
//! - [`map()`] / [`map_with_loop()`]: element mapping, same length and order
//! - [`filter()`]: element filtering by predicate, order preserved
//! - [`reduce()`] / [`reduce_with()`]: folding, seeded by the first element or an explicit value
//! - [`sort()`] / [`sort_lexicographic()`]: stable in-place sorting
//! - [`split()`] / [`join()`] / [`reverse()`]: string and sequence conversions
//! - [`for_each()`]: visiting every element with its index
//!
//! `map`, `filter`, `reduce` and `for_each` never modify their input. `sort` and `reverse` take
//! `&mut` and return the same sequence they were given.
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use array_methods::processing::{filter, map, reduce_with};
//! use array_methods::types::Sequence;
//!
//! let numbers: Sequence<i64> = (1..=10).collect();
//!
//! let evens = filter(&numbers, |n| n % 2 == 0);
//! let doubled = map(&evens, |n| n * 2);
//! let total = reduce_with(&doubled, 0, |acc, n| acc + n);
//!
//! assert_eq!(total, 60);
//! assert_eq!(numbers.len(), 10);
//! ```

pub mod filter;
pub mod for_each;
pub mod map;
pub mod reduce;
pub mod sort;
pub mod strings;

pub use filter::filter;
pub use for_each::for_each;
pub use map::{map, map_with_loop};
pub use reduce::{reduce, reduce_with};
pub use sort::{ascending, by_rate_then_score, compare_sign, descending, sort, sort_lexicographic};
pub use strings::{count_occurrences, join, reverse, split};
