//! `array-methods` is a small library of order-preserving collection transforms over an in-memory
//! [`types::Sequence`], plus a demonstrator that applies them to fixed sample data and reports the
//! results.
//!
//! ## What the transforms guarantee
//!
//! - [`processing::map()`]: same length and order as the input; the input is not modified.
//! - [`processing::filter()`]: keeps matching elements in their relative order.
//! - [`processing::reduce()`]: seeded by the first element; fails with
//!   [`TransformError::EmptyReduce`] on an empty sequence. [`processing::reduce_with()`] takes an
//!   explicit initial accumulator and never fails.
//! - [`processing::sort()`] / [`processing::reverse()`]: mutate in place and return the same
//!   sequence. Sorting is stable and always takes an explicit comparator;
//!   [`processing::sort_lexicographic()`] is the string-rendering ordering, named so it is never
//!   picked by accident for numbers.
//! - [`processing::split()`] / [`processing::join()`]: `join(split(s, ""), "") == s`.
//! - [`processing::for_each()`]: visits every element with its index and the whole sequence.
//!
//! ## Quick example
//!
//! ```rust
//! use array_methods::processing::{ascending, map, reduce, sort, sort_lexicographic};
//! use array_methods::types::Sequence;
//!
//! # fn main() -> Result<(), array_methods::TransformError> {
//! let numbers = Sequence::from(vec![2i64, 5, 7, 9]);
//! assert_eq!(map(&numbers, |n| n * 2).items, vec![4, 10, 14, 18]);
//! assert_eq!(reduce(&numbers, |acc, n| acc + n)?, 23);
//!
//! let mut unsorted = Sequence::from(vec![23i64, 7, 12, 45]);
//! assert_eq!(sort_lexicographic(&mut unsorted).items, vec![12, 23, 45, 7]);
//! assert_eq!(sort(&mut unsorted, ascending).items, vec![7, 12, 23, 45]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the demonstrator
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use array_methods::demos::{DemoOptions, DemoRunner};
//! use array_methods::report::{RecordingReporter, Reporter};
//!
//! # fn main() -> Result<(), array_methods::TransformError> {
//! let recorder = Arc::new(RecordingReporter::new());
//! let reporter: Arc<dyn Reporter> = recorder.clone();
//! let runner = DemoRunner::new(DemoOptions::default()).with_reporter(reporter);
//!
//! runner.run_all()?;
//! assert_eq!(recorder.result("sum"), Some(serde_json::json!(23)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Sequence`] collection
//! - [`processing`]: map/filter/reduce/sort/split/join/reverse/for_each
//! - [`records`]: typed sample records (students, listings, reviews, ...)
//! - [`demos`]: sample data, composed record helpers and the [`demos::DemoRunner`]
//! - [`report`]: the [`report::Reporter`] observer trait and its implementations
//! - [`error`]: error types

pub mod demos;
pub mod error;
pub mod processing;
pub mod records;
pub mod report;
pub mod types;

pub use error::{TransformError, TransformResult};
