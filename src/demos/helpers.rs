//! Record-level transforms built from the [`crate::processing`] primitives.

use crate::processing::{filter, map, reduce_with};
use crate::records::{Listing, Person, Product, Student, StudentTotal};
use crate::types::Sequence;

/// Prefix every name with `prefix`.
pub fn prefix_names(names: &Sequence<String>, prefix: &str) -> Sequence<String> {
    map(names, |name| format!("{prefix}{name}"))
}

/// Each student's name, in order.
pub fn student_names(students: &Sequence<Student>) -> Sequence<String> {
    map(students, |s| s.name.clone())
}

/// Each student's name with `firstProject + secondProject`.
pub fn student_totals(students: &Sequence<Student>) -> Sequence<StudentTotal> {
    map(students, |s| StudentTotal {
        name: s.name.clone(),
        total: s.total(),
    })
}

/// Sum of string lengths, counted in UTF-16 code units.
pub fn total_length(words: &Sequence<String>) -> usize {
    reduce_with(words, 0, |acc, w| acc + w.encode_utf16().count())
}

/// Sum of every person's age.
pub fn total_age(people: &Sequence<Person>) -> u64 {
    reduce_with(people, 0, |acc, p| acc + u64::from(p.age))
}

/// Sum of `rate` over the product's own reviews.
pub fn total_review_rate(product: &Product) -> u64 {
    reduce_with(&product.reviews, 0, |acc, r| acc + u64::from(r.rate))
}

/// Listings priced strictly above `price`.
pub fn places_above(places: &Sequence<Listing>, price: u32) -> Sequence<Listing> {
    filter(places, |p| p.price > price)
}

/// Titles of listings with a pool, in their original order.
pub fn titles_of_places_with_pool(places: &Sequence<Listing>) -> Sequence<String> {
    let pools = filter(places, |p| p.pool);
    map(&pools, |p| p.title.clone())
}
