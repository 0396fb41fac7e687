//! Fixed literal inputs for the demo sections.
//!
//! Every call builds a fresh value; nothing here is shared between sections.

use crate::records::{Listing, Person, Product, ProductReview, Review, Student};
use crate::types::Sequence;

/// `[1, 2, 3, 4, 5]`, the map input.
pub fn numbers() -> Sequence<i64> {
    Sequence::from(vec![1, 2, 3, 4, 5])
}

/// Lowercase first names to prefix.
pub fn beatles() -> Sequence<String> {
    ["john", "paul", "george", "ringo"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Students with two project grades each.
pub fn students() -> Sequence<Student> {
    Sequence::from(vec![
        Student::new("Tony Parker", 80, 75),
        Student::new("Marc Barchini", 84, 65),
        Student::new("Claudia Lopez", 45, 95),
        Student::new("Carolina Perez", 85, 72),
    ])
}

/// `[2, 5, 7, 9]`, the seedless reduce input.
pub fn numbers_to_sum() -> Sequence<i64> {
    Sequence::from(vec![2, 5, 7, 9])
}

/// Words whose lengths are summed.
pub fn words() -> Sequence<String> {
    ["foo", "bar", "baz"].into_iter().map(String::from).collect()
}

/// People whose ages are summed.
pub fn people() -> Sequence<Person> {
    Sequence::from(vec![
        Person::new("Candice", 25),
        Person::new("Tommy", 30),
        Person::new("Allen", 49),
        Person::new("Nettie", 21),
        Person::new("Stuart", 17),
    ])
}

/// A product owning five reviews.
pub fn product() -> Product {
    Product {
        name: "AmazonBasics Apple Certified Lightning to USB Cable".to_string(),
        price: 7.99,
        company: "Amazon".to_string(),
        reviews: Sequence::from(vec![
            ProductReview::new("Pavel Nedved", "It was really useful, strongly recommended", 4),
            ProductReview::new("Alvaro Trezeguet", "It lasted 2 days", 1),
            ProductReview::new("David Recoba", "Awesome", 5),
            ProductReview::new("Jose Romero", "Good value for money", 4),
            ProductReview::new("Antonio Cano", "It broke really fast", 2),
        ]),
    }
}

/// `1..=10`.
pub fn one_to_ten() -> Sequence<i64> {
    (1..=10).collect()
}

/// Five rental listings, three with a pool.
pub fn places() -> Sequence<Listing> {
    Sequence::from(vec![
        Listing::new("Awesome Suite 20 away from la Rambla", 200, "Private Room", true, false),
        Listing::new("Private apartment", 190, "Entire Place", true, true),
        Listing::new("Apartment with awesome views", 400, "Entire Place", false, false),
        Listing::new("Apartment in la Rambla", 150, "Private Room", false, true),
        Listing::new("Comfortable place in Barcelonas center", 390, "Entire place", true, true),
    ])
}

/// Message split into characters and reversed.
pub const MESSAGE: &str = "hello world";

/// String whose `'o'`s are counted.
pub const GREETING: &str = "Hello World";

/// City names for the lexicographic sort.
pub fn cities() -> Sequence<String> {
    ["berlin", "barcelona", "lissabon"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// `[23, 7, 12, 45]`, sorted both lexicographically and numerically.
pub fn unsorted_numbers() -> Sequence<i64> {
    Sequence::from(vec![23, 7, 12, 45])
}

/// Reviews for the rate-then-score sort.
pub fn reviews() -> Sequence<Review> {
    Sequence::from(vec![
        Review::new("foo", 9, 7),
        Review::new("bar", 9, 5),
        Review::new("baz", 5, 4),
    ])
}

/// `[3, 6, 9]`, the for_each input.
pub fn visit_array() -> Sequence<i64> {
    Sequence::from(vec![3, 6, 9])
}
