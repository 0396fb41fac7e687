//! Fixed-shape records used by the demonstrator.
//!
//! Each record is a plain struct with named, typed fields. They serialize to JSON objects with the
//! same field names the sample data uses (`firstProject`, `type`, ...), so a report dump reads like
//! the source data.

use serde::{Deserialize, Serialize};

use crate::types::Sequence;

/// A student and their grades in two projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub first_project: u32,
    pub second_project: u32,
}

impl Student {
    /// Create a student with both project grades.
    pub fn new(name: impl Into<String>, first_project: u32, second_project: u32) -> Self {
        Self {
            name: name.into(),
            first_project,
            second_project,
        }
    }

    /// Sum of both project grades, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.first_project) + u64::from(self.second_project)
    }
}

/// A student's name paired with their summed project grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTotal {
    pub name: String,
    pub total: u64,
}

/// A person with an age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Create a person.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A user review attached to a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReview {
    pub user: String,
    pub comment: String,
    pub rate: u32,
}

impl ProductReview {
    /// Create a review with its user, comment and rate.
    pub fn new(user: impl Into<String>, comment: impl Into<String>, rate: u32) -> Self {
        Self {
            user: user.into(),
            comment: comment.into(),
            rate,
        }
    }
}

/// A product that owns its own list of reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub company: String,
    pub reviews: Sequence<ProductReview>,
}

/// A rental listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: u32,
    /// Kind of place ("Private Room", "Entire Place", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub pool: bool,
    pub garage: bool,
}

impl Listing {
    /// Create a listing.
    pub fn new(title: impl Into<String>, price: u32, kind: impl Into<String>, pool: bool, garage: bool) -> Self {
        Self {
            title: title.into(),
            price,
            kind: kind.into(),
            pool,
            garage,
        }
    }
}

/// A scored review, ordered by `rate` then `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rate: i64,
    pub score: i64,
}

impl Review {
    /// Create a review with its rate and score.
    pub fn new(name: impl Into<String>, rate: i64, score: i64) -> Self {
        Self {
            name: name.into(),
            rate,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Listing, Student};

    #[test]
    fn student_serializes_with_camel_case_fields() {
        let s = Student::new("Tony Parker", 80, 75);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["firstProject"], 80);
        assert_eq!(v["secondProject"], 75);
        assert_eq!(s.total(), 155);
    }

    #[test]
    fn student_total_does_not_overflow_grade_type() {
        let s = Student::new("Max", u32::MAX, u32::MAX);
        assert_eq!(s.total(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn listing_kind_serializes_as_type() {
        let l = Listing::new("Private apartment", 190, "Entire Place", true, true);
        let v = serde_json::to_value(&l).unwrap();
        assert_eq!(v["type"], "Entire Place");
        assert!(v.get("kind").is_none());

        let back: Listing = serde_json::from_value(v).unwrap();
        assert_eq!(back, l);
    }
}
