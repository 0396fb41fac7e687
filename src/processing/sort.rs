//! In-place sorting for [`crate::types::Sequence`].
//!
//! Ordering is always explicit: [`sort`] takes a comparator, and the string-based ordering lives
//! under its own name ([`sort_lexicographic`]) so numeric sequences cannot fall into it by
//! accident. All sorts are stable.

use std::cmp::Ordering;

use crate::records::Review;
use crate::types::Sequence;

/// Sort `sequence` in place with `compare` and return the same sequence.
///
/// This is a convenience wrapper around [`Sequence::sort_items_by`].
pub fn sort<A, F>(sequence: &mut Sequence<A>, compare: F) -> &mut Sequence<A>
where
    F: FnMut(&A, &A) -> Ordering,
{
    sequence.sort_items_by(compare)
}

/// Sort `sequence` in place by each element's string rendering and return the same sequence.
///
/// Correct for strings. For numbers this orders by digits, e.g. `[23, 7, 12, 45]` becomes
/// `[12, 23, 45, 7]`.
pub fn sort_lexicographic<A>(sequence: &mut Sequence<A>) -> &mut Sequence<A>
where
    A: ToString,
{
    sequence.sort_items_lexicographic()
}

/// Turn a negative/zero/positive comparator result into an [`Ordering`].
///
/// ```rust
/// use array_methods::processing::{compare_sign, sort};
/// use array_methods::types::Sequence;
///
/// let mut nums = Sequence::from(vec![23i64, 7, 12, i64::MIN]);
/// sort(&mut nums, |a, b| compare_sign(a.saturating_sub(*b)));
/// assert_eq!(nums.items, vec![i64::MIN, 7, 12, 23]);
/// ```
pub fn compare_sign(sign: i64) -> Ordering {
    sign.cmp(&0)
}

/// Ascending numeric comparator. Orders correctly across the full `i64` range.
pub fn ascending(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

/// Descending numeric comparator.
pub fn descending(a: &i64, b: &i64) -> Ordering {
    b.cmp(a)
}

/// Orders reviews by `rate` ascending, then by `score` ascending when rates tie.
pub fn by_rate_then_score(a: &Review, b: &Review) -> Ordering {
    a.rate.cmp(&b.rate).then(a.score.cmp(&b.score))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{ascending, by_rate_then_score, compare_sign, descending, sort, sort_lexicographic};
    use crate::records::Review;
    use crate::types::Sequence;

    #[test]
    fn lexicographic_sort_is_correct_for_strings() {
        let mut cities = Sequence::from(vec!["berlin", "barcelona", "lissabon"]);
        sort_lexicographic(&mut cities);
        assert_eq!(cities.items, vec!["barcelona", "berlin", "lissabon"]);
    }

    #[test]
    fn lexicographic_sort_orders_numbers_by_digits() {
        let mut nums = Sequence::from(vec![23i64, 7, 12, 45]);
        sort_lexicographic(&mut nums);
        assert_eq!(nums.items, vec![12, 23, 45, 7]);
    }

    #[test]
    fn numeric_comparators() {
        let mut nums = Sequence::from(vec![23i64, 7, 12, 45]);
        sort(&mut nums, ascending);
        assert_eq!(nums.items, vec![7, 12, 23, 45]);

        sort(&mut nums, descending);
        assert_eq!(nums.items, vec![45, 23, 12, 7]);
    }

    #[test]
    fn sort_returns_same_sequence() {
        let mut nums = Sequence::from(vec![3i64, 1, 2]);
        let ptr: *const Sequence<i64> = &nums;
        let returned = sort(&mut nums, ascending);
        assert!(std::ptr::eq(returned, ptr));
    }

    #[test]
    fn numeric_comparators_handle_full_i64_range() {
        let mut nums = Sequence::from(vec![i64::MAX, -1, i64::MIN, 0]);
        sort(&mut nums, ascending);
        assert_eq!(nums.items, vec![i64::MIN, -1, 0, i64::MAX]);

        sort(&mut nums, descending);
        assert_eq!(nums.items, vec![i64::MAX, 0, -1, i64::MIN]);

        let mut pair = Sequence::from(vec![-1, i64::MAX]);
        sort(&mut pair, ascending);
        assert_eq!(pair.items, vec![-1, i64::MAX]);
    }

    #[test]
    fn composite_review_sort_handles_extreme_keys() {
        let mut reviews = Sequence::from(vec![
            Review::new("high", 1, i64::MAX),
            Review::new("lowest", i64::MIN, 0),
            Review::new("tie_low_score", 1, i64::MIN),
        ]);
        sort(&mut reviews, by_rate_then_score);
        let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["lowest", "tie_low_score", "high"]);
    }

    #[test]
    fn compare_sign_maps_to_ordering() {
        assert_eq!(compare_sign(-4), Ordering::Less);
        assert_eq!(compare_sign(0), Ordering::Equal);
        assert_eq!(compare_sign(9), Ordering::Greater);
    }

    #[test]
    fn composite_review_sort() {
        let mut reviews = Sequence::from(vec![
            Review::new("foo", 9, 7),
            Review::new("bar", 9, 5),
            Review::new("baz", 5, 4),
        ]);
        sort(&mut reviews, by_rate_then_score);
        let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["baz", "bar", "foo"]);
    }

    #[test]
    fn composite_sort_is_stable_on_full_ties() {
        let mut reviews = Sequence::from(vec![
            Review::new("first", 3, 3),
            Review::new("low", 1, 1),
            Review::new("second", 3, 3),
        ]);
        sort(&mut reviews, by_rate_then_score);
        let names: Vec<&str> = reviews.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["low", "first", "second"]);
    }
}
