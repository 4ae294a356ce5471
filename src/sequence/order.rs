//! In-place reordering: reversal and the sort family.
//!
//! Every function here takes ownership of a `Vec<T>`, rearranges its buffer
//! without allocating a new one, and returns that same buffer. [`reversed`]
//! is the copying counterpart of [`reverse`].
//!
//! The numeric and length sorts decide order from the sign of a difference
//! (`first - second`), computed in `f64`. Integers beyond 2^53 lose precision
//! in that subtraction, so distinct large values can compare as equal and
//! keep their input order.

use std::cmp::Ordering;
use std::fmt::Display;

use super::copy;
use crate::combinator::{Curry2, Invoke, curry2};
use crate::numeric::ToNumber;

/// Reverses the sequence in place and returns it.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::reverse;
///
/// assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn reverse<T>(mut sequence: Vec<T>) -> Vec<T> {
    sequence.reverse();
    sequence
}

/// A reversed copy, leaving `sequence` untouched.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::reversed;
///
/// let original = [1, 2, 3];
/// assert_eq!(reversed(&original), vec![3, 2, 1]);
/// assert_eq!(original, [1, 2, 3]);
/// ```
pub fn reversed<T: Clone>(sequence: &[T]) -> Vec<T> {
    reverse(copy(sequence))
}

/// Sorts the sequence in place with `comparator` and returns it.
///
/// The sort is stable.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::sort_by;
///
/// let by_last_letter = sort_by().invoke((|first: &&str, second: &&str| {
///     first.chars().last().cmp(&second.chars().last())
/// },));
/// assert_eq!(by_last_letter(vec!["ab", "ba", "cc"]), vec!["ba", "ab", "cc"]);
/// ```
pub fn sort_by<G, T>() -> Curry2<impl Fn(G, Vec<T>) -> Vec<T>, G, Vec<T>>
where
    G: Fn(&T, &T) -> Ordering,
{
    curry2(|comparator: G, mut sequence: Vec<T>| -> Vec<T> {
        sequence.sort_by(comparator);
        sequence
    })
}

/// Sorts by the string form of each element, ascending.
///
/// Numbers are therefore ordered as text: `10` sorts before `9`. Strings
/// compare by UTF-16 code units, so a character outside the Basic
/// Multilingual Plane sorts before U+E000..=U+FFFF.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::sort_by_alpha;
///
/// assert_eq!(sort_by_alpha(vec![10, 9, 1]), vec![1, 10, 9]);
/// assert_eq!(sort_by_alpha(vec!["pear", "apple"]), vec!["apple", "pear"]);
/// ```
pub fn sort_by_alpha<T: Display>(mut sequence: Vec<T>) -> Vec<T> {
    sequence.sort_by_cached_key(|element| {
        element
            .to_string()
            .encode_utf16()
            .collect::<Vec<u16>>()
    });
    sequence
}

/// [`sort_by_alpha`] followed by [`reverse`].
pub fn sort_by_alpha_desc<T: Display>(sequence: Vec<T>) -> Vec<T> {
    reverse(sort_by_alpha(sequence))
}

/// Sorts numerically ascending by the sign of `first - second`.
///
/// Elements that coerce to `NaN` sort after every number.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::sort_by_num;
///
/// assert_eq!(sort_by_num(vec![10, 2, 33, 4]), vec![2, 4, 10, 33]);
/// assert_eq!(sort_by_num(vec!["3", "x", "1"]), vec!["1", "3", "x"]);
/// ```
pub fn sort_by_num<T: ToNumber>(sequence: Vec<T>) -> Vec<T> {
    sort_by().invoke((ascending_by_number::<T>, sequence))
}

/// Sorts numerically descending by the sign of `second - first`.
pub fn sort_by_num_desc<T: ToNumber>(sequence: Vec<T>) -> Vec<T> {
    sort_by().invoke((descending_by_number::<T>, sequence))
}

/// Sorts by [`Length`] ascending.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::sort_by_len;
///
/// assert_eq!(sort_by_len(vec!["ccc", "a", "bb"]), vec!["a", "bb", "ccc"]);
/// assert_eq!(sort_by_len(vec![vec![1, 2], vec![]]), vec![vec![], vec![1, 2]]);
/// ```
pub fn sort_by_len<T: Length>(sequence: Vec<T>) -> Vec<T> {
    sort_by().invoke((ascending_by_length::<T>, sequence))
}

/// Sorts by [`Length`] descending.
pub fn sort_by_len_desc<T: Length>(sequence: Vec<T>) -> Vec<T> {
    sort_by().invoke((descending_by_length::<T>, sequence))
}

/// Elements that expose a length, for [`sort_by_len`].
pub trait Length {
    /// The number of items. Strings report their length in UTF-16 code
    /// units.
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.encode_utf16().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

fn ascending_by_number<T: ToNumber>(first: &T, second: &T) -> Ordering {
    by_difference(first.to_number(), second.to_number())
}

fn descending_by_number<T: ToNumber>(first: &T, second: &T) -> Ordering {
    by_difference(second.to_number(), first.to_number())
}

#[allow(clippy::cast_precision_loss)]
fn ascending_by_length<T: Length>(first: &T, second: &T) -> Ordering {
    by_difference(first.length() as f64, second.length() as f64)
}

#[allow(clippy::cast_precision_loss)]
fn descending_by_length<T: Length>(first: &T, second: &T) -> Ordering {
    by_difference(second.length() as f64, first.length() as f64)
}

/// Orders by the sign of `minuend - subtrahend`.
///
/// An undefined difference orders `NaN` operands last so that the comparator
/// stays a total order.
fn by_difference(minuend: f64, subtrahend: f64) -> Ordering {
    (minuend - subtrahend)
        .partial_cmp(&0.0)
        .unwrap_or_else(|| minuend.is_nan().cmp(&subtrahend.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_difference_signs() {
        assert_eq!(by_difference(1.0, 2.0), Ordering::Less);
        assert_eq!(by_difference(2.0, 2.0), Ordering::Equal);
        assert_eq!(by_difference(f64::INFINITY, 2.0), Ordering::Greater);
    }

    #[test]
    fn test_by_difference_same_infinities_are_equal() {
        assert_eq!(by_difference(f64::INFINITY, f64::INFINITY), Ordering::Equal);
    }

    #[test]
    fn test_by_difference_nan_sorts_last() {
        assert_eq!(by_difference(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(by_difference(1.0, f64::NAN), Ordering::Less);
        assert_eq!(by_difference(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_large_integers_lose_precision() {
        let above_safe = 9_007_199_254_740_993_i64;
        let sorted = sort_by_num(vec![above_safe, above_safe - 1]);
        // Both coerce to the same f64, so the stable sort keeps input order.
        assert_eq!(sorted, vec![above_safe, above_safe - 1]);
    }

    #[rstest::rstest]
    #[case("", 0)]
    #[case("ab", 2)]
    #[case("é", 1)]
    #[case("\u{1F600}", 2)]
    fn test_string_length_counts_utf16_units(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(text.length(), expected);
        assert_eq!(String::from(text).length(), expected);
    }

    #[test]
    fn test_sort_reuses_buffer() {
        let sequence = vec![3, 1, 2];
        let pointer = sequence.as_ptr();
        let sorted = sort_by_num(sequence);
        assert_eq!(sorted.as_ptr(), pointer);
    }
}
