//! Sequence operators over `Vec<T>`.
//!
//! Binary and ternary operators are curried through
//! [`curry2`](crate::combinator::curry2) and
//! [`curry3`](crate::combinator::curry3) in data-last order: the transformer
//! or index comes first and the sequence last, so a partially applied
//! operator is a plain `Fn(Vec<T>) -> _` that composes with
//! [`compose2`](crate::compose::compose2) and friends.
//!
//! # Ownership
//!
//! Operators that produce a new sequence take the input by value and never
//! touch anything the caller still holds. The in-place operators in this
//! module ([`reverse`] and the `sort_by` family) reorder the buffer they are
//! given and hand that same buffer back. To keep an original around, take a
//! [`copy`] first.
//!
//! # Examples
//!
//! ```
//! use fpkit::combinator::Invoke;
//! use fpkit::sequence::{filter, map, reduce};
//!
//! let evens = filter().invoke((|value: &i32| value % 2 == 0,));
//! let squares = map().invoke((|value: i32| value * value,));
//! let total = reduce().invoke((|left: i32, right: i32| left + right,));
//!
//! assert_eq!(total(squares(evens(vec![1, 2, 3, 4]))), Ok(20));
//! ```

mod order;

pub use order::{
    Length, reverse, reversed, sort_by, sort_by_alpha, sort_by_alpha_desc, sort_by_len,
    sort_by_len_desc, sort_by_num, sort_by_num_desc,
};

use crate::combinator::{Curry2, Curry3, Invoke, curry2, curry3, identity};
use crate::error::EmptySequenceError;

/// Transforms every element, preserving order.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::map;
///
/// let lengths = map().invoke((|word: &str| word.len(), vec!["a", "bb", "ccc"]));
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
pub fn map<G, T, U>() -> Curry2<impl Fn(G, Vec<T>) -> Vec<U>, G, Vec<T>>
where
    G: Fn(T) -> U,
{
    curry2(|function: G, sequence: Vec<T>| -> Vec<U> {
        sequence.into_iter().map(function).collect()
    })
}

/// Keeps the elements matching `predicate`, preserving order.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::filter;
///
/// let short = filter().invoke((|word: &&str| word.len() < 3,));
/// assert_eq!(short(vec!["a", "abc", "ab"]), vec!["a", "ab"]);
/// ```
pub fn filter<G, T>() -> Curry2<impl Fn(G, Vec<T>) -> Vec<T>, G, Vec<T>>
where
    G: Fn(&T) -> bool,
{
    curry2(|predicate: G, sequence: Vec<T>| -> Vec<T> {
        sequence.into_iter().filter(predicate).collect()
    })
}

/// Left fold without a seed: the first element starts the accumulator.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::error::EmptySequenceError;
/// use fpkit::sequence::reduce;
///
/// let subtract = |left: i32, right: i32| left - right;
/// assert_eq!(reduce().invoke((subtract, vec![10, 1, 2])), Ok(7));
/// assert_eq!(
///     reduce().invoke((subtract, Vec::new())),
///     Err(EmptySequenceError { operation: "reduce" })
/// );
/// ```
pub fn reduce<G, T>() -> Curry2<impl Fn(G, Vec<T>) -> Result<T, EmptySequenceError>, G, Vec<T>>
where
    G: Fn(T, T) -> T,
{
    curry2(|function: G, sequence: Vec<T>| -> Result<T, EmptySequenceError> {
        sequence
            .into_iter()
            .reduce(function)
            .ok_or_else(|| EmptySequenceError::raise("reduce"))
    })
}

/// Right fold without a seed: the last element starts the accumulator and
/// `function(accumulator, element)` walks towards the front.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::reduce_right;
///
/// let subtract = |left: i32, right: i32| left - right;
/// // (10 - 2) - 1
/// assert_eq!(reduce_right().invoke((subtract, vec![1, 2, 10])), Ok(7));
/// ```
pub fn reduce_right<G, T>()
-> Curry2<impl Fn(G, Vec<T>) -> Result<T, EmptySequenceError>, G, Vec<T>>
where
    G: Fn(T, T) -> T,
{
    curry2(|function: G, sequence: Vec<T>| -> Result<T, EmptySequenceError> {
        sequence
            .into_iter()
            .rev()
            .reduce(function)
            .ok_or_else(|| EmptySequenceError::raise("reduce_right"))
    })
}

/// The first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::head;
///
/// assert_eq!(head(&[1, 2, 3]), Some(&1));
/// assert_eq!(head::<i32>(&[]), None);
/// ```
pub fn head<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The **last** element, or `None` for an empty sequence.
///
/// Unlike the common "everything but the first" meaning of `tail`, this
/// returns a single element: the final one. Use [`without_head`] for the
/// remainder of a sequence.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Some(&3));
/// ```
pub fn tail<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The elements from `start` to the end.
///
/// Negative indices count from the end; indices past either end clamp.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::slice_from;
///
/// assert_eq!(slice_from().invoke((2, vec![1, 2, 3, 4])), vec![3, 4]);
/// assert_eq!(slice_from().invoke((-1, vec![1, 2, 3, 4])), vec![4]);
/// ```
pub fn slice_from<T>() -> Curry2<impl Fn(isize, Vec<T>) -> Vec<T>, isize, Vec<T>> {
    curry2(|start: isize, sequence: Vec<T>| -> Vec<T> { slice(sequence, start, None) })
}

/// The half-open range `[start, end)`.
///
/// Negative indices count from the end; indices past either end clamp; a
/// range that ends before it starts is empty.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Invoke;
/// use fpkit::sequence::slice_from_to;
///
/// assert_eq!(slice_from_to().invoke((1, 3, vec![1, 2, 3, 4])), vec![2, 3]);
/// assert_eq!(slice_from_to().invoke((0, -1, vec![1, 2, 3, 4])), vec![1, 2, 3]);
/// assert!(slice_from_to().invoke((3, 1, vec![1, 2, 3, 4])).is_empty());
/// ```
pub fn slice_from_to<T>()
-> Curry3<impl Fn(isize, isize, Vec<T>) -> Vec<T>, isize, isize, Vec<T>> {
    curry3(|start: isize, end: isize, sequence: Vec<T>| -> Vec<T> {
        slice(sequence, start, Some(end))
    })
}

/// Everything but the first element. Equivalent to `slice_from(1)`.
pub fn without_head<T>(sequence: Vec<T>) -> Vec<T> {
    slice_from().invoke((1, sequence))
}

/// Everything but the last element. Equivalent to `slice_from_to(0, -1)`.
pub fn without_tail<T>(sequence: Vec<T>) -> Vec<T> {
    slice_from_to().invoke((0, -1, sequence))
}

/// The first sequence followed by every remaining sequence, in order.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when given no sequences at all.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::concat;
///
/// assert_eq!(concat(vec![vec![1], vec![], vec![2, 3]]), Ok(vec![1, 2, 3]));
/// assert!(concat::<i32>(Vec::new()).is_err());
/// ```
pub fn concat<T>(sequences: Vec<Vec<T>>) -> Result<Vec<T>, EmptySequenceError> {
    let mut remaining = sequences.into_iter();
    let mut first = remaining
        .next()
        .ok_or_else(|| EmptySequenceError::raise("concat"))?;
    first.extend(remaining.flatten());
    Ok(first)
}

/// A new sequence with the same elements, independent of the original.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::{copy, reverse};
///
/// let original = vec![1, 2, 3];
/// let reversed = reverse(copy(&original));
///
/// assert_eq!(original, vec![1, 2, 3]);
/// assert_eq!(reversed, vec![3, 2, 1]);
/// ```
pub fn copy<T: Clone>(sequence: &[T]) -> Vec<T> {
    map().invoke((identity::<T>, sequence.to_vec()))
}

fn slice<T>(mut sequence: Vec<T>, start: isize, end: Option<isize>) -> Vec<T> {
    let length = sequence.len();
    let start = resolve_index(start, length);
    let end = end.map_or(length, |end| resolve_index(end, length));
    if start >= end {
        return Vec::new();
    }
    sequence.truncate(end);
    sequence.drain(..start);
    sequence
}

/// Maps a possibly negative index onto `0..=length`.
fn resolve_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}
