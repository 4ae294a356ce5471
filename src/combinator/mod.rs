//! The combinator core: identity, application, partial application and
//! currying.
//!
//! Every other module in this crate is built from the pieces defined here.
//!
//! # Overview
//!
//! - [`identity`]: returns its argument unchanged
//! - [`apply1`] / [`apply`]: apply a function to one argument / to an argument list
//! - [`partial1`] / [`partial`]: fix leading arguments ahead of time
//! - [`curry2`], [`curry3`], [`curry4`]: fixed-arity currying with a closed
//!   dispatch table keyed on how many arguments are supplied
//! - [`curry`]: variable-arity currying over a homogeneous argument list
//!
//! # Fixed-arity currying
//!
//! A curried callable is invoked through [`Invoke`] with a tuple. The length
//! of the tuple selects the row of the dispatch table:
//!
//! ```text
//! curry3(f).invoke(())          == curry3(f)
//! curry3(f).invoke((a,))        == curry2(|b, c| f(a, b, c))
//! curry3(f).invoke((a, b))      == |c| f(a, b, c)
//! curry3(f).invoke((a, b, c))   == f(a, b, c)
//! ```
//!
//! ```
//! use fpkit::combinator::{Invoke, curry3};
//!
//! let volume = curry3(|width: f64, height: f64, depth: f64| width * height * depth);
//! let flat = volume.invoke((2.0,)).invoke((3.0,));
//! assert_eq!(flat(4.0), 24.0);
//! assert_eq!(volume.invoke((2.0, 3.0, 4.0)), 24.0);
//! ```
//!
//! # Variable-arity currying
//!
//! ```
//! use fpkit::combinator::curry;
//!
//! let sum = curry(3, |values: Vec<i32>| values.iter().sum::<i32>());
//! let result = sum
//!     .invoke([1])
//!     .invoke([2])
//!     .and_then(|applied| applied.invoke([3]))
//!     .map(|applied| applied.value());
//! assert_eq!(result, Ok(Some(6)));
//! ```

mod curried;
mod curry;

pub use curried::{Applied, Curried, curry};
pub use curry::{Binary, Curry2, Curry3, Curry4, Invoke, Ternary, Unary, curry2, curry3, curry4};

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Applies `function` to a single argument.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::apply1;
///
/// assert_eq!(apply1(|x: i32| x + 1, 41), 42);
/// ```
#[inline]
pub fn apply1<A, R, F>(function: F, argument: A) -> R
where
    F: FnOnce(A) -> R,
{
    function(argument)
}

/// Applies `function` to an argument list of any length, including zero.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::apply;
///
/// let count = |values: Vec<&str>| values.len();
/// assert_eq!(apply(count, vec!["a", "b", "c"]), 3);
/// assert_eq!(apply(count, Vec::new()), 0);
/// ```
#[inline]
pub fn apply<T, R, F>(function: F, arguments: Vec<T>) -> R
where
    F: FnOnce(Vec<T>) -> R,
{
    function(arguments)
}

/// Fixes the first argument of a binary function.
///
/// `partial1(f, x)(y) == f(x, y)`. The fixed argument is cloned on every call
/// so the returned function can be called any number of times.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::partial1;
///
/// let greet = partial1(|greeting: &str, name: &str| format!("{greeting}, {name}"), "Hello");
/// assert_eq!(greet("Alice"), "Hello, Alice");
/// assert_eq!(greet("Bob"), "Hello, Bob");
/// ```
pub fn partial1<A, B, R, F>(function: F, first: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |second| function(first.clone(), second)
}

/// Fixes a leading argument list of a function over argument lists.
///
/// `partial(f, fixed)(rest) == f(fixed ++ rest)`.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::partial;
///
/// let joined = partial(|words: Vec<&str>| words.join(" "), vec!["hello", "big"]);
/// assert_eq!(joined(vec!["world"]), "hello big world");
/// assert_eq!(joined(Vec::new()), "hello big");
/// ```
pub fn partial<T, R, F>(function: F, fixed: Vec<T>) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
    T: Clone,
{
    move |rest: Vec<T>| {
        let mut arguments = Vec::with_capacity(fixed.len() + rest.len());
        arguments.extend_from_slice(&fixed);
        arguments.extend(rest);
        function(arguments)
    }
}
