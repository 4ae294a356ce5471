//! Error types for the combinators.
//!
//! Almost every operation in this crate is total. The two exceptions are
//! folding over nothing and calling a value that has already been fully
//! applied:
//!
//! - [`EmptySequenceError`]: a fold without a seed was given zero elements
//! - [`NotAFunctionError`]: a saturated result was invoked as if it were a function
//!
//! [`CombinatorError`] unifies both for callers that mix operations with `?`.
//!
//! Numeric coercion never fails. Invalid numeric input becomes `NaN` and
//! propagates through arithmetic instead of surfacing here.

use thiserror::Error;

/// A fold without an initial value was asked to combine zero elements.
///
/// Raised by [`reduce`](crate::sequence::reduce),
/// [`reduce_right`](crate::sequence::reduce_right), the variadic folds
/// (`add`, `mult`, `sub`, `div`, `pow`, `compose`, `pipe`) and `concat`.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::EmptySequenceError;
///
/// let error = EmptySequenceError { operation: "add" };
/// assert_eq!(
///     format!("{error}"),
///     "add: cannot fold an empty sequence without an initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: cannot fold an empty sequence without an initial value")]
pub struct EmptySequenceError {
    /// The name of the operation that received no elements.
    pub operation: &'static str,
}

/// A value that is not callable was invoked as a function.
///
/// Curry builders never validate eagerly. This error only appears at the
/// point where a saturated [`Applied`](crate::combinator::Applied) result is
/// invoked again.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::NotAFunctionError;
///
/// let error = NotAFunctionError { type_name: "i32" };
/// assert_eq!(format!("{error}"), "i32 is not a function and cannot be invoked");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{type_name} is not a function and cannot be invoked")]
pub struct NotAFunctionError {
    /// The type name of the value that was invoked.
    pub type_name: &'static str,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombinatorError {
    /// A fold received zero elements.
    #[error(transparent)]
    EmptySequence(#[from] EmptySequenceError),
    /// A saturated value was invoked.
    #[error(transparent)]
    NotAFunction(#[from] NotAFunctionError),
}

impl EmptySequenceError {
    /// Creates the error for `operation` and records it at debug level.
    pub(crate) fn raise(operation: &'static str) -> Self {
        tracing::debug!(operation, "fold over an empty sequence");
        Self { operation }
    }
}
