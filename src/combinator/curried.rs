//! Variable-arity currying over a homogeneous argument list.
//!
//! [`curry`] wraps a function that takes its arguments as a `Vec<T>` together
//! with the number of arguments it expects. Arguments can then be supplied
//! across any number of calls. Each call reports its state explicitly through
//! [`Applied`]:
//!
//! - [`Applied::Awaiting`]: fewer than `arity` arguments are bound so far
//! - [`Applied::Saturated`]: the function ran and this is its result
//!
//! Once at least `arity` arguments are available the function is invoked with
//! all of them, so surplus arguments supplied in the saturating call are
//! passed through rather than dropped.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::NotAFunctionError;

/// Arguments bound inline before spilling to the heap.
const INLINE_ARGUMENTS: usize = 4;

/// A function over an argument list, partially applied to zero or more
/// leading arguments.
///
/// Built by [`curry`]. Invoking it never changes it; every call that does not
/// saturate returns a new, independent `Curried`.
pub struct Curried<T, R> {
    arity: usize,
    bound: SmallVec<[T; INLINE_ARGUMENTS]>,
    function: Rc<dyn Fn(Vec<T>) -> R>,
}

/// The outcome of supplying arguments to a [`Curried`].
#[derive(Debug, Clone)]
pub enum Applied<T, R> {
    /// More arguments are needed; holds the partially applied function.
    Awaiting(Curried<T, R>),
    /// The wrapped function was invoked and returned this value.
    Saturated(R),
}

/// Curries `function`, which expects at least `arity` arguments.
///
/// With `arity == 0` the first invocation always runs the function, even with
/// no arguments.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::{Applied, curry};
///
/// let join = curry(3, |words: Vec<&str>| words.join("-"));
///
/// let Applied::Awaiting(with_first) = join.invoke(["a"]) else {
///     unreachable!()
/// };
/// assert_eq!(with_first.remaining(), 2);
/// assert_eq!(with_first.invoke(["b", "c"]).value(), Some(String::from("a-b-c")));
///
/// // Surplus arguments are passed through.
/// assert_eq!(join.invoke(["a", "b", "c", "d"]).value(), Some(String::from("a-b-c-d")));
/// ```
pub fn curry<T, R, F>(arity: usize, function: F) -> Curried<T, R>
where
    F: Fn(Vec<T>) -> R + 'static,
{
    Curried {
        arity,
        bound: SmallVec::new(),
        function: Rc::new(function),
    }
}

impl<T, R> Curried<T, R> {
    /// The number of arguments the wrapped function declares.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many more arguments are needed before the function runs.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.bound.len())
    }

    /// The arguments bound so far, in the order they were supplied.
    pub fn bound(&self) -> &[T] {
        &self.bound
    }
}

impl<T: Clone, R> Curried<T, R> {
    /// Supplies `arguments` after the ones already bound.
    ///
    /// Returns [`Applied::Saturated`] when the bound and supplied arguments
    /// together reach the arity, and [`Applied::Awaiting`] otherwise.
    pub fn invoke<I>(&self, arguments: I) -> Applied<T, R>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collected = self.bound.clone();
        collected.extend(arguments);

        tracing::trace!(
            arity = self.arity,
            bound = self.bound.len(),
            supplied = collected.len() - self.bound.len(),
            "invoking curried function"
        );

        if collected.len() >= self.arity {
            Applied::Saturated((self.function)(collected.into_vec()))
        } else {
            Applied::Awaiting(Self {
                arity: self.arity,
                bound: collected,
                function: Rc::clone(&self.function),
            })
        }
    }
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            bound: self.bound.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, R> Applied<T, R> {
    /// Supplies more arguments to an awaiting function.
    ///
    /// # Errors
    ///
    /// Returns [`NotAFunctionError`] if the function already ran: its result
    /// is a plain value and cannot be invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::combinator::curry;
    /// use fpkit::error::NotAFunctionError;
    ///
    /// let double = curry(1, |values: Vec<i32>| values[0] * 2);
    /// let saturated = double.invoke([21]);
    ///
    /// assert_eq!(
    ///     saturated.invoke([1]).unwrap_err(),
    ///     NotAFunctionError { type_name: "i32" }
    /// );
    /// ```
    pub fn invoke<I>(self, arguments: I) -> Result<Self, NotAFunctionError>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Self::Awaiting(curried) => Ok(curried.invoke(arguments)),
            Self::Saturated(_) => {
                let type_name = std::any::type_name::<R>();
                tracing::debug!(type_name, "invoked a saturated result");
                Err(NotAFunctionError { type_name })
            }
        }
    }
}

impl<T, R> Applied<T, R> {
    /// Returns `true` if the function has run.
    pub const fn is_saturated(&self) -> bool {
        matches!(self, Self::Saturated(_))
    }

    /// The result, if the function has run.
    pub fn value(self) -> Option<R> {
        match self {
            Self::Saturated(value) => Some(value),
            Self::Awaiting(_) => None,
        }
    }

    /// The partially applied function, if more arguments are needed.
    pub fn awaiting(self) -> Option<Curried<T, R>> {
        match self {
            Self::Awaiting(curried) => Some(curried),
            Self::Saturated(_) => None,
        }
    }
}

static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);
