//! Fixed-arity currying for functions of two, three and four arguments.
//!
//! A curried callable owns the original function behind an `Rc`, so every
//! partial application shares it without copying and without touching the
//! original. Already supplied arguments are captured by value in the
//! returned closures and cloned on each call, which keeps partial
//! applications reusable.
//!
//! # Dispatch table
//!
//! The number of arguments supplied to [`Invoke::invoke`] is the length of
//! the argument tuple. Each builder implements exactly one row per length it
//! accepts, so the table is closed: a tuple longer than the arity does not
//! type-check.
//!
//! | Builder  | `()`   | 1 argument       | 2 arguments      | 3 arguments      | 4 arguments |
//! |----------|--------|------------------|------------------|------------------|-------------|
//! | `curry2` | itself | [`Unary`]        | result           |                  |             |
//! | `curry3` | itself | [`Curry2`]       | [`Unary`]        | result           |             |
//! | `curry4` | itself | [`Curry3`]       | [`Curry2`]       | [`Unary`]        | result      |

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A boxed single-argument function, the last level of every curried chain.
pub type Unary<A, R> = Box<dyn Fn(A) -> R>;

/// A boxed two-argument function.
pub type Binary<A, B, R> = Box<dyn Fn(A, B) -> R>;

/// A boxed three-argument function.
pub type Ternary<A, B, C, R> = Box<dyn Fn(A, B, C) -> R>;

/// Invocation of a curried callable with a tuple of arguments.
///
/// `Arguments` is the tuple of supplied arguments; its length picks the
/// dispatch row and therefore the [`Output`](Invoke::Output) type.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::{Invoke, curry2};
///
/// let add = curry2(|first: i32, second: i32| first + second);
///
/// // Zero arguments: the same curried callable.
/// let same = add.invoke(());
/// assert_eq!(same.invoke((1, 2)), 3);
///
/// // One argument: a function awaiting the second.
/// let add_five = add.invoke((5,));
/// assert_eq!(add_five(3), 8);
///
/// // Exact arity: the result.
/// assert_eq!(add.invoke((5, 3)), 8);
/// ```
pub trait Invoke<Arguments> {
    /// What the invocation produces for this argument count.
    type Output;

    /// Supplies `arguments` to the curried callable.
    fn invoke(&self, arguments: Arguments) -> Self::Output;
}

macro_rules! define_curried {
    ($(#[$attribute:meta])* $name:ident, $arity:literal, [$($parameter:ident),+]) => {
        $(#[$attribute])*
        pub struct $name<F, $($parameter),+> {
            function: Rc<F>,
            parameters: PhantomData<fn($($parameter),+)>,
        }

        impl<F, $($parameter),+> $name<F, $($parameter),+> {
            /// The number of arguments the wrapped function takes.
            pub const ARITY: usize = $arity;

            fn from_rc(function: Rc<F>) -> Self {
                Self {
                    function,
                    parameters: PhantomData,
                }
            }
        }

        impl<F, $($parameter),+> Clone for $name<F, $($parameter),+> {
            fn clone(&self) -> Self {
                Self::from_rc(Rc::clone(&self.function))
            }
        }

        impl<F, $($parameter),+> fmt::Debug for $name<F, $($parameter),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("arity", &$arity)
                    .finish_non_exhaustive()
            }
        }

        impl<F, $($parameter),+> Invoke<()> for $name<F, $($parameter),+> {
            type Output = Self;

            fn invoke(&self, (): ()) -> Self {
                self.clone()
            }
        }
    };
}

define_curried!(
    /// A curried two-argument function. Built by [`curry2`].
    Curry2, 2, [A, B]
);

define_curried!(
    /// A curried three-argument function. Built by [`curry3`].
    Curry3, 3, [A, B, C]
);

define_curried!(
    /// A curried four-argument function. Built by [`curry4`].
    Curry4, 4, [A, B, C, D]
);

/// Curries a two-argument function.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::{Invoke, curry2};
///
/// let concat = curry2(|first: String, second: &str| first + second);
/// let hello = concat.invoke((String::from("Hello, "),));
///
/// assert_eq!(hello("World"), "Hello, World");
/// assert_eq!(hello("Rust"), "Hello, Rust");
/// ```
pub fn curry2<F, A, B, R>(function: F) -> Curry2<F, A, B>
where
    F: Fn(A, B) -> R,
{
    Curry2::from_rc(Rc::new(function))
}

/// Curries a three-argument function.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::{Invoke, curry3};
///
/// let clamp = curry3(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// let percent = clamp.invoke((0, 100));
///
/// assert_eq!(percent(150), 100);
/// assert_eq!(clamp.invoke((0,)).invoke((10, -5)), 0);
/// ```
pub fn curry3<F, A, B, C, R>(function: F) -> Curry3<F, A, B, C>
where
    F: Fn(A, B, C) -> R,
{
    Curry3::from_rc(Rc::new(function))
}

/// Curries a four-argument function.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::{Invoke, curry4};
///
/// let sum = curry4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
///
/// assert_eq!(sum.invoke((1,)).invoke((2,)).invoke((3,))(4), 10);
/// assert_eq!(sum.invoke((1, 2)).invoke((3, 4)), 10);
/// assert_eq!(sum.invoke((1, 2, 3))(4), 10);
/// ```
pub fn curry4<F, A, B, C, D, R>(function: F) -> Curry4<F, A, B, C, D>
where
    F: Fn(A, B, C, D) -> R,
{
    Curry4::from_rc(Rc::new(function))
}

// =============================================================================
// Curry2 rows
// =============================================================================

impl<F, A, B, R> Invoke<(A,)> for Curry2<F, A, B>
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    type Output = Unary<B, R>;

    fn invoke(&self, (first,): (A,)) -> Self::Output {
        let function = Rc::clone(&self.function);
        Box::new(move |second| function(first.clone(), second))
    }
}

impl<F, A, B, R> Invoke<(A, B)> for Curry2<F, A, B>
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    fn invoke(&self, (first, second): (A, B)) -> R {
        (self.function)(first, second)
    }
}

// =============================================================================
// Curry3 rows
// =============================================================================

impl<F, A, B, C, R> Invoke<(A,)> for Curry3<F, A, B, C>
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    R: 'static,
{
    type Output = Curry2<Binary<B, C, R>, B, C>;

    fn invoke(&self, (first,): (A,)) -> Self::Output {
        let function = Rc::clone(&self.function);
        let remaining: Binary<B, C, R> =
            Box::new(move |second, third| function(first.clone(), second, third));
        curry2(remaining)
    }
}

impl<F, A, B, C, R> Invoke<(A, B)> for Curry3<F, A, B, C>
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    type Output = Unary<C, R>;

    fn invoke(&self, (first, second): (A, B)) -> Self::Output {
        let function = Rc::clone(&self.function);
        Box::new(move |third| function(first.clone(), second.clone(), third))
    }
}

impl<F, A, B, C, R> Invoke<(A, B, C)> for Curry3<F, A, B, C>
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    fn invoke(&self, (first, second, third): (A, B, C)) -> R {
        (self.function)(first, second, third)
    }
}

// =============================================================================
// Curry4 rows
// =============================================================================

impl<F, A, B, C, D, R> Invoke<(A,)> for Curry4<F, A, B, C, D>
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    R: 'static,
{
    type Output = Curry3<Ternary<B, C, D, R>, B, C, D>;

    fn invoke(&self, (first,): (A,)) -> Self::Output {
        let function = Rc::clone(&self.function);
        let remaining: Ternary<B, C, D, R> =
            Box::new(move |second, third, fourth| function(first.clone(), second, third, fourth));
        curry3(remaining)
    }
}

impl<F, A, B, C, D, R> Invoke<(A, B)> for Curry4<F, A, B, C, D>
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
    R: 'static,
{
    type Output = Curry2<Binary<C, D, R>, C, D>;

    fn invoke(&self, (first, second): (A, B)) -> Self::Output {
        let function = Rc::clone(&self.function);
        let remaining: Binary<C, D, R> = Box::new(move |third, fourth| {
            function(first.clone(), second.clone(), third, fourth)
        });
        curry2(remaining)
    }
}

impl<F, A, B, C, D, R> Invoke<(A, B, C)> for Curry4<F, A, B, C, D>
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    type Output = Unary<D, R>;

    fn invoke(&self, (first, second, third): (A, B, C)) -> Self::Output {
        let function = Rc::clone(&self.function);
        Box::new(move |fourth| function(first.clone(), second.clone(), third.clone(), fourth))
    }
}

impl<F, A, B, C, D, R> Invoke<(A, B, C, D)> for Curry4<F, A, B, C, D>
where
    F: Fn(A, B, C, D) -> R,
{
    type Output = R;

    fn invoke(&self, (first, second, third, fourth): (A, B, C, D)) -> R {
        (self.function)(first, second, third, fourth)
    }
}

static_assertions::assert_impl_all!(Curry2<fn(i32, i32) -> i32, i32, i32>: Clone);
static_assertions::assert_not_impl_any!(Curry3<fn(i32, i32, i32) -> i32, i32, i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_zero_arguments_returns_equivalent_callable() {
        let subtract = curry2(|first: i32, second: i32| first - second);
        let again = subtract.invoke(()).invoke(()).invoke(());
        assert_eq!(again.invoke((10, 4)), 6);
        assert_eq!(again.invoke((10,))(4), 6);
    }

    #[test]
    fn test_partial_application_does_not_share_bound_arguments() {
        let pair = curry2(|first: String, second: String| format!("{first}-{second}"));
        let left = pair.invoke((String::from("left"),));
        let right = pair.invoke((String::from("right"),));
        assert_eq!(left(String::from("x")), "left-x");
        assert_eq!(right(String::from("x")), "right-x");
        assert_eq!(left(String::from("y")), "left-y");
    }

    #[test]
    fn test_function_runs_only_on_saturation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let tracked = curry3(move |a: i32, b: i32, c: i32| {
            counter.set(counter.get() + 1);
            a * b * c
        });

        let awaiting = tracked.invoke((2,)).invoke((3,));
        assert_eq!(calls.get(), 0);
        assert_eq!(awaiting(4), 24);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_curry4_nested_levels_report_arity() {
        let sum = curry4(|a: u8, b: u8, c: u8, d: u8| a + b + c + d);
        let level3 = sum.invoke((1,));
        let level2 = level3.invoke((2,));
        assert_eq!(format!("{sum:?}"), "Curry4 { arity: 4, .. }");
        assert_eq!(format!("{level3:?}"), "Curry3 { arity: 3, .. }");
        assert_eq!(format!("{level2:?}"), "Curry2 { arity: 2, .. }");
        assert_eq!(level2.invoke((3, 4)), 10);
    }

    #[test]
    fn test_arity_constants() {
        assert_eq!(Curry2::<fn(u8, u8) -> u8, u8, u8>::ARITY, 2);
        assert_eq!(Curry4::<fn(u8, u8, u8, u8) -> u8, u8, u8, u8, u8>::ARITY, 4);
    }
}
