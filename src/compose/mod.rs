//! Function composition.
//!
//! Two directions, fixed by name and never swapped:
//!
//! - `compose`: right-to-left, `compose2(f, g)(x) == f(g(x))`
//! - `pipe`: left-to-right, `pipe2(f, g)(x) == g(f(x))`
//!
//! The fixed-arity forms ([`compose2`] to [`compose4`], [`pipe2`] to
//! [`pipe4`]) accept functions of different types as long as each output
//! feeds the next input. Functions of several arguments can be composed by
//! taking a tuple.
//!
//! The variable-arity forms [`compose`] and [`pipe`] fold a list of
//! [`Endo`] functions with [`reduce`](crate::sequence::reduce). Composing an
//! empty list is a configuration error, not an implicit identity.
//!
//! For heterogeneous chains of any length use the
//! [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!) macros.
//!
//! # Laws
//!
//! - **Associativity**: `compose2(f, compose2(g, h)) == compose2(compose2(f, g), h)`
//! - **Identity**: `compose2(identity, f) == f == compose2(f, identity)`
//! - **Duality**: `pipe2(f, g) == compose2(g, f)`
//!
//! # Examples
//!
//! ```
//! use fpkit::compose::{compose2, pipe2};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose2(add_one, double)(5), 11);
//! assert_eq!(pipe2(add_one, double)(5), 12);
//! ```

mod macros;

use crate::combinator::Invoke;
use crate::error::EmptySequenceError;
use crate::sequence::reduce;

/// A boxed function from a type to itself, the element type of the
/// variable-arity [`compose`] and [`pipe`].
pub type Endo<T> = Box<dyn Fn(T) -> T>;

/// Right-to-left composition of two functions: `f(g(x))`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::compose2;
///
/// let length_of_display = compose2(|text: String| text.len(), |x: i32| x.to_string());
/// assert_eq!(length_of_display(12345), 5);
/// ```
pub fn compose2<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Right-to-left composition of three functions: `f(g(h(x)))`.
pub fn compose3<A, B, C, D, F, G, H>(first: F, second: G, third: H) -> impl Fn(A) -> D
where
    F: Fn(C) -> D,
    G: Fn(B) -> C,
    H: Fn(A) -> B,
{
    let inner = compose2(second, third);
    move |input| first(inner(input))
}

/// Right-to-left composition of four functions: `f(g(h(i(x))))`.
pub fn compose4<A, B, C, D, E, F, G, H, I>(
    first: F,
    second: G,
    third: H,
    fourth: I,
) -> impl Fn(A) -> E
where
    F: Fn(D) -> E,
    G: Fn(C) -> D,
    H: Fn(B) -> C,
    I: Fn(A) -> B,
{
    let inner = compose3(second, third, fourth);
    move |input| first(inner(input))
}

/// Right-to-left composition of any number of functions.
///
/// Folds [`compose2`] over `functions` from the left, so the last function
/// runs first.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `functions` is empty.
///
/// # Examples
///
/// ```
/// use fpkit::compose::{Endo, compose};
///
/// let steps: Vec<Endo<i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// let composed = compose(steps).unwrap();
/// assert_eq!(composed(5), 11);
///
/// assert!(compose::<i32>(Vec::new()).is_err());
/// ```
pub fn compose<T: 'static>(functions: Vec<Endo<T>>) -> Result<Endo<T>, EmptySequenceError> {
    reduce()
        .invoke((
            |outer: Endo<T>, inner: Endo<T>| -> Endo<T> { Box::new(compose2(outer, inner)) },
            functions,
        ))
        .map_err(|_| EmptySequenceError::raise("compose"))
}

/// Left-to-right composition of two functions: `g(f(x))`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::pipe2;
///
/// let shout = pipe2(|text: &str| text.to_uppercase(), |text: String| text + "!");
/// assert_eq!(shout("hello"), "HELLO!");
/// ```
pub fn pipe2<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    compose2(second, first)
}

/// Left-to-right composition of three functions: `h(g(f(x)))`.
pub fn pipe3<A, B, C, D, F, G, H>(first: F, second: G, third: H) -> impl Fn(A) -> D
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
{
    compose3(third, second, first)
}

/// Left-to-right composition of four functions: `i(h(g(f(x))))`.
pub fn pipe4<A, B, C, D, E, F, G, H, I>(
    first: F,
    second: G,
    third: H,
    fourth: I,
) -> impl Fn(A) -> E
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
    I: Fn(D) -> E,
{
    compose4(fourth, third, second, first)
}

/// Left-to-right composition of any number of functions.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `functions` is empty.
///
/// # Examples
///
/// ```
/// use fpkit::compose::{Endo, pipe};
///
/// let steps: Vec<Endo<i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// let piped = pipe(steps).unwrap();
/// assert_eq!(piped(5), 12);
/// ```
pub fn pipe<T: 'static>(functions: Vec<Endo<T>>) -> Result<Endo<T>, EmptySequenceError> {
    reduce()
        .invoke((
            |first: Endo<T>, second: Endo<T>| -> Endo<T> { Box::new(pipe2(first, second)) },
            functions,
        ))
        .map_err(|_| EmptySequenceError::raise("pipe"))
}
