//! The `compose!` and `pipe!` macros for chains of any length.
//!
//! Both expand to nested [`compose2`](crate::compose::compose2) /
//! [`pipe2`](crate::compose::pipe2) calls, so every function in the chain
//! may have its own input and output type.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g, ...)` is `compose2(f, compose!(g, ...))`
/// - `compose!()` does not compile
///
/// # Examples
///
/// ```
/// use fpkit::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn describe(x: i32) -> String { format!("<{x}>") }
///
/// let composed = compose!(describe, add_one, double);
/// assert_eq!(composed(5), "<11>");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! needs at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose2($outer_function, $crate::compose!($($remaining_functions),+))
    };
}

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`.
///
/// - `pipe!(f)` is `f`
/// - `pipe!(f, g, ...)` is `pipe2(f, pipe!(g, ...))`
/// - `pipe!()` does not compile
///
/// # Examples
///
/// ```
/// use fpkit::{compose, pipe};
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// assert_eq!(pipe!(square, double, add_one)(3), 19);
/// assert_eq!(pipe!(square, double, add_one)(3), compose!(add_one, double, square)(3));
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        compile_error!("pipe! needs at least one function")
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::pipe2($first_function, $crate::pipe!($($remaining_functions),+))
    };
}
