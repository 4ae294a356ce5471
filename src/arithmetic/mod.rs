//! Curried arithmetic.
//!
//! Every operator coerces its operands with [`ToNumber`] and computes in
//! `f64`. Coercion never fails: operands without a numeric reading become
//! `NaN`, and IEEE-754 rules take it from there (`recip(0) == inf`,
//! `0 / 0` is `NaN`). Operands of different types can be mixed freely.
//!
//! # Families
//!
//! | Fixed arity            | Variable arity | Built from               |
//! |------------------------|----------------|--------------------------|
//! | `add2`, `add3`, `add4`     | [`add`]    | `+`                      |
//! | `mult2`, `mult3`, `mult4`  | [`mult`]   | `*`                      |
//! | `sub2`, `sub3`, `sub4`     | [`sub`]    | `add` of [`neg`]         |
//! | `div2`, `div3`, `div4`     | [`div`]    | `mult` of [`recip`]      |
//! |                            | [`pow`]    | `f64::powf`, `NaN`-strict |
//!
//! The variable-arity forms are left folds through
//! [`reduce`](crate::sequence::reduce): `sub(10, 1, 2) == (10 - 1) - 2`.
//!
//! # Examples
//!
//! ```
//! use fpkit::arithmetic::{add, add2, inc};
//! use fpkit::combinator::Invoke;
//!
//! let add_ten = add2().invoke((10,));
//! assert_eq!(add_ten(5), 15.0);
//! assert_eq!(add2().invoke(("1.5", true)), 2.5);
//! assert_eq!(inc(41), 42.0);
//! assert_eq!(add(vec![1, 2, 3, 4]), Ok(10.0));
//! ```

use crate::combinator::{Curry2, Curry3, Curry4, Invoke, curry2, curry3, curry4};
use crate::error::EmptySequenceError;
use crate::numeric::ToNumber;
use crate::sequence::reduce;

// =============================================================================
// Addition
// =============================================================================

/// Curried `a + b`.
pub fn add2<A, B>() -> Curry2<impl Fn(A, B) -> f64, A, B>
where
    A: ToNumber,
    B: ToNumber,
{
    curry2(|first: A, second: B| first.to_number() + second.to_number())
}

/// Curried `a + b + c`.
pub fn add3<A, B, C>() -> Curry3<impl Fn(A, B, C) -> f64, A, B, C>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
{
    curry3(|first: A, second: B, third: C| {
        add2().invoke((first, second)) + third.to_number()
    })
}

/// Curried `a + b + c + d`.
pub fn add4<A, B, C, D>() -> Curry4<impl Fn(A, B, C, D) -> f64, A, B, C, D>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
    D: ToNumber,
{
    curry4(|first: A, second: B, third: C, fourth: D| {
        add3().invoke((first, second, third)) + fourth.to_number()
    })
}

/// Sum of all `values`, folded left to right.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `values` is empty.
pub fn add<T: ToNumber>(values: Vec<T>) -> Result<f64, EmptySequenceError> {
    fold("add", values, |first, second| add2().invoke((first, second)))
}

/// `value + 1`.
pub fn inc<T: ToNumber>(value: T) -> f64 {
    add2().invoke((1.0, value))
}

/// `value - 1`.
pub fn dec<T: ToNumber>(value: T) -> f64 {
    add2().invoke((-1.0, value))
}

// =============================================================================
// Multiplication
// =============================================================================

/// Curried `a * b`.
pub fn mult2<A, B>() -> Curry2<impl Fn(A, B) -> f64, A, B>
where
    A: ToNumber,
    B: ToNumber,
{
    curry2(|first: A, second: B| first.to_number() * second.to_number())
}

/// Curried `a * b * c`.
pub fn mult3<A, B, C>() -> Curry3<impl Fn(A, B, C) -> f64, A, B, C>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
{
    curry3(|first: A, second: B, third: C| {
        mult2().invoke((first, second)) * third.to_number()
    })
}

/// Curried `a * b * c * d`.
pub fn mult4<A, B, C, D>() -> Curry4<impl Fn(A, B, C, D) -> f64, A, B, C, D>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
    D: ToNumber,
{
    curry4(|first: A, second: B, third: C, fourth: D| {
        mult3().invoke((first, second, third)) * fourth.to_number()
    })
}

/// Product of all `values`, folded left to right.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `values` is empty.
pub fn mult<T: ToNumber>(values: Vec<T>) -> Result<f64, EmptySequenceError> {
    fold("mult", values, |first, second| mult2().invoke((first, second)))
}

/// `value * 2`.
pub fn doub<T: ToNumber>(value: T) -> f64 {
    mult2().invoke((2.0, value))
}

/// `value * 3`.
pub fn trip<T: ToNumber>(value: T) -> f64 {
    mult2().invoke((3.0, value))
}

/// `value * value`.
pub fn sq<T: ToNumber>(value: T) -> f64 {
    let number = value.to_number();
    mult2().invoke((number, number))
}

/// Additive inverse, `value * -1`.
pub fn neg<T: ToNumber>(value: T) -> f64 {
    mult2().invoke((-1.0, value))
}

// =============================================================================
// Subtraction
// =============================================================================

/// Curried `a - b`, computed as `a + neg(b)`.
pub fn sub2<A, B>() -> Curry2<impl Fn(A, B) -> f64, A, B>
where
    A: ToNumber,
    B: ToNumber,
{
    curry2(|first: A, second: B| add2().invoke((first, neg(second))))
}

/// Curried `a - b - c`.
pub fn sub3<A, B, C>() -> Curry3<impl Fn(A, B, C) -> f64, A, B, C>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
{
    curry3(|first: A, second: B, third: C| {
        add3().invoke((first, neg(second), neg(third)))
    })
}

/// Curried `a - b - c - d`.
pub fn sub4<A, B, C, D>() -> Curry4<impl Fn(A, B, C, D) -> f64, A, B, C, D>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
    D: ToNumber,
{
    curry4(|first: A, second: B, third: C, fourth: D| {
        add4().invoke((first, neg(second), neg(third), neg(fourth)))
    })
}

/// The first value minus every following one, folded left to right.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `values` is empty.
pub fn sub<T: ToNumber>(values: Vec<T>) -> Result<f64, EmptySequenceError> {
    fold("sub", values, |first, second| sub2().invoke((first, second)))
}

// =============================================================================
// Division
// =============================================================================

/// Multiplicative inverse, `1 / value`.
pub fn recip<T: ToNumber>(value: T) -> f64 {
    1.0 / value.to_number()
}

/// Curried `a / b`, computed as `a * recip(b)`.
pub fn div2<A, B>() -> Curry2<impl Fn(A, B) -> f64, A, B>
where
    A: ToNumber,
    B: ToNumber,
{
    curry2(|first: A, second: B| mult2().invoke((first, recip(second))))
}

/// Curried `a / b / c`.
pub fn div3<A, B, C>() -> Curry3<impl Fn(A, B, C) -> f64, A, B, C>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
{
    curry3(|first: A, second: B, third: C| {
        mult3().invoke((first, recip(second), recip(third)))
    })
}

/// Curried `a / b / c / d`.
pub fn div4<A, B, C, D>() -> Curry4<impl Fn(A, B, C, D) -> f64, A, B, C, D>
where
    A: ToNumber,
    B: ToNumber,
    C: ToNumber,
    D: ToNumber,
{
    curry4(|first: A, second: B, third: C, fourth: D| {
        mult4().invoke((first, recip(second), recip(third), recip(fourth)))
    })
}

/// The first value divided by every following one, folded left to right.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `values` is empty.
pub fn div<T: ToNumber>(values: Vec<T>) -> Result<f64, EmptySequenceError> {
    fold("div", values, |first, second| div2().invoke((first, second)))
}

// =============================================================================
// Exponentiation
// =============================================================================

/// Left-associated power: `pow(a, b, c) == (a ^ b) ^ c`.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `values` is empty.
///
/// # Examples
///
/// ```
/// use fpkit::arithmetic::pow;
///
/// assert_eq!(pow(vec![2, 3]), Ok(8.0));
/// assert_eq!(pow(vec![2, 3, 2]), Ok(64.0));
/// ```
pub fn pow<T: ToNumber>(values: Vec<T>) -> Result<f64, EmptySequenceError> {
    fold("pow", values, power)
}

/// `base ^ exponent`, except that a `NaN` exponent and `(±1) ^ ±inf` are
/// `NaN` rather than `1`.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

/// Coerces `values` and folds them with `combine`, reporting an empty input
/// under `operation`.
fn fold<T, G>(operation: &'static str, values: Vec<T>, combine: G) -> Result<f64, EmptySequenceError>
where
    T: ToNumber,
    G: Fn(f64, f64) -> f64,
{
    let numbers: Vec<f64> = values.iter().map(ToNumber::to_number).collect();
    reduce()
        .invoke((combine, numbers))
        .map_err(|_| EmptySequenceError::raise(operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_folds_to_its_coercion() {
        assert_eq!(add(vec!["5"]), Ok(5.0));
        assert_eq!(pow(vec![7]), Ok(7.0));
    }

    #[test]
    fn test_fold_names_operation_on_empty_input() {
        assert_eq!(
            div(Vec::<f64>::new()),
            Err(EmptySequenceError { operation: "div" })
        );
    }

    #[test]
    fn test_sub_and_div_are_built_from_inverses() {
        assert_eq!(sub2().invoke((3, 5)), add2().invoke((3.0, neg(5))));
        assert_eq!(div2().invoke((3, 4)), mult2().invoke((3.0, recip(4))));
    }

    #[test]
    fn test_power_keeps_nan_where_powf_gives_one() {
        assert!(power(1.0, f64::NAN).is_nan());
        assert!(power(1.0, f64::INFINITY).is_nan());
        assert!(power(-1.0, f64::NEG_INFINITY).is_nan());
        assert_eq!(power(f64::NAN, 0.0), 1.0);
        assert_eq!(power(2.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_mixed_operand_types() {
        assert_eq!(mult3().invoke((2_u8, "3", 1.5_f32)), 9.0);
        assert!(add2().invoke((1, "one")).is_nan());
    }
}
