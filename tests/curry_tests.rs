//! Unit tests for the fixed-arity curry builders.
//!
//! Every row of the dispatch table is exercised: zero arguments, each prefix
//! length, and the saturating call.

use fpkit::combinator::{Invoke, curry2, curry3, curry4};
use rstest::rstest;

// =============================================================================
// curry2 tests
// =============================================================================

mod curry2_tests {
    use super::*;

    fn subtract(first: i32, second: i32) -> i32 {
        first - second
    }

    #[rstest]
    #[case(10, 3, 7)]
    #[case(0, 5, -5)]
    #[case(-4, -4, 0)]
    fn test_curry2_exact_arity(#[case] first: i32, #[case] second: i32, #[case] expected: i32) {
        assert_eq!(curry2(subtract).invoke((first, second)), expected);
    }

    #[test]
    fn test_curry2_one_argument_binds_first_parameter() {
        let from_ten = curry2(subtract).invoke((10,));
        assert_eq!(from_ten(3), 7);
        assert_eq!(from_ten(10), 0);
    }

    #[test]
    fn test_curry2_zero_arguments_is_idempotent() {
        let curried = curry2(subtract);
        let same = curried.invoke(());

        assert_eq!(same.invoke((10, 3)), curried.invoke((10, 3)));
        assert_eq!(same.invoke((10,))(3), 7);
        assert_eq!(same.invoke(()).invoke(()).invoke((1, 1)), 0);
    }

    #[test]
    fn test_curry2_with_owned_strings() {
        let join = curry2(|first: String, second: String| format!("{first} {second}"));
        let hello = join.invoke((String::from("hello"),));

        assert_eq!(hello(String::from("world")), "hello world");
        assert_eq!(hello(String::from("there")), "hello there");
    }

    #[test]
    fn test_curry2_with_heterogeneous_types() {
        let repeat = curry2(|text: &'static str, times: usize| text.repeat(times));
        let ab = repeat.invoke(("ab",));
        assert_eq!(ab(3), "ababab");
    }

    #[test]
    fn test_curry2_reusable() {
        let add_five = curry2(|first: i32, second: i32| first + second).invoke((5,));
        for value in 0..100 {
            assert_eq!(add_five(value), 5 + value);
        }
    }
}

// =============================================================================
// curry3 tests
// =============================================================================

mod curry3_tests {
    use super::*;

    fn combine(first: i32, second: i32, third: i32) -> i32 {
        first * 100 + second * 10 + third
    }

    #[test]
    fn test_curry3_every_split() {
        let curried = curry3(combine);
        let expected = combine(1, 2, 3);

        assert_eq!(curried.invoke((1, 2, 3)), expected);
        assert_eq!(curried.invoke((1, 2))(3), expected);
        assert_eq!(curried.invoke((1,)).invoke((2, 3)), expected);
        assert_eq!(curried.invoke((1,)).invoke((2,))(3), expected);
    }

    #[test]
    fn test_curry3_zero_arguments_at_every_level() {
        let curried = curry3(combine).invoke(());
        let after_one = curried.invoke((4,)).invoke(());
        assert_eq!(after_one.invoke((5, 6)), 456);
    }

    #[test]
    fn test_curry3_partial_applications_are_independent() {
        let curried = curry3(combine);
        let one = curried.invoke((1,));
        let two = curried.invoke((2,));

        assert_eq!(one.invoke((0, 0)), 100);
        assert_eq!(two.invoke((0, 0)), 200);
        assert_eq!(one.invoke((9, 9)), 199);
    }
}

// =============================================================================
// curry4 tests
// =============================================================================

mod curry4_tests {
    use super::*;

    fn digits(a: u32, b: u32, c: u32, d: u32) -> u32 {
        a * 1000 + b * 100 + c * 10 + d
    }

    #[test]
    fn test_curry4_every_split() {
        let curried = curry4(digits);

        assert_eq!(curried.invoke((1, 2, 3, 4)), 1234);
        assert_eq!(curried.invoke((1, 2, 3))(4), 1234);
        assert_eq!(curried.invoke((1, 2)).invoke((3, 4)), 1234);
        assert_eq!(curried.invoke((1, 2)).invoke((3,))(4), 1234);
        assert_eq!(curried.invoke((1,)).invoke((2, 3, 4)), 1234);
        assert_eq!(curried.invoke((1,)).invoke((2, 3))(4), 1234);
        assert_eq!(curried.invoke((1,)).invoke((2,)).invoke((3, 4)), 1234);
        assert_eq!(curried.invoke((1,)).invoke((2,)).invoke((3,))(4), 1234);
    }

    #[test]
    fn test_curry4_zero_arguments_returns_same_callable() {
        let curried = curry4(digits);
        assert_eq!(curried.invoke(()).invoke((9, 8, 7, 6)), 9876);
    }

    #[test]
    fn test_curry4_with_float_volume() {
        let scaled_volume =
            curry4(|scale: f64, width: f64, height: f64, depth: f64| scale * width * height * depth);
        let doubled = scaled_volume.invoke((2.0,));
        let result = doubled.invoke((1.5, 2.0, 4.0));
        assert!((result - 24.0).abs() < f64::EPSILON);
    }
}
