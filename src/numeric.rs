//! Numeric coercion for the arithmetic combinators.
//!
//! Every arithmetic operator coerces its operands to `f64` before combining
//! them. Coercion is total: input that has no numeric reading becomes `NaN`,
//! and `NaN` then propagates through the rest of the computation.
//!
//! The rules follow the usual dynamic-language `Number(x)` conversion:
//!
//! | Input                                   | Result              |
//! |-----------------------------------------|---------------------|
//! | integers, floats                        | the value as `f64`  |
//! | `true` / `false`                        | `1.0` / `0.0`       |
//! | `None`                                  | `NaN`               |
//! | `""` or whitespace only                 | `0.0`               |
//! | decimal literal (`"1.5"`, `" -2e3 "`)   | the parsed value    |
//! | `"Infinity"`, `"+Infinity"`, `"-Infinity"` | `±inf`           |
//! | `"0x1f"`, `"0o17"`, `"0b101"`           | the integer value   |
//! | anything else                           | `NaN`               |

/// Conversion of a value to a number, never failing.
///
/// # Examples
///
/// ```rust
/// use fpkit::numeric::ToNumber;
///
/// assert_eq!(7_u8.to_number(), 7.0);
/// assert_eq!(true.to_number(), 1.0);
/// assert_eq!(" 2.5 ".to_number(), 2.5);
/// assert_eq!("0x10".to_number(), 16.0);
/// assert!("twelve".to_number().is_nan());
/// assert!(None::<i32>.to_number().is_nan());
/// ```
pub trait ToNumber {
    /// Returns the numeric reading of `self`, or `NaN` if there is none.
    fn to_number(&self) -> f64;
}

macro_rules! impl_to_number_for_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl ToNumber for $primitive {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_to_number_for_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl ToNumber for bool {
    #[inline]
    fn to_number(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

impl ToNumber for str {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> f64 {
        parse_number(self)
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, ToNumber::to_number)
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    #[inline]
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

/// Parses `text` with the string-to-number rules described in the module docs.
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Parses `0x`, `0o` and `0b` literals. Returns `None` when `text` carries no
/// radix prefix, and `Some(NaN)` when the prefix is followed by invalid digits.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |accumulator, character| {
        character
            .to_digit(radix)
            .map(|digit| accumulator.mul_add(f64::from(radix), f64::from(digit)))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Accepts `[+-] digits [. digits] [(e|E) [+-] digits]` with at least one
/// mantissa digit on either side of the point.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(position) => (&unsigned[..position], Some(&unsigned[position + 1..])),
        None => (unsigned, None),
    };

    let (integral, fractional) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    let mantissa_valid = all_digits(integral)
        && all_digits(fractional)
        && !(integral.is_empty() && fractional.is_empty());

    let exponent_valid = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_valid && exponent_valid
}
