//! # fpkit
//!
//! Currying, partial application, function composition and curried
//! arithmetic for Rust, built from plain closures.
//!
//! ## Overview
//!
//! - **Combinator core**: `identity`, `apply`, `partial`, fixed-arity
//!   `curry2`/`curry3`/`curry4` and variable-arity `curry`
//! - **Sequence operators**: curried, data-last `map`, `filter`, `reduce`,
//!   slicing, concatenation and the sort family over `Vec<T>`
//! - **Composition**: `compose`/`pipe` in fixed and variable arity, plus the
//!   `compose!` and `pipe!` macros
//! - **Arithmetic**: curried `add`/`mult`/`sub`/`div` families, `pow` and
//!   unary helpers with lenient numeric coercion
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence operators
//! - `compose`: Function composition (enables `sequence`)
//! - `arithmetic`: Curried arithmetic (enables `compose`)
//! - `full`: Enable all features
//!
//! The combinator core, error types and numeric coercion are always
//! available.
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let add_then_double = compose2(doub::<f64>, add2::<f64, f64>().invoke((1.0,)));
//! assert_eq!(add_then_double(4.0), 10.0);
//!
//! let sorted = sort_by_num(copy(&[10, 2, 33, 4]));
//! assert_eq!(tail(&sorted), Some(&33));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::*;
    pub use crate::numeric::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "arithmetic")]
    pub use crate::arithmetic::*;
}

pub mod combinator;
pub mod error;
pub mod numeric;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "arithmetic")]
pub mod arithmetic;
