//! # fncombinators
//!
//! Function-building combinators for Rust: partial application, currying,
//! composition and piping, plus dynamically-typed chains over [`Dynamic`]
//! values.
//!
//! ## Overview
//!
//! - **Partial application**: [`partial`](partial::partial) through
//!   [`partial5`](partial::partial5) fix the first argument of a 2- to
//!   6-argument function
//! - **Currying**: [`curry2`](curry::curry2) through [`curry5`](curry::curry5)
//!   turn an n-ary function into a chain of unary functions
//! - **Composition**: [`compose`](compose::compose), fixed chains of 3 to 5,
//!   [`compose_n`](compose::compose_n) and the variadic [`compose!`] macro
//! - **Piping**: [`pipe`](pipe::pipe), fixed chains of 3 to 5,
//!   [`pipe_n`](pipe::pipe_n) and the variadic [`pipe!`] macro
//! - **Dynamic chains**: [`compose_unsafe`](dynamic::compose_unsafe) and
//!   [`pipe_unsafe`](dynamic::pipe_unsafe) over type-erased values
//!
//! [`Dynamic`]: dynamic::Dynamic
//!
//! ## Feature Flags
//!
//! - `partial`: Partial application
//! - `curry`: Currying
//! - `compose`: Composition and the helper combinators
//! - `pipe`: Piping (enables `compose`)
//! - `dynamic`: Type-erased composition and piping
//! - `log`: Debug records for failed dynamic downcasts
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fncombinators::prelude::*;
//!
//! fn sum_by2(x: i32) -> i32 { x + 2 }
//! fn mul_by3(x: i32) -> i32 { x * 3 }
//!
//! assert_eq!(compose(mul_by3, sum_by2)(1), 9);
//! assert_eq!(pipe(mul_by3, sum_by2)(1), 5);
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(partial(add, 40)(2), 42);
//! assert_eq!(curry2(add)(40)(2), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every builder of the enabled features.
///
/// # Usage
///
/// ```rust
/// use fncombinators::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "partial")]
    pub use crate::partial::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "pipe")]
    pub use crate::pipe::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::*;
}

#[cfg(feature = "partial")]
pub mod partial;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "pipe")]
pub mod pipe;

#[cfg(feature = "dynamic")]
pub mod dynamic;
