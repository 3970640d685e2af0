//! Function composition.
//!
//! Composition combines unary functions into one function that applies them
//! right to left: the rightmost function receives the input and the leftmost
//! function produces the result.
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! # Overview
//!
//! - [`compose`]: two functions
//! - [`compose3`], [`compose4`], [`compose5`]: fixed chains, right-nested as
//!   `compose(f, compose(g, h))`
//! - [`compose_n`]: any number of functions of a single type `T -> T`
//! - [`compose!`]: any number of functions with changing types
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: creates a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! # Examples
//!
//! ```
//! use fncombinators::compose::{compose, compose3};
//!
//! fn sum_by2(x: i32) -> i32 { x + 2 }
//! fn mul_by3(x: i32) -> i32 { x * 3 }
//!
//! assert_eq!(compose(mul_by3, sum_by2)(1), 9);
//! // sum_by2(mul_by3(sum_by2(1))) = sum_by2(9) = 11
//! assert_eq!(compose3(sum_by2, mul_by3, sum_by2)(1), 11);
//! ```

mod chain;
mod compose_macro;
mod utils;

pub use chain::{compose, compose3, compose4, compose5, compose_n};
pub use utils::{constant, flip, identity};

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::compose;
