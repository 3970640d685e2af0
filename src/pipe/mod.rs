//! Function piping.
//!
//! Piping is the mirror image of [composition](crate::compose): functions
//! are applied in the order they are written, which matches the way data
//! flows through a pipeline.
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! Every builder here is defined through the corresponding composition
//! builder with its arguments reversed: `pipe(f, g) == compose(g, f)`.
//!
//! # Overview
//!
//! - [`pipe`]: two functions
//! - [`pipe3`], [`pipe4`], [`pipe5`]: fixed chains, nested as
//!   `pipe(f, pipe(g, h))`
//! - [`pipe_n`]: any number of functions of a single type `T -> T`
//! - [`pipe!`]: any number of functions with changing types

mod chain;
mod pipe_macro;

pub use chain::{pipe, pipe3, pipe4, pipe5, pipe_n};

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::pipe;
