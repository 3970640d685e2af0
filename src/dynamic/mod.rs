//! Type-erased composition and piping.
//!
//! The builders in [`compose`](crate::compose) and [`pipe`](crate::pipe)
//! check every link of a chain at compile time. The builders here trade that
//! guarantee for chains whose length and types are only known at runtime:
//! every function maps a [`Dynamic`] value to a [`Dynamic`] value.
//!
//! # Overview
//!
//! - [`Dynamic`]: a boxed value of any `'static + Send + Sync` type
//! - [`TypeMismatchError`]: the error of a failed downcast
//! - [`AnyFunc`]: a boxed `Dynamic -> Result<Dynamic, TypeMismatchError>`
//! - [`any_fn`] and [`erase`]: build an [`AnyFunc`] from a closure
//! - [`compose_unsafe`]: right-to-left chain
//! - [`pipe_unsafe`]: left-to-right chain
//!
//! # Failure
//!
//! The combinators never look inside the values. A function that assumes a
//! concrete type has to downcast the value itself, and a wrong assumption
//! surfaces as a [`TypeMismatchError`] from that function. The first error
//! aborts the rest of the chain.
//!
//! ```rust
//! use fncombinators::dynamic::{Dynamic, erase, pipe_unsafe};
//!
//! let piped = pipe_unsafe([erase(|x: i32| x.to_string()), erase(|x: i32| x + 1)]);
//!
//! let error = piped(Dynamic::new(1)).unwrap_err();
//! assert_eq!(error.expected, "i32");
//! assert_eq!(error.found, "alloc::string::String");
//! ```

mod chain;
mod error;
mod value;

pub use chain::{AnyFunc, DynamicResult, any_fn, compose_unsafe, erase, pipe_unsafe};
pub use error::TypeMismatchError;
pub use value::Dynamic;
