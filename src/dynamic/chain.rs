//! Composition and piping over [`Dynamic`] values.

use std::any::Any;

use super::{Dynamic, TypeMismatchError};

/// The result of one step of a dynamic chain.
pub type DynamicResult = Result<Dynamic, TypeMismatchError>;

/// A boxed function from [`Dynamic`] to [`Dynamic`].
///
/// Boxing lets functions with different closure types share one sequence.
pub type AnyFunc = Box<dyn Fn(Dynamic) -> DynamicResult + Send + Sync>;

/// Boxes a closure as an [`AnyFunc`].
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::{Dynamic, any_fn};
///
/// let add2 = any_fn(|x| Ok(Dynamic::new(x.downcast::<i32>()? + 2)));
/// let result = add2(Dynamic::new(40)).and_then(Dynamic::downcast::<i32>);
/// assert_eq!(result, Ok(42));
/// ```
pub fn any_fn<F>(function: F) -> AnyFunc
where
    F: Fn(Dynamic) -> DynamicResult + Send + Sync + 'static,
{
    Box::new(function)
}

/// Lifts a statically typed function into an [`AnyFunc`].
///
/// The returned function downcasts its input to `A`, applies `function` and
/// wraps the result. A value of any other type yields a
/// [`TypeMismatchError`] and `function` is not called.
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::{Dynamic, erase};
///
/// let length = erase(|s: String| s.len());
///
/// let result = length(Dynamic::new(String::from("four")));
/// assert_eq!(result.and_then(Dynamic::downcast::<usize>), Ok(4));
///
/// assert!(length(Dynamic::new(4_u8)).is_err());
/// ```
pub fn erase<A, B, F>(function: F) -> AnyFunc
where
    A: Any,
    B: Any + Send + Sync,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    Box::new(move |value: Dynamic| {
        value
            .downcast::<A>()
            .map(|input| Dynamic::new(function(input)))
    })
}

/// Composes any number of dynamic functions, applying the last one first.
///
/// Each function receives the previous function's output untouched; no
/// types are checked here. The first `Err` stops the chain and is returned
/// as is. An empty sequence returns its input unchanged.
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::{Dynamic, any_fn, compose_unsafe};
///
/// let add2 = any_fn(|x| Ok(Dynamic::new(x.downcast::<i32>()? + 2)));
/// let mul3 = any_fn(|x| Ok(Dynamic::new(x.downcast::<i32>()? * 3)));
/// let stringify = any_fn(|x| Ok(Dynamic::new(x.downcast::<i32>()?.to_string())));
///
/// let composed = compose_unsafe([stringify, mul3, add2]);
/// let result = composed(Dynamic::new(4)).and_then(Dynamic::downcast::<String>);
/// assert_eq!(result, Ok(String::from("18")));
/// ```
pub fn compose_unsafe<F, I>(functions: I) -> impl Fn(Dynamic) -> DynamicResult
where
    I: IntoIterator<Item = F>,
    F: Fn(Dynamic) -> DynamicResult,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |value: Dynamic| {
        functions
            .iter()
            .rev()
            .try_fold(value, |accumulator, function| function(accumulator))
    }
}

/// Pipes any number of dynamic functions, applying the first one first.
///
/// Built as [`compose_unsafe`] over the reversed sequence, with the same
/// failure and empty-sequence behaviour.
///
/// # Examples
///
/// ```rust
/// use fncombinators::dynamic::{Dynamic, erase, pipe_unsafe};
///
/// let piped = pipe_unsafe([
///     erase(|x: i32| x + 2),
///     erase(|x: i32| x * 3),
///     erase(|x: i32| x.to_string()),
/// ]);
/// let result = piped(Dynamic::new(4)).and_then(Dynamic::downcast::<String>);
/// assert_eq!(result, Ok(String::from("18")));
/// ```
pub fn pipe_unsafe<F, I>(functions: I) -> impl Fn(Dynamic) -> DynamicResult
where
    I: IntoIterator<Item = F>,
    F: Fn(Dynamic) -> DynamicResult,
{
    let mut functions: Vec<F> = functions.into_iter().collect();
    functions.reverse();
    compose_unsafe(functions)
}
