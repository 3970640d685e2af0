//! Helper combinators that pair with composition and partial application.
//!
//! - [`identity`]: the unit of composition (I combinator)
//! - [`constant`]: ignores its input and returns a fixed value (K combinator)
//! - [`flip`]: swaps the two arguments of a binary function (C combinator)
//!
//! None of them carry state beyond what they capture at construction.

/// Returns the value unchanged.
///
/// `identity` is the unit element of composition:
/// - `compose(identity, f)` behaves as `f`
/// - `compose(f, identity)` behaves as `f`
///
/// An empty [`compose_n`](super::compose_n) chain behaves as `identity` too.
///
/// # Type Parameters
///
/// * `T` - The type of the value passed through
///
/// # Examples
///
/// ```
/// use fncombinators::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("unchanged"), "unchanged");
/// ```
///
/// # Use with composition
///
/// ```
/// use fncombinators::compose::{compose, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(compose(identity, double)(5), double(5));
/// assert_eq!(compose(double, identity)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Type Parameters
///
/// * `T` - The type of the returned value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Arguments
///
/// * `value` - The value handed out on every call
///
/// # Returns
///
/// A function of one argument that always yields `value`.
///
/// # Examples
///
/// ```
/// use fncombinators::compose::constant;
///
/// let always_seven = constant::<_, &str>(7);
/// assert_eq!(always_seven("ignored"), 7);
/// assert_eq!(always_seven("also ignored"), 7);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fncombinators::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_: U| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g(b, a)` with `g(b, a) == f(a, b)`. Together
/// with [`partial`](crate::partial::partial) this fixes the second argument
/// of a binary function instead of the first.
///
/// # Laws
///
/// - **Double flip**: `flip(flip(f))(a, b) == f(a, b)`
/// - **Definition**: `flip(f)(b, a) == f(a, b)`
///
/// # Type Parameters
///
/// * `A` - The first argument type of `function`
/// * `B` - The second argument type of `function`
/// * `C` - The return type
/// * `F` - The wrapped function type
///
/// # Arguments
///
/// * `function` - The binary function whose arguments are swapped
///
/// # Returns
///
/// A function taking `(B, A)` that forwards to `function(A, B)`.
///
/// # Examples
///
/// ```
/// use fncombinators::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert!((flipped(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
///
/// # Double flip is identity
///
/// ```
/// use fncombinators::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped_twice = flip(flip(subtract));
/// assert_eq!(flipped_twice(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second: B, first: A| function(first, second)
}
