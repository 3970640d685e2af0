//! The `pipe!` macro for variadic left-to-right function chains.

/// Pipes any number of functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the first function
/// receives the input and each following function receives the previous
/// result.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` behaves as [`compose!`](crate::compose!)`(h, g, f)`.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Expands to `pipe(f, g)`
/// - `pipe!(f, g, h, ...)` - Expands to `pipe(f, pipe!(g, h, ...))`
///
/// # Examples
///
/// ```
/// use fncombinators::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let piped = pipe!(square, double, add_one);
/// assert_eq!(piped(3), 19);
/// ```
///
/// ## Equivalence with compose!
///
/// ```
/// use fncombinators::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe::pipe($first_function, $crate::pipe!($($remaining_functions),+))
    };
}
