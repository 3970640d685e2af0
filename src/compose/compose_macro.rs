//! The `compose!` macro for variadic right-to-left composition.

/// Composes any number of functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`. Unlike
/// [`compose_n`](crate::compose::compose_n), the functions may change type
/// at every step, as with the fixed-arity builders.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Expands to `compose(f, g)`
/// - `compose!(f, g, h, ...)` - Expands to `compose(f, compose!(g, h, ...))`
///
/// The expansion is the same right-nested shape as
/// [`compose3`](crate::compose::compose3) through
/// [`compose5`](crate::compose::compose5).
///
/// # Examples
///
/// ```
/// use fncombinators::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Changing types along the chain
///
/// ```
/// use fncombinators::compose;
///
/// let parse = |s: &str| s.parse::<i64>().unwrap_or_default();
/// let negate = |x: i64| -x;
/// let render = |x: i64| format!("<{x}>");
///
/// let pipeline = compose!(render, negate, parse);
/// assert_eq!(pipeline("17"), "<-17>");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose($outer_function, $crate::compose!($($remaining_functions),+))
    };
}
