//! Partial application of the first argument.
//!
//! Each builder takes a function and a value for its first parameter and
//! returns a function of the remaining parameters. The number in the name
//! counts the parameters that are still open:
//!
//! | Builder      | Wrapped function        | Returned function     |
//! |--------------|-------------------------|-----------------------|
//! | [`partial`]  | `Fn(T1, T2) -> R`       | `Fn(T2) -> R`         |
//! | [`partial1`] | `Fn(T1, T2) -> R`       | `Fn(T2) -> R`         |
//! | [`partial2`] | `Fn(T1, T2, T3) -> R`   | `Fn(T2, T3) -> R`     |
//! | [`partial3`] | `Fn(T1, .., T4) -> R`   | `Fn(T2, T3, T4) -> R` |
//! | [`partial4`] | `Fn(T1, .., T5) -> R`   | `Fn(T2, .., T5) -> R` |
//! | [`partial5`] | `Fn(T1, .., T6) -> R`   | `Fn(T2, .., T6) -> R` |
//!
//! The returned closures implement [`Fn`], so the bound argument is cloned
//! into every call.
//!
//! # Examples
//!
//! ```
//! use fncombinators::partial::{partial, partial3};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn clamp(value: i32, low: i32, high: i32, step: i32) -> i32 {
//!     (value.clamp(low, high) / step) * step
//! }
//!
//! let add_five = partial(add, 5);
//! assert_eq!(add_five(3), 8);
//!
//! let clamp_twenty_three = partial3(clamp, 23);
//! assert_eq!(clamp_twenty_three(0, 100, 5), 20);
//! ```

/// Returns a function that calls `function` with `argument1` as its first
/// argument.
///
/// `partial(f, a)(b) == f(a, b)`
///
/// # Examples
///
/// ```
/// use fncombinators::partial::partial;
///
/// fn greet(greeting: &str, name: &str) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// let hello = partial(greet, "Hello");
/// assert_eq!(hello("World"), "Hello, World!");
/// assert_eq!(hello("Rust"), "Hello, Rust!");
/// ```
#[inline]
pub fn partial<T1, T2, R, F>(function: F, argument1: T1) -> impl Fn(T2) -> R
where
    F: Fn(T1, T2) -> R,
    T1: Clone,
{
    move |argument2: T2| function(argument1.clone(), argument2)
}

/// Alias of [`partial`].
#[inline]
pub fn partial1<T1, T2, R, F>(function: F, argument1: T1) -> impl Fn(T2) -> R
where
    F: Fn(T1, T2) -> R,
    T1: Clone,
{
    partial(function, argument1)
}

/// Fixes the first argument of a 3-argument function.
///
/// # Examples
///
/// ```
/// use fncombinators::partial::partial2;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let unit_wide = partial2(volume, 1);
/// assert_eq!(unit_wide(3, 4), 12);
/// ```
#[inline]
pub fn partial2<T1, T2, T3, R, F>(function: F, argument1: T1) -> impl Fn(T2, T3) -> R
where
    F: Fn(T1, T2, T3) -> R,
    T1: Clone,
{
    move |argument2: T2, argument3: T3| function(argument1.clone(), argument2, argument3)
}

/// Fixes the first argument of a 4-argument function.
#[inline]
pub fn partial3<T1, T2, T3, T4, R, F>(function: F, argument1: T1) -> impl Fn(T2, T3, T4) -> R
where
    F: Fn(T1, T2, T3, T4) -> R,
    T1: Clone,
{
    move |argument2: T2, argument3: T3, argument4: T4| {
        function(argument1.clone(), argument2, argument3, argument4)
    }
}

/// Fixes the first argument of a 5-argument function.
#[inline]
pub fn partial4<T1, T2, T3, T4, T5, R, F>(
    function: F,
    argument1: T1,
) -> impl Fn(T2, T3, T4, T5) -> R
where
    F: Fn(T1, T2, T3, T4, T5) -> R,
    T1: Clone,
{
    move |argument2: T2, argument3: T3, argument4: T4, argument5: T5| {
        function(argument1.clone(), argument2, argument3, argument4, argument5)
    }
}

/// Fixes the first argument of a 6-argument function.
///
/// # Examples
///
/// ```
/// use fncombinators::partial::partial5;
///
/// let join = |a: String, b: &str, c: &str, d: &str, e: &str, f: &str| {
///     [a.as_str(), b, c, d, e, f].join("/")
/// };
///
/// let under_root = partial5(join, String::from("root"));
/// assert_eq!(under_root("a", "b", "c", "d", "e"), "root/a/b/c/d/e");
/// ```
#[inline]
pub fn partial5<T1, T2, T3, T4, T5, T6, R, F>(
    function: F,
    argument1: T1,
) -> impl Fn(T2, T3, T4, T5, T6) -> R
where
    F: Fn(T1, T2, T3, T4, T5, T6) -> R,
    T1: Clone,
{
    move |argument2: T2, argument3: T3, argument4: T4, argument5: T5, argument6: T6| {
        function(
            argument1.clone(),
            argument2,
            argument3,
            argument4,
            argument5,
            argument6,
        )
    }
}
