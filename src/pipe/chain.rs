//! Left-to-right piping builders, defined through composition.

use crate::compose::{compose, compose_n};

/// Pipes two functions: `pipe(f, g)(x) == g(f(x))`.
///
/// Equivalent to `compose(g, f)`.
///
/// # Examples
///
/// ```
/// use fncombinators::pipe::pipe;
///
/// fn sum_by2(x: i32) -> i32 { x + 2 }
/// fn mul_by3(x: i32) -> i32 { x * 3 }
///
/// assert_eq!(pipe(sum_by2, mul_by3)(1), 9); // (1 + 2) * 3
/// assert_eq!(pipe(mul_by3, sum_by2)(1), 5); // (1 * 3) + 2
/// ```
#[inline]
pub fn pipe<T, U, V, F, G>(first: F, second: G) -> impl Fn(T) -> V
where
    F: Fn(T) -> U,
    G: Fn(U) -> V,
{
    compose(second, first)
}

/// Pipes three functions: `pipe3(f, g, h)(x) == h(g(f(x)))`.
///
/// Built as `pipe(f, pipe(g, h))`.
#[inline]
pub fn pipe3<T1, T2, T3, R, F, G, H>(first: F, second: G, third: H) -> impl Fn(T1) -> R
where
    F: Fn(T1) -> T2,
    G: Fn(T2) -> T3,
    H: Fn(T3) -> R,
{
    pipe(first, pipe(second, third))
}

/// Pipes four functions: `pipe4(f, g, h, i)(x) == i(h(g(f(x))))`.
#[inline]
pub fn pipe4<T1, T2, T3, T4, R, F, G, H, I>(
    first: F,
    second: G,
    third: H,
    fourth: I,
) -> impl Fn(T1) -> R
where
    F: Fn(T1) -> T2,
    G: Fn(T2) -> T3,
    H: Fn(T3) -> T4,
    I: Fn(T4) -> R,
{
    pipe(first, pipe(second, pipe(third, fourth)))
}

/// Pipes five functions: `pipe5(f, g, h, i, j)(x) == j(i(h(g(f(x)))))`.
///
/// # Examples
///
/// ```
/// use fncombinators::pipe::pipe5;
///
/// fn sum_by2(x: i32) -> i32 { x + 2 }
/// fn mul_by3(x: i32) -> i32 { x * 3 }
///
/// let piped = pipe5(sum_by2, mul_by3, sum_by2, mul_by3, sum_by2);
/// assert_eq!(piped(1), 35);
/// ```
#[inline]
pub fn pipe5<T1, T2, T3, T4, T5, R, F, G, H, I, J>(
    first: F,
    second: G,
    third: H,
    fourth: I,
    fifth: J,
) -> impl Fn(T1) -> R
where
    F: Fn(T1) -> T2,
    G: Fn(T2) -> T3,
    H: Fn(T3) -> T4,
    I: Fn(T4) -> T5,
    J: Fn(T5) -> R,
{
    pipe(first, pipe(second, pipe(third, pipe(fourth, fifth))))
}

/// Pipes any number of `T -> T` functions, applying the first one first.
///
/// Built as [`compose_n`] over the reversed sequence. An empty sequence
/// yields a function that returns its input unchanged.
///
/// # Examples
///
/// ```
/// use fncombinators::pipe::pipe_n;
///
/// fn sum_by2(x: i32) -> i32 { x + 2 }
/// fn mul_by3(x: i32) -> i32 { x * 3 }
///
/// let piped = pipe_n([mul_by3, sum_by2, mul_by3, sum_by2, mul_by3]);
/// assert_eq!(piped(1), 51);
/// ```
pub fn pipe_n<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let mut functions: Vec<F> = functions.into_iter().collect();
    functions.reverse();
    compose_n(functions)
}
