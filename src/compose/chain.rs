//! Right-to-left composition builders.

/// Composes two functions: `compose(f, g)(x) == f(g(x))`.
///
/// `inner` receives the input first and `outer` receives its result.
///
/// # Examples
///
/// ```
/// use fncombinators::compose::compose;
///
/// fn sum_by2(x: i32) -> i32 { x + 2 }
/// fn mul_by3(x: i32) -> i32 { x * 3 }
///
/// assert_eq!(compose(mul_by3, sum_by2)(1), 9); // (1 + 2) * 3
/// assert_eq!(compose(sum_by2, mul_by3)(1), 5); // (1 * 3) + 2
/// ```
///
/// ## Type conversion
///
/// ```
/// use fncombinators::compose::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digit_count = compose(get_length, to_string);
/// assert_eq!(digit_count(12345), 5);
/// ```
#[inline]
pub fn compose<T, U, V, F, G>(outer: F, inner: G) -> impl Fn(T) -> V
where
    F: Fn(U) -> V,
    G: Fn(T) -> U,
{
    move |input: T| outer(inner(input))
}

/// Composes three functions: `compose3(f, g, h)(x) == f(g(h(x)))`.
///
/// Built as `compose(f, compose(g, h))`.
#[inline]
pub fn compose3<T1, T2, T3, R, F, G, H>(first: F, second: G, third: H) -> impl Fn(T1) -> R
where
    F: Fn(T3) -> R,
    G: Fn(T2) -> T3,
    H: Fn(T1) -> T2,
{
    compose(first, compose(second, third))
}

/// Composes four functions: `compose4(f, g, h, i)(x) == f(g(h(i(x))))`.
#[inline]
pub fn compose4<T1, T2, T3, T4, R, F, G, H, I>(
    first: F,
    second: G,
    third: H,
    fourth: I,
) -> impl Fn(T1) -> R
where
    F: Fn(T4) -> R,
    G: Fn(T3) -> T4,
    H: Fn(T2) -> T3,
    I: Fn(T1) -> T2,
{
    compose(first, compose(second, compose(third, fourth)))
}

/// Composes five functions: `compose5(f, g, h, i, j)(x) == f(g(h(i(j(x)))))`.
#[inline]
pub fn compose5<T1, T2, T3, T4, T5, R, F, G, H, I, J>(
    first: F,
    second: G,
    third: H,
    fourth: I,
    fifth: J,
) -> impl Fn(T1) -> R
where
    F: Fn(T5) -> R,
    G: Fn(T4) -> T5,
    H: Fn(T3) -> T4,
    I: Fn(T2) -> T3,
    J: Fn(T1) -> T2,
{
    compose(first, compose(second, compose(third, compose(fourth, fifth))))
}

/// Composes any number of `T -> T` functions, applying the last one first.
///
/// The sequence is collected when the composition is built. An empty
/// sequence yields a function that returns its input unchanged.
///
/// # Examples
///
/// ```
/// use fncombinators::compose::compose_n;
///
/// fn sum_by2(x: i32) -> i32 { x + 2 }
/// fn mul_by3(x: i32) -> i32 { x * 3 }
///
/// let composed = compose_n([sum_by2, mul_by3, sum_by2, mul_by3, sum_by2]);
/// assert_eq!(composed(1), 35);
///
/// let unchanged = compose_n(Vec::<fn(i32) -> i32>::new());
/// assert_eq!(unchanged(42), 42);
/// ```
///
/// Closures of different types can be mixed once boxed:
///
/// ```
/// use fncombinators::compose::compose_n;
///
/// let offset = 10;
/// let functions: Vec<Box<dyn Fn(i32) -> i32>> = vec![
///     Box::new(move |x: i32| x + offset),
///     Box::new(|x: i32| x * x),
/// ];
/// assert_eq!(compose_n(functions)(3), 19);
/// ```
pub fn compose_n<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |value: T| {
        functions
            .iter()
            .rev()
            .fold(value, |accumulator, function| function(accumulator))
    }
}
