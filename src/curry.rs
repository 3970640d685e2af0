//! Currying for functions of 2 to 5 arguments.
//!
//! Currying transforms a function that takes several arguments into a chain
//! of functions that each take one:
//!
//! ```text
//! curry3(f)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! # Design Decisions
//!
//! The outermost stage is returned as `impl Fn`. Every later stage is a
//! [`Curried`] box, since a closure cannot name the `impl Fn` it returns.
//! The wrapped function is held in an [`Arc`] and shared by every stage of
//! the chain, so:
//!
//! - each intermediate stage is a standalone value that can be stored,
//!   passed around and called any number of times
//! - the wrapped function does not need to implement [`Clone`]
//! - every stage is [`Send`] and [`Sync`]
//!
//! The boxed stages are `Send + Sync`, so the wrapped function and every
//! captured argument must be too. Every argument except the last is
//! captured by a stage and cloned into the next one, so those argument types
//! must implement [`Clone`]. The wrapped function runs only once the final
//! argument is supplied.

use std::sync::Arc;

/// An intermediate stage of a curried chain: takes one `A`, yields `R`.
pub type Curried<'a, A, R> = Box<dyn Fn(A) -> R + Send + Sync + 'a>;

/// Converts a 2-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fncombinators::curry::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
pub fn curry2<'a, A, B, R, F>(function: F) -> impl Fn(A) -> Curried<'a, B, R>
where
    F: Fn(A, B) -> R + Send + Sync + 'a,
    A: Clone + Send + Sync + 'a,
    B: 'a,
    R: 'a,
{
    let function = Arc::new(function);
    move |argument1: A| -> Curried<'a, B, R> {
        let function = Arc::clone(&function);
        Box::new(move |argument2: B| function(argument1.clone(), argument2))
    }
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fncombinators::curry::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let with_width = curry3(volume)(2.0);
/// let with_width_height = with_width(3.0);
///
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
pub fn curry3<'a, A, B, C, R, F>(function: F) -> impl Fn(A) -> Curried<'a, B, Curried<'a, C, R>>
where
    F: Fn(A, B, C) -> R + Send + Sync + 'a,
    A: Clone + Send + Sync + 'a,
    B: Clone + Send + Sync + 'a,
    C: 'a,
    R: 'a,
{
    let function = Arc::new(function);
    move |argument1: A| -> Curried<'a, B, Curried<'a, C, R>> {
        let function = Arc::clone(&function);
        Box::new(move |argument2: B| -> Curried<'a, C, R> {
            let function = Arc::clone(&function);
            let argument1 = argument1.clone();
            Box::new(move |argument3: C| {
                function(argument1.clone(), argument2.clone(), argument3)
            })
        })
    }
}

/// Converts a 4-argument function into curried form.
pub fn curry4<'a, A, B, C, D, R, F>(
    function: F,
) -> impl Fn(A) -> Curried<'a, B, Curried<'a, C, Curried<'a, D, R>>>
where
    F: Fn(A, B, C, D) -> R + Send + Sync + 'a,
    A: Clone + Send + Sync + 'a,
    B: Clone + Send + Sync + 'a,
    C: Clone + Send + Sync + 'a,
    D: 'a,
    R: 'a,
{
    let function = Arc::new(function);
    move |argument1: A| -> Curried<'a, B, Curried<'a, C, Curried<'a, D, R>>> {
        let function = Arc::clone(&function);
        Box::new(move |argument2: B| -> Curried<'a, C, Curried<'a, D, R>> {
            let function = Arc::clone(&function);
            let argument1 = argument1.clone();
            Box::new(move |argument3: C| -> Curried<'a, D, R> {
                let function = Arc::clone(&function);
                let argument1 = argument1.clone();
                let argument2 = argument2.clone();
                Box::new(move |argument4: D| {
                    function(
                        argument1.clone(),
                        argument2.clone(),
                        argument3.clone(),
                        argument4,
                    )
                })
            })
        })
    }
}

/// Converts a 5-argument function into curried form.
///
/// # Examples
///
/// ```
/// use fncombinators::curry::curry5;
///
/// let digits = |a: u8, b: u8, c: u8, d: u8, e: u8| format!("{a}{b}{c}{d}{e}");
/// assert_eq!(curry5(digits)(1)(2)(3)(4)(5), "12345");
/// ```
pub fn curry5<'a, A, B, C, D, E, R, F>(
    function: F,
) -> impl Fn(A) -> Curried<'a, B, Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>>>
where
    F: Fn(A, B, C, D, E) -> R + Send + Sync + 'a,
    A: Clone + Send + Sync + 'a,
    B: Clone + Send + Sync + 'a,
    C: Clone + Send + Sync + 'a,
    D: Clone + Send + Sync + 'a,
    E: 'a,
    R: 'a,
{
    let function = Arc::new(function);
    move |argument1: A| -> Curried<'a, B, Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>>> {
        let function = Arc::clone(&function);
        Box::new(
            move |argument2: B| -> Curried<'a, C, Curried<'a, D, Curried<'a, E, R>>> {
                let function = Arc::clone(&function);
                let argument1 = argument1.clone();
                Box::new(move |argument3: C| -> Curried<'a, D, Curried<'a, E, R>> {
                    let function = Arc::clone(&function);
                    let argument1 = argument1.clone();
                    let argument2 = argument2.clone();
                    Box::new(move |argument4: D| -> Curried<'a, E, R> {
                        let function = Arc::clone(&function);
                        let argument1 = argument1.clone();
                        let argument2 = argument2.clone();
                        let argument3 = argument3.clone();
                        Box::new(move |argument5: E| {
                            function(
                                argument1.clone(),
                                argument2.clone(),
                                argument3.clone(),
                                argument4.clone(),
                                argument5,
                            )
                        })
                    })
                })
            },
        )
    }
}
