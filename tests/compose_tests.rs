//! Unit tests for the composition family.
//!
//! Tests for the fixed-arity builders, `compose_n`, the `compose!` macro and
//! the helper combinators.

#![cfg(feature = "compose")]

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use fncombinators::compose::{
    compose, compose3, compose4, compose5, compose_n, constant, flip, identity,
};
use rstest::rstest;

fn sum_by2(x: i32) -> i32 {
    x + 2
}

fn mul_by3(x: i32) -> i32 {
    x * 3
}

// =============================================================================
// Fixed-arity composition
// =============================================================================

#[test]
fn test_compose_order() {
    // (1 + 2) * 3
    assert_eq!(compose(mul_by3, sum_by2)(1), 9);
    // (1 * 3) + 2
    assert_eq!(compose(sum_by2, mul_by3)(1), 5);
}

#[test]
fn test_compose3() {
    assert_eq!(compose3(sum_by2, mul_by3, sum_by2)(1), 11);
    assert_eq!(compose3(mul_by3, sum_by2, mul_by3)(1), 15);
}

#[test]
fn test_compose4() {
    // ((((1 + 2) * 3) + 2) * 3)
    assert_eq!(compose4(mul_by3, sum_by2, mul_by3, sum_by2)(1), 33);
    // ((((1 * 3) + 2) * 3) + 2)
    assert_eq!(compose4(sum_by2, mul_by3, sum_by2, mul_by3)(1), 17);
}

#[test]
fn test_compose5() {
    assert_eq!(compose5(sum_by2, mul_by3, sum_by2, mul_by3, sum_by2)(1), 35);
    assert_eq!(compose5(mul_by3, sum_by2, mul_by3, sum_by2, mul_by3)(1), 51);
}

#[test]
fn test_compose_changes_types() {
    let parse = |s: &str| s.len();
    let is_even = |n: usize| n % 2 == 0;
    let describe = |even: bool| if even { "even" } else { "odd" };

    let describe_length = compose3(describe, is_even, parse);
    assert_eq!(describe_length("four"), "even");
    assert_eq!(describe_length("three"), "odd");
}

#[test]
fn test_compose5_evaluation_order() {
    let calls = RefCell::new(Vec::new());
    let log = &calls;
    let record = move |name: char| {
        move |x: u32| {
            log.borrow_mut().push(name);
            x + 1
        }
    };

    let composed = compose5(record('a'), record('b'), record('c'), record('d'), record('e'));
    assert_eq!(composed(0), 5);
    assert_eq!(*calls.borrow(), vec!['e', 'd', 'c', 'b', 'a']);
}

#[test]
fn test_compose_failure_stops_at_failing_stage() {
    let calls = RefCell::new(Vec::new());
    let parse = |s: &str| {
        calls.borrow_mut().push("parse");
        s.parse::<i32>()
    };
    let double = |parsed: Result<i32, std::num::ParseIntError>| {
        calls.borrow_mut().push("double");
        parsed.map(|x| x * 2)
    };

    let composed = compose(double, parse);
    assert_eq!(composed("21"), Ok(42));
    assert!(composed("twenty-one").is_err());
    assert_eq!(*calls.borrow(), vec!["parse", "double", "parse", "double"]);
}

#[test]
fn test_compose3_panicking_stage_skips_later_stages() {
    let calls = RefCell::new(Vec::new());
    let log = &calls;
    let first = move |x: i32| {
        log.borrow_mut().push("first");
        x + 1
    };
    let failing = move |x: i32| -> i32 {
        log.borrow_mut().push("failing");
        panic!("stage rejected {x}")
    };
    let last = move |x: i32| {
        log.borrow_mut().push("last");
        x * 2
    };

    let chain = compose3(last, failing, first);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| chain(1)));

    assert!(outcome.is_err());
    assert_eq!(*calls.borrow(), vec!["first", "failing"]);
}

#[test]
#[should_panic(expected = "stage rejected 3")]
fn test_compose3_panic_reaches_caller_unchanged() {
    let failing = |x: i32| -> i32 { panic!("stage rejected {x}") };
    let chain = compose3(mul_by3, failing, sum_by2);
    let _ = chain(1);
}

// =============================================================================
// compose_n
// =============================================================================

#[rstest]
#[case(vec![sum_by2, mul_by3, sum_by2, mul_by3, sum_by2], 35)]
#[case(vec![mul_by3, sum_by2, mul_by3, sum_by2, mul_by3], 51)]
#[case(vec![mul_by3 as fn(i32) -> i32], 3)]
#[case(vec![], 1)]
fn test_compose_n(#[case] functions: Vec<fn(i32) -> i32>, #[case] expected: i32) {
    assert_eq!(compose_n(functions)(1), expected);
}

#[test]
fn test_compose_n_empty_is_identity() {
    let unchanged = compose_n(Vec::<fn(i32) -> i32>::new());
    assert_eq!(unchanged(42), 42);
    assert_eq!(unchanged(42), identity(42));
}

#[test]
fn test_compose_n_boxed_closures() {
    let suffix = String::from("!");
    let functions: Vec<Box<dyn Fn(String) -> String>> = vec![
        Box::new(move |s: String| s + &suffix),
        Box::new(|s: String| s.to_uppercase()),
        Box::new(|s: String| s.trim().to_string()),
    ];
    let shout = compose_n(functions);
    assert_eq!(shout(String::from("  hello ")), "HELLO!");
}

#[test]
fn test_compose_n_from_iterator() {
    let composed = compose_n((1..=4).map(|step| move |x: i32| x * 10 + step));
    // steps applied 4, 3, 2, 1
    assert_eq!(composed(0), 4321);
}

// =============================================================================
// compose! macro
// =============================================================================

#[test]
fn test_compose_macro_matches_builders() {
    assert_eq!(compose!(mul_by3, sum_by2)(1), compose(mul_by3, sum_by2)(1));
    assert_eq!(
        compose!(sum_by2, mul_by3, sum_by2, mul_by3, sum_by2)(1),
        compose5(sum_by2, mul_by3, sum_by2, mul_by3, sum_by2)(1)
    );
}

#[test]
fn test_compose_macro_identity_laws() {
    assert_eq!(compose!(identity, mul_by3)(7), mul_by3(7));
    assert_eq!(compose!(mul_by3, identity)(7), mul_by3(7));
}

// =============================================================================
// Helper combinators
// =============================================================================

#[test]
fn test_constant_in_composition() {
    let always_zero = compose(constant::<i32, i32>(0), mul_by3);
    assert_eq!(always_zero(100), 0);
}

#[test]
fn test_flip_swaps_arguments() {
    let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), 7);
    assert_eq!(flip(flipped)(3, 10), -7);
}
