// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the arithmetic sub-language.

use super::*;
use crate::env::Environment;

fn eval(body: &str) -> f64 {
    let expr = parse(body).unwrap_or_else(|err| panic!("parse failed for {body:?}: {err}"));
    expr.eval(&Environment::new())
        .unwrap_or_else(|err| panic!("eval failed for {body:?}: {err}"))
}

fn eval_with(body: &str, vars: &[(&str, &str)]) -> f64 {
    let mut env = Environment::new();
    for (name, value) in vars {
        env.define(name, vec![value.to_string()]).expect("define");
    }
    let expr = parse(body).expect("parse");
    expr.eval(&env).expect("eval")
}

#[yare::parameterized(
    addition = { "1 + 2", 3.0 },
    precedence = { "1 + 2 * 3", 7.0 },
    parens = { "(1 + 2) * 3", 9.0 },
    subtraction = { "10 - 4 - 3", 3.0 },
    division = { "7 / 2", 3.5 },
    modulo = { "7 % 3", 1.0 },
    power = { "2 ** 10", 1024.0 },
    power_right_assoc = { "2 ** 3 ** 2", 512.0 },
    unary_minus = { "-3 + 5", 2.0 },
    not_zero = { "!0", 1.0 },
    not_nonzero = { "!7", 0.0 },
    bitnot = { "~0", -1.0 },
    comparison = { "3 < 5", 1.0 },
    equality = { "3 == 3", 1.0 },
    inequality = { "3 != 3", 0.0 },
    logic_and = { "1 && 2", 1.0 },
    logic_and_short = { "0 && 2", 0.0 },
    logic_or = { "0 || 3", 1.0 },
    bit_and = { "6 & 3", 2.0 },
    bit_or = { "6 | 3", 7.0 },
    bit_xor = { "6 ^ 3", 5.0 },
    shift_left = { "1 << 4", 16.0 },
    shift_right = { "16 >> 2", 4.0 },
    negative_shift_is_zero = { "-1 << 3", 0.0 },
    ternary_true = { "1 ? 10 : 20", 10.0 },
    ternary_false = { "0 ? 10 : 20", 20.0 },
    increment = { "++4", 5.0 },
    decrement = { "--4", 3.0 },
    float_literal = { "1.5 * 2", 3.0 },
)]
fn evaluates(body: &str, expected: f64) {
    assert_eq!(eval(body), expected, "body: {body:?}");
}

#[test]
fn number_round_trip() {
    for n in [-17.0, 0.0, 1.0, 42.0, 12345.0] {
        assert_eq!(eval(&format!("{n}")), n);
    }
}

#[test]
fn variables_resolve_from_env() {
    assert_eq!(eval_with("x + 0", &[("x", "42")]), 42.0);
    assert_eq!(eval_with("x * y", &[("x", "6"), ("y", "7")]), 42.0);
}

#[test]
fn unset_variables_are_zero() {
    assert_eq!(eval("nope + 1"), 1.0);
}

#[test]
fn empty_variables_are_zero() {
    assert_eq!(eval_with("x + 1", &[("x", "")]), 1.0);
}

#[test]
fn division_by_zero() {
    let expr = parse("1 / 0").expect("parse");
    let err = expr.eval(&Environment::new()).unwrap_err();
    assert!(matches!(err, crate::exec::ExecError::Zero));
}

#[test]
fn modulo_by_zero() {
    let expr = parse("5 % 0").expect("parse");
    let err = expr.eval(&Environment::new()).unwrap_err();
    assert!(matches!(err, crate::exec::ExecError::Zero));
}

#[test]
fn non_numeric_variable_fails() {
    let mut env = Environment::new();
    env.define("x", vec!["abc".to_string()]).expect("define");
    let expr = parse("x + 1").expect("parse");
    assert!(expr.eval(&env).is_err());
}

#[test]
fn ternary_nests_right() {
    // 1 ? 2 : 0 ? 3 : 4  => 2 ; 0 ? 2 : 1 ? 3 : 4 => 3
    assert_eq!(eval("1 ? 2 : 0 ? 3 : 4"), 2.0);
    assert_eq!(eval("0 ? 2 : 1 ? 3 : 4"), 3.0);
}

#[yare::parameterized(
    empty = { "" },
    dangling_operator = { "1 +" },
    unbalanced_paren = { "(1 + 2" },
    missing_colon = { "1 ? 2" },
    stray_char = { "1 @ 2" },
)]
fn parse_failures(body: &str) {
    assert!(parse(body).is_err(), "expected parse failure for {body:?}");
}
