// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error reporting.

use super::*;
use crate::error::ScanError;
use crate::parse_error::ParseError;

#[test]
fn trailing_pipe() {
    let err = Parser::parse("echo |").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }), "got {err:?}");
}

#[test]
fn trailing_and() {
    let err = Parser::parse("echo ok &&").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }), "got {err:?}");
}

#[test]
fn missing_then() {
    let err = Parser::parse("if true; echo hi; fi").unwrap_err();
    match err {
        ParseError::UnexpectedToken { expected, .. } => assert_eq!(expected, "'then'"),
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn unterminated_for() {
    let err = Parser::parse("for x in a; do echo $x").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }), "got {err:?}");
}

#[test]
fn scan_errors_surface() {
    let err = Parser::parse("echo ${foo").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Scan(ScanError::UnterminatedExpansion { .. })
    ));
}

#[test]
fn invalid_expansion_ident() {
    let err = Parser::parse("echo ${1bad}").unwrap_err();
    assert!(matches!(err, ParseError::BadExpansion { .. }), "got {err:?}");
}

#[test]
fn brace_range_requires_integers() {
    let err = Parser::parse("echo {a..z}").unwrap_err();
    assert!(matches!(err, ParseError::BadBrace { .. }), "got {err:?}");
}

#[test]
fn arithmetic_errors_carry_the_body_span() {
    let input = "echo $((1 ++))";
    let err = Parser::parse(input).unwrap_err();
    match err {
        ParseError::BadArithmetic { span, .. } => {
            assert_eq!(span.slice(input), "1 ++");
        }
        other => panic!("expected BadArithmetic, got {other:?}"),
    }
}

#[test]
fn missing_test_operator() {
    let err = Parser::parse("[[ a b ]]").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }), "got {err:?}");
}

#[test]
fn diagnostics_render() {
    let input = "echo ${foo";
    let err = Parser::parse(input).unwrap_err();
    let diagnostic = err.diagnostic(input).expect("error has a span");
    assert!(diagnostic.contains("error:"));
    assert!(diagnostic.contains("echo ${foo"));
}
