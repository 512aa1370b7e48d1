// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for command-tree spans and structure helpers.

use super::*;
use crate::parser::Parser;

fn parse_one(input: &str) -> Executer {
    let mut statements = Parser::parse(input).expect("parse");
    statements.remove(0)
}

#[test]
fn simple_span_covers_words() {
    let input = "echo hello";
    let executer = parse_one(input);
    assert_eq!(executer.span().slice(input), "echo hello");
}

#[test]
fn chain_span_covers_both_sides() {
    let input = "true && echo ok";
    let executer = parse_one(input);
    let span = executer.span();
    assert_eq!(span.start, 0);
    assert_eq!(span.slice(input), input);
}

#[test]
fn pipeline_span_covers_all_stages() {
    let input = "a | b | c";
    let executer = parse_one(input);
    assert_eq!(executer.span().slice(input), input);
}

#[test]
fn control_span_reaches_closing_keyword() {
    let input = "if true; then echo hi; fi";
    let executer = parse_one(input);
    assert_eq!(executer.span().slice(input), input);
}

#[test]
fn redirect_target_span() {
    let input = "echo hi > out.txt";
    match parse_one(input) {
        Executer::Simple(cmd) => {
            assert_eq!(cmd.redirects[0].span.slice(input), ">");
        }
        other => panic!("expected a simple command, got {other:?}"),
    }
}
