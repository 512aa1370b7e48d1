// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control structures: for, while, until, if.

use super::*;

#[test]
fn for_loop() {
    match parse_one("for x in a b c; do echo $x; done") {
        Executer::For(for_loop) => {
            assert_eq!(for_loop.ident, "x");
            assert_eq!(for_loop.iter, vec![word("a"), word("b"), word("c")]);
            assert_eq!(for_loop.body.len(), 1);
            assert!(for_loop.alt.is_empty());
        }
        other => panic!("expected a for loop, got {other:?}"),
    }
}

#[test]
fn for_loop_with_else_branch() {
    match parse_one("for x in $missing; do use $x; else echo none; done") {
        Executer::For(for_loop) => {
            assert_eq!(for_loop.body.len(), 1);
            assert_eq!(for_loop.alt.len(), 1);
        }
        other => panic!("expected a for loop, got {other:?}"),
    }
}

#[test]
fn for_loop_iterates_expansions() {
    match parse_one("for f in {1..3}; do echo $f; done") {
        Executer::For(for_loop) => {
            assert_eq!(for_loop.iter.len(), 1);
            assert!(matches!(for_loop.iter[0], Expander::RangeBrace { .. }));
        }
        other => panic!("expected a for loop, got {other:?}"),
    }
}

#[test]
fn while_loop() {
    match parse_one("while true; do work; done") {
        Executer::While(cond_loop) => {
            assert_eq!(simple_words(*cond_loop.cond), vec![word("true")]);
            assert_eq!(cond_loop.body.len(), 1);
        }
        other => panic!("expected a while loop, got {other:?}"),
    }
}

#[test]
fn until_loop() {
    assert!(matches!(
        parse_one("until false; do work; done"),
        Executer::Until(_)
    ));
}

#[test]
fn if_without_else() {
    match parse_one("if true; then echo yes; fi") {
        Executer::If(conditional) => {
            assert_eq!(conditional.then.len(), 1);
            assert!(conditional.alt.is_empty());
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn if_with_else() {
    match parse_one("if true; then echo yes; else echo no; fi") {
        Executer::If(conditional) => {
            assert_eq!(conditional.then.len(), 1);
            assert_eq!(conditional.alt.len(), 1);
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn elif_nests_in_alt() {
    match parse_one("if a; then b; elif c; then d; else e; fi") {
        Executer::If(conditional) => {
            assert_eq!(conditional.alt.len(), 1);
            match &conditional.alt[0] {
                Executer::If(nested) => {
                    assert_eq!(nested.then.len(), 1);
                    assert_eq!(nested.alt.len(), 1);
                }
                other => panic!("expected a nested conditional, got {other:?}"),
            }
        }
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn multiline_bodies() {
    let source = "for x in a b; do\n  echo $x\n  echo again\ndone";
    match parse_one(source) {
        Executer::For(for_loop) => assert_eq!(for_loop.body.len(), 2),
        other => panic!("expected a for loop, got {other:?}"),
    }
}

#[test]
fn control_composes_with_and() {
    assert!(matches!(
        parse_one("if true; then a; fi && echo done_ok"),
        Executer::And { .. }
    ));
}

#[test]
fn test_condition_in_while() {
    match parse_one("while [[ -e lock ]]; do wait_more; done") {
        Executer::While(cond_loop) => {
            assert!(matches!(*cond_loop.cond, Executer::Test(_)));
        }
        other => panic!("expected a while loop, got {other:?}"),
    }
}
