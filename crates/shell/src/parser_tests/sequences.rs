// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipelines, AND/OR chains, and statement separation.

use super::*;

#[test]
fn pipeline_is_left_flat() {
    match parse_one("a | b | c") {
        Executer::Pipe(pipe) => {
            assert_eq!(pipe.items.len(), 3);
            assert!(pipe.items.iter().all(|item| !item.both));
            assert_eq!(simple_words(pipe.items[0].exec.clone()), vec![word("a")]);
            assert_eq!(simple_words(pipe.items[2].exec.clone()), vec![word("c")]);
        }
        other => panic!("expected a pipeline, got {other:?}"),
    }
}

#[test]
fn pipe_both_marks_preceding_stage() {
    match parse_one("a |& b | c") {
        Executer::Pipe(pipe) => {
            assert!(pipe.items[0].both);
            assert!(!pipe.items[1].both);
            assert!(!pipe.items[2].both);
        }
        other => panic!("expected a pipeline, got {other:?}"),
    }
}

#[test]
fn and_or_are_right_associative() {
    // a && b && c  =>  And(a, And(b, c))
    match parse_one("a && b && c") {
        Executer::And { left, right } => {
            assert_eq!(simple_words(*left), vec![word("a")]);
            match *right {
                Executer::And { left, right } => {
                    assert_eq!(simple_words(*left), vec![word("b")]);
                    assert_eq!(simple_words(*right), vec![word("c")]);
                }
                other => panic!("expected nested And, got {other:?}"),
            }
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn and_or_chain_mixes() {
    match parse_one("true && echo ok || echo ko") {
        Executer::And { left, right } => {
            assert_eq!(simple_words(*left), vec![word("true")]);
            assert!(matches!(*right, Executer::Or { .. }));
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn pipe_binds_tighter_than_and() {
    match parse_one("a | b && c") {
        Executer::And { left, .. } => {
            assert!(matches!(*left, Executer::Pipe(_)));
        }
        other => panic!("expected And of a pipeline, got {other:?}"),
    }
}

#[test]
fn semicolons_split_statements() {
    let statements = Parser::parse("echo a; echo b").unwrap();
    assert_eq!(statements.len(), 2);
}

#[test]
fn newlines_split_statements() {
    let statements = Parser::parse("echo a\necho b\n").unwrap();
    assert_eq!(statements.len(), 2);
}

#[test]
fn comments_are_skipped() {
    let statements = Parser::parse("# leading\necho a # trailing\necho b").unwrap();
    assert_eq!(statements.len(), 2);
}

#[test]
fn statement_at_a_time() {
    let mut parser = Parser::new("echo a; echo b");
    assert!(parser.next_statement().unwrap().is_some());
    assert!(parser.next_statement().unwrap().is_some());
    assert!(parser.next_statement().unwrap().is_none());
}
