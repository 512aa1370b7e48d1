// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands, assignments, words, and redirections.

use super::*;

#[test]
fn bare_command() {
    let words = simple_words(parse_one("echo foobar"));
    assert_eq!(words, vec![word("echo"), word("foobar")]);
}

#[test]
fn assignment() {
    match parse_one("foobar=foo") {
        Executer::Assign(assign) => {
            assert_eq!(assign.ident, "foobar");
            assert_eq!(assign.words, vec![word("foo")]);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn assignment_with_quoted_value() {
    match parse_one("foobar=\"foo\"") {
        Executer::Assign(assign) => {
            assert_eq!(assign.ident, "foobar");
            assert_eq!(assign.words, vec![word("foo")]);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn assignment_collects_all_value_words() {
    match parse_one("list=a b c") {
        Executer::Assign(assign) => {
            assert_eq!(assign.words, vec![word("a"), word("b"), word("c")]);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn equals_mid_statement_stays_a_word() {
    let words = simple_words(parse_one("echo a=b"));
    assert_eq!(
        words,
        vec![
            word("echo"),
            Expander::Multi(vec![word("a"), word("="), word("b")]),
        ]
    );
}

#[test]
fn variable_word() {
    let words = simple_words(parse_one("echo $x"));
    assert_eq!(
        words,
        vec![
            word("echo"),
            Expander::Variable { ident: "x".into(), quoted: false },
        ]
    );
}

#[test]
fn quoted_variable_word() {
    let words = simple_words(parse_one("echo \"$x\""));
    assert_eq!(
        words,
        vec![
            word("echo"),
            Expander::Variable { ident: "x".into(), quoted: true },
        ]
    );
}

#[test]
fn adjacent_fragments_merge() {
    let words = simple_words(parse_one("echo pre$x.post"));
    assert_eq!(
        words,
        vec![
            word("echo"),
            Expander::Multi(vec![
                word("pre"),
                Expander::Variable { ident: "x".into(), quoted: false },
                word(".post"),
            ]),
        ]
    );
}

#[test]
fn empty_quotes_form_an_empty_word() {
    let words = simple_words(parse_one("echo \"\""));
    assert_eq!(words, vec![word("echo"), word("")]);
}

#[test]
fn keyword_in_argument_position_is_a_word() {
    let words = simple_words(parse_one("echo for"));
    assert_eq!(words, vec![word("echo"), word("for")]);
}

#[test]
fn redirect_out() {
    match parse_one("echo hi > out.txt") {
        Executer::Simple(cmd) => {
            assert_eq!(cmd.words, vec![word("echo"), word("hi")]);
            assert_eq!(cmd.redirects.len(), 1);
            assert_eq!(cmd.redirects[0].kind, RedirectKind::Out);
            assert_eq!(cmd.redirects[0].target, word("out.txt"));
        }
        other => panic!("expected a simple command, got {other:?}"),
    }
}

#[yare::parameterized(
    input = { "cat < in.txt", RedirectKind::In },
    append = { "log >> file", RedirectKind::AppendOut },
    errs = { "cmd 2> errs", RedirectKind::Err },
    both_append = { "cmd &>> all", RedirectKind::AppendBoth },
)]
fn redirect_kinds(input: &str, kind: RedirectKind) {
    match parse_one(input) {
        Executer::Simple(cmd) => {
            assert_eq!(cmd.redirects.len(), 1);
            assert_eq!(cmd.redirects[0].kind, kind);
        }
        other => panic!("expected a simple command, got {other:?}"),
    }
}
