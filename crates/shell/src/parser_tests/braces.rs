// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Brace expansion parsing.

use super::*;

fn brace_of(input: &str) -> Expander {
    let mut words = simple_words(parse_one(input));
    assert_eq!(words.len(), 2);
    words.remove(1)
}

#[test]
fn list_brace() {
    assert_eq!(
        brace_of("echo {a,b,c}"),
        Expander::ListBrace {
            prefix: None,
            suffix: None,
            words: vec![word("a"), word("b"), word("c")],
        }
    );
}

#[test]
fn list_brace_with_prefix_and_suffix() {
    assert_eq!(
        brace_of("echo img{1,2}.png"),
        Expander::ListBrace {
            prefix: Some(Box::new(word("img"))),
            suffix: Some(Box::new(word(".png"))),
            words: vec![word("1"), word("2")],
        }
    );
}

#[test]
fn range_brace() {
    assert_eq!(
        brace_of("echo {1..5}"),
        Expander::RangeBrace {
            prefix: None,
            suffix: None,
            from: 1,
            to: 5,
            step: 1,
            pad: 0,
        }
    );
}

#[test]
fn range_brace_with_step() {
    assert_eq!(
        brace_of("echo {10..1..3}"),
        Expander::RangeBrace {
            prefix: None,
            suffix: None,
            from: 10,
            to: 1,
            step: 3,
            pad: 0,
        }
    );
}

#[test]
fn zero_padded_range() {
    assert_eq!(
        brace_of("echo {01..10}"),
        Expander::RangeBrace {
            prefix: None,
            suffix: None,
            from: 1,
            to: 10,
            step: 1,
            pad: 2,
        }
    );
}

#[test]
fn nested_braces() {
    match brace_of("echo {{A,B},{1..3}}") {
        Expander::ListBrace { words, prefix: None, suffix: None } => {
            assert_eq!(words.len(), 2);
            assert!(matches!(words[0], Expander::ListBrace { .. }));
            assert!(matches!(words[1], Expander::RangeBrace { .. }));
        }
        other => panic!("expected a list brace, got {other:?}"),
    }
}

#[test]
fn adjacent_braces_nest_as_suffix() {
    match brace_of("echo {a,b}{1,2}") {
        Expander::ListBrace { suffix: Some(suffix), .. } => {
            assert!(matches!(*suffix, Expander::ListBrace { .. }));
        }
        other => panic!("expected a brace with a brace suffix, got {other:?}"),
    }
}

#[test]
fn empty_list_element_is_allowed() {
    assert_eq!(
        brace_of("echo {a,,b}"),
        Expander::ListBrace {
            prefix: None,
            suffix: None,
            words: vec![word("a"), word(""), word("b")],
        }
    );
}
