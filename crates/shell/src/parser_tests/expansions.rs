// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter expansions, command substitution, and arithmetic words.

use super::*;
use crate::expand::{ReplaceMode, TrimMode};

fn expansion_of(input: &str) -> Expander {
    let mut words = simple_words(parse_one(input));
    assert_eq!(words.len(), 2, "expected `echo <word>` in {input:?}");
    words.remove(1)
}

#[test]
fn braced_variable() {
    assert_eq!(
        expansion_of("echo ${x}"),
        Expander::Variable { ident: "x".into(), quoted: false }
    );
}

#[test]
fn length() {
    assert_eq!(expansion_of("echo ${#x}"), Expander::Length { ident: "x".into() });
}

#[test]
fn val_if_unset() {
    assert_eq!(
        expansion_of("echo ${x:-fallback}"),
        Expander::ValIfUnset { ident: "x".into(), value: "fallback".into() }
    );
}

#[test]
fn set_val_if_unset() {
    assert_eq!(
        expansion_of("echo ${x:=init}"),
        Expander::SetValIfUnset { ident: "x".into(), value: "init".into() }
    );
}

#[test]
fn val_if_set() {
    assert_eq!(
        expansion_of("echo ${x:+present}"),
        Expander::ValIfSet { ident: "x".into(), value: "present".into() }
    );
}

#[test]
fn exit_if_unset() {
    assert_eq!(
        expansion_of("echo ${x:?x is required}"),
        Expander::ExitIfUnset { ident: "x".into(), message: "x is required".into() }
    );
}

#[test]
fn slice_with_from_and_to() {
    assert_eq!(
        expansion_of("echo ${x:1:3}"),
        Expander::Slice { ident: "x".into(), from: 1, to: Some(3) }
    );
}

#[test]
fn slice_from_only() {
    assert_eq!(
        expansion_of("echo ${x:2}"),
        Expander::Slice { ident: "x".into(), from: 2, to: None }
    );
}

#[test]
fn slice_negative_from() {
    assert_eq!(
        expansion_of("echo ${x: -2}"),
        Expander::Slice { ident: "x".into(), from: -2, to: None }
    );
}

#[yare::parameterized(
    first = { "echo ${x/a/b}", ReplaceMode::First },
    all = { "echo ${x//a/b}", ReplaceMode::All },
    prefix = { "echo ${x/#a/b}", ReplaceMode::Prefix },
    suffix = { "echo ${x/%a/b}", ReplaceMode::Suffix },
)]
fn replace_modes(input: &str, mode: ReplaceMode) {
    assert_eq!(
        expansion_of(input),
        Expander::Replace {
            ident: "x".into(),
            from: "a".into(),
            to: "b".into(),
            what: mode,
        }
    );
}

#[yare::parameterized(
    suffix = { "echo ${x%.txt}", TrimMode::Suffix },
    suffix_long = { "echo ${x%%.txt}", TrimMode::SuffixLong },
    prefix = { "echo ${x#.txt}", TrimMode::Prefix },
    prefix_long = { "echo ${x##.txt}", TrimMode::PrefixLong },
)]
fn trim_modes(input: &str, mode: TrimMode) {
    assert_eq!(
        expansion_of(input),
        Expander::Trim {
            ident: "x".into(),
            pattern: ".txt".into(),
            what: mode,
        }
    );
}

#[test]
fn case_operators() {
    assert_eq!(
        expansion_of("echo ${x,,}"),
        Expander::Lower { ident: "x".into(), all: true }
    );
    assert_eq!(
        expansion_of("echo ${x^}"),
        Expander::Upper { ident: "x".into(), all: false }
    );
}

#[test]
fn pad_operators() {
    assert_eq!(
        expansion_of("echo ${x<8}"),
        Expander::Pad { ident: "x".into(), width: 8, fill: ' ', left: true }
    );
    assert_eq!(
        expansion_of("echo ${x>4:0}"),
        Expander::Pad { ident: "x".into(), width: 4, fill: '0', left: false }
    );
}

#[test]
fn command_substitution() {
    assert_eq!(
        expansion_of("echo $(date)"),
        Expander::List { parts: vec![word("date")], sub: true }
    );
}

#[test]
fn substitution_with_arguments() {
    assert_eq!(
        expansion_of("echo $(basename $path)"),
        Expander::List {
            parts: vec![
                word("basename"),
                Expander::Variable { ident: "path".into(), quoted: false },
            ],
            sub: true,
        }
    );
}

#[test]
fn arithmetic_word() {
    match expansion_of("echo $((1 + 2))") {
        Expander::Arith(_) => {}
        other => panic!("expected an arithmetic expander, got {other:?}"),
    }
}

#[test]
fn substitution_concatenates_in_words() {
    match expansion_of("echo v$(ver)!") {
        Expander::Multi(parts) => {
            assert_eq!(parts.len(), 3);
            assert!(matches!(parts[1], Expander::List { sub: true, .. }));
        }
        other => panic!("expected a Multi, got {other:?}"),
    }
}
