// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable resolution and the parameter operators.

use super::*;
use crate::exec::ExecError;

#[tokio::test]
async fn unquoted_variable_keeps_words() {
    let expander = Expander::Variable { ident: "v".into(), quoted: false };
    assert_eq!(
        expand_with(&expander, &[("v", &["a", "b"])]).await,
        vec!["a", "b"]
    );
}

#[tokio::test]
async fn quoted_variable_joins_with_space() {
    let expander = Expander::Variable { ident: "v".into(), quoted: true };
    assert_eq!(
        expand_with(&expander, &[("v", &["a", "b"])]).await,
        vec!["a b"]
    );
}

#[tokio::test]
async fn undefined_variable_is_an_error() {
    let mut shell = Shell::new();
    let expander = Expander::Variable { ident: "ghost".into(), quoted: false };
    let err = expander.expand(&mut shell).await.unwrap_err();
    assert!(matches!(err, ExecError::Expansion { .. }));
}

#[tokio::test]
async fn length_sums_byte_lengths() {
    let expander = Expander::Length { ident: "v".into() };
    assert_eq!(expand_with(&expander, &[("v", &["foo"])]).await, vec!["3"]);
    assert_eq!(
        expand_with(&expander, &[("v", &["ab", "cde"])]).await,
        vec!["5"]
    );
}

#[yare::parameterized(
    from_start = { 0, Some(3), "hel" },
    middle = { 1, Some(4), "ell" },
    from_only = { 2, None, "llo" },
    negative_from = { -3, None, "llo" },
    negative_to = { 0, Some(-1), "hell" },
    clamp_large_to = { 2, Some(99), "llo" },
    inverted_is_empty = { 4, Some(2), "" },
    out_of_range_is_empty = { 99, None, "" },
)]
fn slice_cases(from: i64, to: Option<i64>, expected: &str) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    runtime.block_on(async {
        let expander = Expander::Slice { ident: "v".into(), from, to };
        assert_eq!(
            expand_with(&expander, &[("v", &["hello"])]).await,
            vec![expected]
        );
    });
}

#[tokio::test]
async fn slice_applies_to_each_value() {
    let expander = Expander::Slice { ident: "v".into(), from: 0, to: Some(1) };
    assert_eq!(
        expand_with(&expander, &[("v", &["abc", "xyz"])]).await,
        vec!["a", "x"]
    );
}

#[tokio::test]
async fn replace_first_and_all() {
    let first = Expander::Replace {
        ident: "v".into(),
        from: "o".into(),
        to: "0".into(),
        what: ReplaceMode::First,
    };
    let all = Expander::Replace {
        ident: "v".into(),
        from: "o".into(),
        to: "0".into(),
        what: ReplaceMode::All,
    };
    assert_eq!(
        expand_with(&first, &[("v", &["foobor"])]).await,
        vec!["f0obor"]
    );
    assert_eq!(
        expand_with(&all, &[("v", &["foobor"])]).await,
        vec!["f00b0r"]
    );
}

#[tokio::test]
async fn replace_anchored_forms() {
    let prefix = Expander::Replace {
        ident: "v".into(),
        from: "ab".into(),
        to: "X".into(),
        what: ReplaceMode::Prefix,
    };
    let suffix = Expander::Replace {
        ident: "v".into(),
        from: "ab".into(),
        to: "X".into(),
        what: ReplaceMode::Suffix,
    };
    assert_eq!(
        expand_with(&prefix, &[("v", &["abcab"])]).await,
        vec!["Xcab"]
    );
    assert_eq!(
        expand_with(&suffix, &[("v", &["abcab"])]).await,
        vec!["abcX"]
    );
}

#[tokio::test]
async fn replace_without_occurrence_is_identity() {
    let expander = Expander::Replace {
        ident: "v".into(),
        from: "zzz".into(),
        to: "x".into(),
        what: ReplaceMode::All,
    };
    assert_eq!(
        expand_with(&expander, &[("v", &["unchanged"])]).await,
        vec!["unchanged"]
    );
}

#[yare::parameterized(
    suffix_short = { TrimMode::Suffix, ".*", "archive.tar" },
    suffix_long = { TrimMode::SuffixLong, ".*", "archive" },
    prefix_short = { TrimMode::Prefix, "*.", "tar.gz" },
    prefix_long = { TrimMode::PrefixLong, "*.", "gz" },
)]
fn trim_cases(mode: TrimMode, pattern: &str, expected: &str) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    runtime.block_on(async {
        let expander = Expander::Trim {
            ident: "v".into(),
            pattern: pattern.into(),
            what: mode,
        };
        assert_eq!(
            expand_with(&expander, &[("v", &["archive.tar.gz"])]).await,
            vec![expected]
        );
    });
}

#[tokio::test]
async fn trim_without_match_is_identity() {
    let expander = Expander::Trim {
        ident: "v".into(),
        pattern: "xyz".into(),
        what: TrimMode::Suffix,
    };
    assert_eq!(
        expand_with(&expander, &[("v", &["value"])]).await,
        vec!["value"]
    );
}

#[tokio::test]
async fn case_folding() {
    let lower_all = Expander::Lower { ident: "v".into(), all: true };
    let lower_first = Expander::Lower { ident: "v".into(), all: false };
    let upper_all = Expander::Upper { ident: "v".into(), all: true };
    let upper_first = Expander::Upper { ident: "v".into(), all: false };

    assert_eq!(expand_with(&lower_all, &[("v", &["HeLLo"])]).await, vec!["hello"]);
    assert_eq!(expand_with(&lower_first, &[("v", &["HeLLo"])]).await, vec!["heLLo"]);
    assert_eq!(expand_with(&upper_all, &[("v", &["hello"])]).await, vec!["HELLO"]);
    assert_eq!(expand_with(&upper_first, &[("v", &["hello"])]).await, vec!["Hello"]);
}

#[tokio::test]
async fn padding() {
    let left = Expander::Pad { ident: "v".into(), width: 5, fill: '0', left: true };
    let right = Expander::Pad { ident: "v".into(), width: 5, fill: '.', left: false };
    let wide = Expander::Pad { ident: "v".into(), width: 2, fill: '0', left: true };

    assert_eq!(expand_with(&left, &[("v", &["42"])]).await, vec!["00042"]);
    assert_eq!(expand_with(&right, &[("v", &["42"])]).await, vec!["42..."]);
    assert_eq!(expand_with(&wide, &[("v", &["12345"])]).await, vec!["12345"]);
}

#[tokio::test]
async fn conditional_operators() {
    let if_unset = Expander::ValIfUnset { ident: "v".into(), value: "fb".into() };
    assert_eq!(expand(&if_unset).await, vec!["fb"]);
    assert_eq!(expand_with(&if_unset, &[("v", &["set"])]).await, vec!["set"]);

    let if_set = Expander::ValIfSet { ident: "v".into(), value: "alt".into() };
    assert_eq!(expand(&if_set).await, Vec::<String>::new());
    assert_eq!(expand_with(&if_set, &[("v", &["set"])]).await, vec!["alt"]);
}

#[tokio::test]
async fn set_val_if_unset_writes_the_environment() {
    let mut shell = Shell::new();
    let expander = Expander::SetValIfUnset { ident: "fresh".into(), value: "init".into() };
    assert_eq!(expander.expand(&mut shell).await.expect("expand"), vec!["init"]);
    assert_eq!(shell.resolve("fresh"), Some(vec!["init".to_string()]));

    // A second expansion sees the stored value.
    shell.define("fresh", vec!["kept".into()]).expect("define");
    assert_eq!(expander.expand(&mut shell).await.expect("expand"), vec!["kept"]);
}

#[tokio::test]
async fn exit_if_unset_carries_the_message() {
    let mut shell = Shell::new();
    let expander = Expander::ExitIfUnset {
        ident: "required".into(),
        message: "required is not set".into(),
    };
    let err = expander.expand(&mut shell).await.unwrap_err();
    match err {
        ExecError::Unset { name, message } => {
            assert_eq!(name, "required");
            assert_eq!(message, "required is not set");
        }
        other => panic!("expected Unset, got {other:?}"),
    }
}
