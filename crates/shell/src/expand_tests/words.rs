// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word, Multi, List, and field splitting.

use super::*;

#[tokio::test]
async fn word_expands_to_itself() {
    assert_eq!(expand(&word("plain")).await, vec!["plain"]);
    assert_eq!(expand(&word("")).await, vec![""]);
}

#[tokio::test]
async fn multi_concatenates_single_values() {
    let multi = Expander::Multi(vec![word("a"), word("b"), word("c")]);
    assert_eq!(expand(&multi).await, vec!["abc"]);
}

#[tokio::test]
async fn multi_distributes_over_lists() {
    let multi = Expander::Multi(vec![
        word("x"),
        Expander::Variable { ident: "pair".into(), quoted: false },
    ]);
    assert_eq!(
        expand_with(&multi, &[("pair", &["1", "2"])]).await,
        vec!["x1", "x2"]
    );
}

#[tokio::test]
async fn multi_skips_empty_expansions() {
    let multi = Expander::Multi(vec![
        word("keep"),
        Expander::ValIfSet { ident: "unset".into(), value: "never".into() },
    ]);
    assert_eq!(expand(&multi).await, vec!["keep"]);
}

#[tokio::test]
async fn list_concatenates_words() {
    let list = Expander::List {
        parts: vec![
            word("a"),
            Expander::Variable { ident: "more".into(), quoted: false },
        ],
        sub: false,
    };
    assert_eq!(
        expand_with(&list, &[("more", &["b", "c"])]).await,
        vec!["a", "b", "c"]
    );
}

#[test]
fn split_fields_on_default_ifs() {
    assert_eq!(
        split_fields("a b\tc\nd", " \t\n"),
        vec!["a", "b", "c", "d"]
    );
    assert_eq!(split_fields("  padded  ", " \t\n"), vec!["padded"]);
    assert_eq!(split_fields("", " \t\n"), Vec::<String>::new());
}

#[test]
fn split_fields_with_custom_ifs() {
    assert_eq!(split_fields("a:b::c", ":"), vec!["a", "b", "c"]);
}

#[test]
fn split_fields_with_empty_ifs_keeps_text_whole() {
    assert_eq!(split_fields("a b c", ""), vec!["a b c"]);
}

#[test]
fn numbers_render_without_trailing_decimals() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(-17.0), "-17");
    assert_eq!(format_number(2.5), "2.5");
}
