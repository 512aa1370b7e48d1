// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter expansion operator lexing inside `${...}`.

use super::*;

scan_tests! {
    plain_variable: "$foo" => [TokenKind::Variable("foo".into())],
    variable_stops_at_nonword: "$foo-bar" => [
        TokenKind::Variable("foo".into()), lit!("-bar"),
    ],
    braced_variable: "${foo}" => [TokenKind::BegExp, lit!("foo"), TokenKind::EndExp],
    length: "${#foo}" => [
        TokenKind::BegExp, TokenKind::Length, lit!("foo"), TokenKind::EndExp,
    ],
    val_if_unset: "${foo:-bar}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ValIfUnset, lit!("bar"),
        TokenKind::EndExp,
    ],
    set_val_if_unset: "${foo:=bar}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::SetValIfUnset, lit!("bar"),
        TokenKind::EndExp,
    ],
    val_if_set: "${foo:+bar}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ValIfSet, lit!("bar"),
        TokenKind::EndExp,
    ],
    exit_if_unset: "${foo:?missing}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ExitIfUnset, lit!("missing"),
        TokenKind::EndExp,
    ],
    slice: "${foo:1:2}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::Slice, lit!("1"),
        TokenKind::Slice, lit!("2"), TokenKind::EndExp,
    ],
    replace_first: "${foo/a/b}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::Replace, lit!("a"),
        TokenKind::Replace, lit!("b"), TokenKind::EndExp,
    ],
    replace_all: "${foo//a/b}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ReplaceAll, lit!("a"),
        TokenKind::Replace, lit!("b"), TokenKind::EndExp,
    ],
    replace_prefix: "${foo/#a/b}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ReplacePrefix, lit!("a"),
        TokenKind::Replace, lit!("b"), TokenKind::EndExp,
    ],
    replace_suffix: "${foo/%a/b}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ReplaceSuffix, lit!("a"),
        TokenKind::Replace, lit!("b"), TokenKind::EndExp,
    ],
    trim_suffix: "${foo%.txt}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::TrimSuffix, lit!(".txt"),
        TokenKind::EndExp,
    ],
    trim_suffix_long: "${foo%%.txt}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::TrimSuffixLong, lit!(".txt"),
        TokenKind::EndExp,
    ],
    trim_prefix: "${foo#ab}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::TrimPrefix, lit!("ab"),
        TokenKind::EndExp,
    ],
    trim_prefix_long: "${foo##ab}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::TrimPrefixLong, lit!("ab"),
        TokenKind::EndExp,
    ],
    lower_first: "${foo,}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::Lower, TokenKind::EndExp,
    ],
    lower_all: "${foo,,}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::LowerAll, TokenKind::EndExp,
    ],
    upper_first: "${foo^}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::Upper, TokenKind::EndExp,
    ],
    upper_all: "${foo^^}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::UpperAll, TokenKind::EndExp,
    ],
    pad_left: "${foo<8}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::PadLeft, lit!("8"),
        TokenKind::EndExp,
    ],
    pad_right: "${foo>8:.}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::PadRight, lit!("8"),
        TokenKind::Slice, lit!("."), TokenKind::EndExp,
    ],
    operand_keeps_raw_dollar: "${foo:-$bar}" => [
        TokenKind::BegExp, lit!("foo"), TokenKind::ValIfUnset, lit!("$bar"),
        TokenKind::EndExp,
    ],
    positional_parameters: "echo $0 $12" => [
        lit!("echo"), TokenKind::Blank, TokenKind::Variable("0".into()),
        TokenKind::Blank, TokenKind::Variable("12".into()),
    ],
    count_and_status: "$# $?" => [
        TokenKind::Variable("#".into()), TokenKind::Blank,
        TokenKind::Variable("?".into()),
    ],
    command_substitution: "$(echo hi)" => [
        TokenKind::BegSub, lit!("echo"), TokenKind::Blank, lit!("hi"),
        TokenKind::EndSub,
    ],
}

scan_error_tests! {
    unterminated_expansion: "${foo" => ScanError::UnterminatedExpansion { .. },
    bare_dollar: "$ x" => ScanError::EmptyVariable { .. },
    dollar_at_eof: "$" => ScanError::EmptyVariable { .. },
}
