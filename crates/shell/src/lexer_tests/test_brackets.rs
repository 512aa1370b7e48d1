// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test bracket lexing: `[[ ... ]]` and its operator words.

use super::*;

scan_tests! {
    file_predicate: "[[ -d testdata ]]" => [
        TokenKind::BegTest, TokenKind::Blank, TokenKind::FileDir, TokenKind::Blank,
        lit!("testdata"), TokenKind::Blank, TokenKind::EndTest,
    ],
    numeric_comparison: "[[ $a -eq 2 ]]" => [
        TokenKind::BegTest, TokenKind::Blank, TokenKind::Variable("a".into()),
        TokenKind::Blank, TokenKind::Eq, TokenKind::Blank, lit!("2"),
        TokenKind::Blank, TokenKind::EndTest,
    ],
    file_times: "[[ a -nt b ]]" => [
        TokenKind::BegTest, TokenKind::Blank, lit!("a"), TokenKind::Blank,
        TokenKind::NewerThan, TokenKind::Blank, lit!("b"), TokenKind::Blank,
        TokenKind::EndTest,
    ],
    logical_operators: "[[ -e f && ! -d g ]]" => [
        TokenKind::BegTest, TokenKind::Blank, TokenKind::FileExists, TokenKind::Blank,
        lit!("f"), TokenKind::Blank, TokenKind::And, TokenKind::Blank, lit!("!"),
        TokenKind::Blank, TokenKind::FileDir, TokenKind::Blank, lit!("g"),
        TokenKind::Blank, TokenKind::EndTest,
    ],
    parenthesized_group: "[[ ( -z $x ) ]]" => [
        TokenKind::BegTest, TokenKind::Blank, TokenKind::BegSub, TokenKind::Blank,
        TokenKind::StrEmpty, TokenKind::Blank, TokenKind::Variable("x".into()),
        TokenKind::Blank, TokenKind::EndSub, TokenKind::Blank, TokenKind::EndTest,
    ],
    operator_words_outside_test_are_literal: "echo -d" => [
        lit!("echo"), TokenKind::Blank, lit!("-d"),
    ],
    brackets_mid_word_are_literal: "a[[b" => [lit!("a[[b")],
}
