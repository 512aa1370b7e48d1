// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Brace expansion lexing: lists, ranges, nesting.

use super::*;

scan_tests! {
    list_brace: "{a,b}" => [
        TokenKind::BegBrace, lit!("a"), TokenKind::Seq, lit!("b"), TokenKind::EndBrace,
    ],
    range_brace: "{1..5}" => [
        TokenKind::BegBrace, lit!("1"), TokenKind::Range, lit!("5"), TokenKind::EndBrace,
    ],
    range_with_step: "{1..10..2}" => [
        TokenKind::BegBrace, lit!("1"), TokenKind::Range, lit!("10"),
        TokenKind::Range, lit!("2"), TokenKind::EndBrace,
    ],
    prefix_and_suffix: "a{b,c}d" => [
        lit!("a"), TokenKind::BegBrace, lit!("b"), TokenKind::Seq, lit!("c"),
        TokenKind::EndBrace, lit!("d"),
    ],
    nested_braces: "{{A,B},{1..3}}" => [
        TokenKind::BegBrace,
        TokenKind::BegBrace, lit!("A"), TokenKind::Seq, lit!("B"), TokenKind::EndBrace,
        TokenKind::Seq,
        TokenKind::BegBrace, lit!("1"), TokenKind::Range, lit!("3"), TokenKind::EndBrace,
        TokenKind::EndBrace,
    ],
    comma_outside_braces_is_literal: "a,b" => [lit!("a,b")],
    dots_outside_braces_are_literal: "a..b" => [lit!("a..b")],
    single_dot_inside_braces: "{a.b,c}" => [
        TokenKind::BegBrace, lit!("a.b"), TokenKind::Seq, lit!("c"), TokenKind::EndBrace,
    ],
}
