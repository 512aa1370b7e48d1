// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words, blanks, separators, comments, and keywords.

use super::*;

scan_tests! {
    empty_input: "" => [],
    single_word: "echo" => [lit!("echo")],
    two_words: "echo hello" => [lit!("echo"), TokenKind::Blank, lit!("hello")],
    blanks_collapse: "a   \t b" => [lit!("a"), TokenKind::Blank, lit!("b")],
    list_separator: "a; b" => [lit!("a"), TokenKind::List, TokenKind::Blank, lit!("b")],
    newline_separates: "a\nb" => [lit!("a"), TokenKind::List, lit!("b")],
    crlf_separates: "a\r\nb" => [lit!("a"), TokenKind::List, lit!("b")],
    assignment: "a=b" => [lit!("a"), TokenKind::Assign, lit!("b")],
    assignment_in_word_position: "echo a=b" => [
        lit!("echo"), TokenKind::Blank, lit!("a"), TokenKind::Assign, lit!("b"),
    ],
    bare_equals_is_literal: "= a" => [lit!("="), TokenKind::Blank, lit!("a")],
    comment_full_line: "#hello" => [TokenKind::Comment("hello".into())],
    comment_after_command: "echo hi # trailing" => [
        lit!("echo"), TokenKind::Blank, lit!("hi"), TokenKind::Blank,
        TokenKind::Comment("trailing".into()),
    ],
    hash_inside_word: "echo a#b" => [lit!("echo"), TokenKind::Blank, lit!("a#b")],
    escaped_space: "a\\ b" => [lit!("a b")],
    escaped_semicolon: "a\\;b" => [lit!("a;b")],
    keyword_for: "for x in a; do b; done" => [
        kw!("for"), TokenKind::Blank, lit!("x"), TokenKind::Blank, kw!("in"),
        TokenKind::Blank, lit!("a"), TokenKind::List, TokenKind::Blank, kw!("do"),
        TokenKind::Blank, lit!("b"), TokenKind::List, TokenKind::Blank, kw!("done"),
    ],
    keyword_needs_word_boundary: "form" => [lit!("form")],
    keyword_in_argument_position: "echo for" => [
        lit!("echo"), TokenKind::Blank, kw!("for"),
    ],
}

#[test]
fn eof_repeats_after_exhaustion() {
    let mut scanner = Scanner::new("echo");
    assert!(matches!(scanner.scan().kind, TokenKind::Literal(_)));
    assert!(matches!(scanner.scan().kind, TokenKind::Eof));
    assert!(matches!(scanner.scan().kind, TokenKind::Eof));
}

#[test]
fn spans_cover_words() {
    let tokens = Scanner::tokenize("echo hello").unwrap();
    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 4));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (5, 10));
}

#[test]
fn sequence_tokens_match_invariant() {
    let sequences = [
        TokenKind::And,
        TokenKind::Or,
        TokenKind::List,
        TokenKind::Pipe,
        TokenKind::PipeBoth,
        TokenKind::Comment(String::new()),
        TokenKind::EndSub,
    ];
    for kind in &sequences {
        assert!(kind.is_sequence(), "{kind} must be a sequence token");
    }
    for kind in [
        TokenKind::Blank,
        TokenKind::Quote,
        TokenKind::Assign,
        TokenKind::BegSub,
        TokenKind::Eof,
        lit!("x"),
    ] {
        assert!(!kind.is_sequence(), "{kind} must not be a sequence token");
    }
}
