// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for token classification helpers.

use super::*;

#[test]
fn redirect_classification() {
    for kind in [
        TokenKind::RedirectIn,
        TokenKind::RedirectOut,
        TokenKind::RedirectErr,
        TokenKind::RedirectBoth,
        TokenKind::AppendOut,
        TokenKind::AppendErr,
        TokenKind::AppendBoth,
    ] {
        assert!(kind.is_redirect());
    }
    assert!(!TokenKind::Pipe.is_redirect());
}

#[test]
fn test_operator_classification() {
    assert!(TokenKind::FileDir.is_test_unary());
    assert!(TokenKind::StrEmpty.is_test_unary());
    assert!(!TokenKind::Eq.is_test_unary());

    assert!(TokenKind::Eq.is_test_binary());
    assert!(TokenKind::SameFile.is_test_binary());
    assert!(!TokenKind::FileDir.is_test_binary());
}

#[test]
fn identifier_validation() {
    assert!(is_identifier("foo"));
    assert!(is_identifier("_private"));
    assert!(is_identifier("a1_b2"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1abc"));
    assert!(!is_identifier("a-b"));
}

#[test]
fn keyword_set() {
    for word in ["for", "while", "until", "if", "then", "elif", "else", "fi", "do", "done", "in"] {
        assert!(is_keyword(word), "{word} must be a keyword");
    }
    assert!(!is_keyword("echo"));
    assert!(!is_keyword("forx"));
}

#[test]
fn display_is_quoted_for_operators() {
    assert_eq!(TokenKind::Pipe.to_string(), "'|'");
    assert_eq!(TokenKind::And.to_string(), "'&&'");
    assert_eq!(TokenKind::Literal("x".into()).to_string(), "literal 'x'");
    assert_eq!(TokenKind::Variable("x".into()).to_string(), "variable '$x'");
}
