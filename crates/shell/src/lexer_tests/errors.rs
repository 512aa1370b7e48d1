// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner error classification and the Invalid token contract.

use super::*;

scan_error_tests! {
    bare_ampersand: "a & b" => ScanError::InvalidToken { .. },
    bare_open_paren: "(a)" => ScanError::InvalidToken { .. },
}

#[test]
fn invalid_token_carries_offending_text() {
    let mut scanner = Scanner::new("a & b");
    loop {
        let token = scanner.scan();
        match token.kind {
            TokenKind::Invalid(text) => {
                assert_eq!(text, "&");
                break;
            }
            TokenKind::Eof => panic!("expected an Invalid token before Eof"),
            _ => {}
        }
    }
    // Scanning stops at the invalid token.
    assert!(matches!(scanner.scan().kind, TokenKind::Eof));
}

#[test]
fn take_error_classifies_invalid() {
    let mut scanner = Scanner::new("'oops");
    loop {
        if matches!(scanner.scan().kind, TokenKind::Invalid(_) | TokenKind::Eof) {
            break;
        }
    }
    let err = scanner.take_error().expect("classified error");
    assert!(matches!(err, ScanError::UnterminatedQuote { .. }));
}

#[test]
fn diagnostic_points_at_offending_column() {
    let input = "echo ${foo";
    let err = Scanner::tokenize(input).unwrap_err();
    let diagnostic = err.diagnostic(input);
    assert!(diagnostic.contains("line 1"));
    assert!(diagnostic.contains('^'));
}
