// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for scanner error rendering.

use super::*;

#[test]
fn message_includes_position() {
    let err = ScanError::UnterminatedQuote { span: Span::new(5, 9) };
    assert_eq!(err.to_string(), "unterminated single quote at position 5");
}

#[test]
fn span_accessor_matches_variant() {
    let span = Span::new(3, 4);
    let err = ScanError::InvalidToken { text: "&".into(), span };
    assert_eq!(err.span(), span);
}

#[test]
fn context_renders_caret() {
    let input = "echo 'oops";
    let err = ScanError::UnterminatedQuote { span: Span::new(5, 10) };
    let context = err.context(input);
    assert!(context.starts_with("echo 'oops"));
    assert!(context.contains('^'));
}
