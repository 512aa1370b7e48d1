// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for span arithmetic and diagnostics.

use super::*;

#[test]
fn merge_covers_both() {
    let a = Span::new(2, 5);
    let b = Span::new(8, 12);
    assert_eq!(a.merge(b), Span::new(2, 12));
    assert_eq!(b.merge(a), Span::new(2, 12));
}

#[test]
fn slice_extracts_text() {
    let source = "echo hello";
    assert_eq!(Span::new(5, 10).slice(source), "hello");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(5, 50).slice("abc"), "");
}

#[test]
fn empty_span() {
    let span = Span::empty(3);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn position_counts_lines_and_columns() {
    let source = "first\nsecond line\nthird";
    let pos = position_of(source, Span::new(13, 17));
    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 8);
}

#[test]
fn position_at_start() {
    let pos = position_of("abc", Span::new(0, 1));
    assert_eq!((pos.line, pos.column), (1, 1));
}

#[test]
fn caret_snippet_underlines_span() {
    let source = "echo | | bad";
    let snippet = caret_snippet(source, Span::new(7, 8));
    assert_eq!(snippet, "echo | | bad\n       ^");
}

#[test]
fn caret_snippet_multibyte_columns() {
    let source = "héllo wörld";
    let start = source.find('w').unwrap();
    let snippet = caret_snippet(source, Span::new(start, start + 1));
    let caret_line = snippet.lines().nth(1).unwrap();
    assert_eq!(caret_line.chars().filter(|c| *c == ' ').count(), 6);
}

#[test]
fn diagnostic_formats_location() {
    let source = "a\nb | | c";
    let rendered = diagnostic(source, Span::new(6, 7), "unexpected token '|'");
    assert!(rendered.starts_with("error: unexpected token '|'"));
    assert!(rendered.contains("line 2, column 5"));
    assert!(rendered.contains("b | | c"));
}
