// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for scanner and parser diagnostics.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the source text.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// A human-oriented position: 1-indexed line, 1-indexed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Locate the start of a span in source.
pub fn position_of(source: &str, span: Span) -> Position {
    let upto = span.start.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, ch) in source.char_indices() {
        if i >= upto {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    let column = source[line_start..upto].chars().count() + 1;
    Position { line, column }
}

/// Generate a caret snippet showing where in its line a span falls.
///
/// ```text
/// echo ${foo;bar}
///           ^
/// ```
pub fn caret_snippet(source: &str, span: Span) -> String {
    let upto = span.start.min(source.len());
    let line_start = source[..upto].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line = &source[line_start..line_end];
    let caret_pos = source[line_start..upto].chars().count();
    let caret_len = span.len().max(1);

    format!("{}\n{}{}", line, " ".repeat(caret_pos), "^".repeat(caret_len))
}

/// Generate a rich diagnostic message with line/column info.
///
/// Produces output in a format similar to rustc errors:
///
/// ```text
/// error: unexpected token '|'
///   --> line 3, column 1
///    |
///  3 | | bad
///    | ^
/// ```
pub fn diagnostic(source: &str, span: Span, message: &str) -> String {
    let pos = position_of(source, span);
    let snippet = caret_snippet(source, span);
    let mut lines = snippet.lines();
    let line_content = lines.next().unwrap_or("");
    let caret_line = lines.next().unwrap_or("");

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}",
        message, pos.line, pos.column, pos.line, line_content, caret_line
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
