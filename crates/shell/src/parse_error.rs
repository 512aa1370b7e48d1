// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::ScanError;
use crate::span::{caret_snippet, diagnostic, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors for shell syntax.
///
/// Use [`ParseError::context`] to generate a human-readable snippet showing
/// where the error occurred.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Structurally invalid `${...}` expansion.
    #[error("invalid expansion: {message} at position {}", span.start)]
    BadExpansion { message: String, span: Span },

    /// Structurally invalid `{...}` brace expansion.
    #[error("invalid brace expansion: {message} at position {}", span.start)]
    BadBrace { message: String, span: Span },

    /// Error inside a `$((...))` arithmetic body.
    #[error("invalid arithmetic: {message} at position {}", span.start)]
    BadArithmetic { message: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Scan(e) => Some(e.span()),
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
            ParseError::BadExpansion { span, .. } => Some(*span),
            ParseError::BadBrace { span, .. } => Some(*span),
            ParseError::BadArithmetic { span, .. } => Some(*span),
        }
    }

    /// Generate a caret snippet showing where the error occurred, or `None`
    /// if the error has no span.
    pub fn context(&self, input: &str) -> Option<String> {
        Some(caret_snippet(input, self.span()?))
    }

    /// Generate a rich diagnostic with line/column info, or `None` if the
    /// error has no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic(input, self.span()?, &self.to_string()))
    }
}
