// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime error types shared by expansion, evaluation, and execution.

use crate::parse_error::ParseError;

/// Errors that can occur while expanding or executing a statement.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Expansion produced no argv for a simple command.
    #[error("empty command")]
    Empty,

    /// Attempt to modify a read-only variable.
    #[error("{name}: read-only variable")]
    ReadOnly { name: String },

    /// The `exit` builtin fired; terminates the execute loop.
    #[error("exit {code}")]
    Exit { code: i32 },

    /// Malformed or failed expansion.
    #[error("bad expansion: {reason}")]
    Expansion { reason: String },

    /// `${name:?message}` hit an unset variable.
    #[error("{name}: {message}")]
    Unset { name: String, message: String },

    /// Arithmetic division or modulo by zero.
    #[error("division by zero")]
    Zero,

    /// Test evaluation error.
    #[error("bad test: {reason}")]
    Test { reason: String },

    /// Parse failure surfaced at execution time.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Command resolution miss.
    #[error("{name}: command not found")]
    NotFound { name: String },

    /// Process spawn failure.
    #[error("failed to start `{name}`: {source}")]
    Spawn {
        name: String,
        source: std::io::Error,
    },

    /// Stdio plumbing failure.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Execution was cancelled through the cancellation token.
    #[error("cancelled")]
    Canceled,
}

impl ExecError {
    /// Map the error to its exit-code class: 1 for runtime failures, 2 for
    /// stdio and plumbing failures, the carried code for `Exit`.
    pub fn code(&self) -> i32 {
        match self {
            ExecError::Exit { code } => *code,
            ExecError::Spawn { .. } | ExecError::Io { .. } => 2,
            _ => 1,
        }
    }

    /// True for errors that abort the whole execute loop rather than the
    /// current statement.
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(self, ExecError::Exit { .. } | ExecError::Canceled)
    }
}
