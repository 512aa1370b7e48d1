// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Embeddable shell interpreter: scanner, parser, word expansion, and an
//! async executor.
//!
//! The crate reads Bourne/Bash-style command lines, produces a typed
//! command tree, expands words (variables, braces, parameter operators,
//! command substitution), evaluates the test and arithmetic sub-languages,
//! and executes the result as pipelines of processes and builtins.
//!
//! # Quick Start
//!
//! ```no_run
//! use brine_shell::Shell;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shell = Shell::new();
//! let code = shell
//!     .execute(CancellationToken::new(), "echo {1..3} | wc -w", "demo", &[])
//!     .await?;
//! assert_eq!(code, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Structure
//!
//! ```text
//! source text
//!   └── Scanner        mode-sensitive tokens (words, ${}, [[ ]], braces)
//!        └── Parser    Executer tree
//!             ├── Expander   Expand(env) -> words
//!             ├── Expr       $((...)) evaluation
//!             ├── Tester     [[ ... ]] evaluation
//!             └── Shell      resolution, builtins, pipelines, subshells
//! ```
//!
//! Scanning can also be used standalone through [`Scanner::tokenize`], and
//! parsing through [`Parser::parse`] or statement-at-a-time with
//! [`Parser::next_statement`].

mod arith;
mod ast;
mod env;
mod error;
pub mod exec;
mod expand;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod tester;
mod token;

// Spans and diagnostics
pub use span::{caret_snippet, diagnostic, position_of, Position, Span};

// Tokens and scanning
pub use error::ScanError;
pub use lexer::Scanner;
pub use token::{Token, TokenKind};

// Command tree
pub use ast::{
    Assignment, CondLoop, Conditional, Executer, ForLoop, PipeItem, Pipeline, Redirect,
    RedirectKind, SimpleCommand, TestCommand,
};

// Parsing
pub use parse_error::ParseError;
pub use parser::Parser;

// Expansion and the sub-languages
pub use arith::{BinaryOp, Expr, UnaryOp};
pub use expand::{Expander, ReplaceMode, TrimMode};
pub use tester::{BinaryTest, Tester, UnaryTest};

// Environment
pub use env::{is_special, Environment, SPECIALS};

// Execution
pub use exec::builtin::Builtin;
pub use exec::{
    Command, CommandFinder, CommandKind, ExecError, ExitStatus, PathFinder, Shell,
};
