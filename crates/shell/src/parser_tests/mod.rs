// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the shell parser.

use super::*;
use crate::ast::*;
use crate::expand::Expander;

mod braces;
mod control;
mod errors;
mod expansions;
mod sequences;
mod simple;
mod test_brackets;

/// Parse a source expected to contain exactly one statement.
pub(crate) fn parse_one(input: &str) -> Executer {
    let mut statements =
        Parser::parse(input).unwrap_or_else(|err| panic!("parse failed for {input:?}: {err}"));
    assert_eq!(statements.len(), 1, "expected one statement in {input:?}");
    statements.remove(0)
}

/// Unwrap a `Simple` and return its words.
pub(crate) fn simple_words(executer: Executer) -> Vec<Expander> {
    match executer {
        Executer::Simple(cmd) => cmd.words,
        other => panic!("expected a simple command, got {other:?}"),
    }
}

/// A literal word expander.
pub(crate) fn word(text: &str) -> Expander {
    Expander::Word(text.to_string())
}
