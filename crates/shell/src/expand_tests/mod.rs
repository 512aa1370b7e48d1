// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the expansion engine.

use super::*;
use crate::exec::Shell;

mod braces;
mod variables;
mod words;

/// Expand against a fresh shell.
pub(crate) async fn expand(expander: &Expander) -> Vec<String> {
    let mut shell = Shell::new();
    expander
        .expand(&mut shell)
        .await
        .unwrap_or_else(|err| panic!("expansion failed: {err}"))
}

/// Expand against a shell with the given variables defined.
pub(crate) async fn expand_with(expander: &Expander, vars: &[(&str, &[&str])]) -> Vec<String> {
    let mut shell = Shell::new();
    for (name, values) in vars {
        shell
            .define(name, values.iter().map(|v| v.to_string()).collect())
            .expect("define");
    }
    expander
        .expand(&mut shell)
        .await
        .unwrap_or_else(|err| panic!("expansion failed: {err}"))
}

pub(crate) fn word(text: &str) -> Expander {
    Expander::Word(text.to_string())
}
