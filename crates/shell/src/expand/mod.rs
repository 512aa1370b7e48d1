// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word expansion: the `Expander` tree and its evaluation engine.
//!
//! An [`Expander`] is a parsed word fragment that knows how to compute its
//! list of strings given a shell environment. Expanders are value-like and
//! stateless; only [`Expander::SetValIfUnset`] writes to the environment.
//! Command substitution (`List { sub: true }`) re-enters execution through a
//! subshell with captured stdout, so expansion is async and recursion is
//! boxed.

mod brace;
pub(crate) mod pattern;
mod variable;

use std::future::Future;
use std::pin::Pin;

use crate::arith::Expr;
use crate::ast::{Executer, SimpleCommand};
use crate::exec::{ExecError, Shell};
use crate::span::Span;

/// How a `Replace` expander anchors its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceMode {
    /// Replace the first occurrence.
    First,
    /// Replace every occurrence.
    All,
    /// Replace only an occurrence anchored at the start.
    Prefix,
    /// Replace only an occurrence anchored at the end.
    Suffix,
}

/// Which end a `Trim` expander trims, and how greedily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    /// `%` — shortest matching suffix.
    Suffix,
    /// `%%` — longest matching suffix.
    SuffixLong,
    /// `#` — shortest matching prefix.
    Prefix,
    /// `##` — longest matching prefix.
    PrefixLong,
}

/// A parsed word fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expander {
    /// A literal word.
    Word(String),
    /// Adjacent fragments concatenated string-by-string.
    Multi(Vec<Expander>),
    /// A word list. With `sub`, the list runs as a subshell command and the
    /// captured stdout is split on IFS.
    List { parts: Vec<Expander>, sub: bool },
    /// `$ident` / `${ident}`. Quoted variables join their values with a space.
    Variable { ident: String, quoted: bool },
    /// `${#ident}` — summed byte length of the resolved values.
    Length { ident: String },
    /// `${ident:from:to}` — substring of each value.
    Slice {
        ident: String,
        from: i64,
        to: Option<i64>,
    },
    /// `${ident/from/to}` and friends.
    Replace {
        ident: String,
        from: String,
        to: String,
        what: ReplaceMode,
    },
    /// `${ident%pattern}` and friends.
    Trim {
        ident: String,
        pattern: String,
        what: TrimMode,
    },
    /// `${ident,}` / `${ident,,}`.
    Lower { ident: String, all: bool },
    /// `${ident^}` / `${ident^^}`.
    Upper { ident: String, all: bool },
    /// `${ident<width}` / `${ident>width}` with optional `:fill`.
    Pad {
        ident: String,
        width: usize,
        fill: char,
        left: bool,
    },
    /// `${ident:-value}`.
    ValIfUnset { ident: String, value: String },
    /// `${ident:=value}` — also defines the variable.
    SetValIfUnset { ident: String, value: String },
    /// `${ident:+value}`.
    ValIfSet { ident: String, value: String },
    /// `${ident:?message}` — expansion fails when unset.
    ExitIfUnset { ident: String, message: String },
    /// `{a,b,c}` with optional adjacent prefix/suffix fragments.
    ListBrace {
        prefix: Option<Box<Expander>>,
        suffix: Option<Box<Expander>>,
        words: Vec<Expander>,
    },
    /// `{m..n}` / `{m..n..s}` with optional adjacent prefix/suffix fragments.
    RangeBrace {
        prefix: Option<Box<Expander>>,
        suffix: Option<Box<Expander>>,
        from: i64,
        to: i64,
        step: i64,
        pad: usize,
    },
    /// `$((expression))`.
    Arith(Expr),
}

impl Expander {
    /// Expand this fragment into a list of strings.
    ///
    /// Returns a boxed future to support async recursion: command
    /// substitution re-enters statement execution in a subshell.
    pub fn expand<'a>(
        &'a self,
        shell: &'a mut Shell,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, ExecError>> + Send + 'a>> {
        Box::pin(async move {
            match self {
                Expander::Word(literal) => Ok(vec![literal.clone()]),
                Expander::Multi(parts) => expand_multi(shell, parts).await,
                Expander::List { parts, sub: false } => expand_list(shell, parts).await,
                Expander::List { parts, sub: true } => expand_substitution(shell, parts).await,
                Expander::Variable { ident, quoted } => {
                    let values = variable::resolve(shell, ident)?;
                    if *quoted {
                        Ok(vec![values.join(" ")])
                    } else {
                        Ok(values)
                    }
                }
                Expander::Length { ident } => {
                    let values = variable::resolve(shell, ident)?;
                    let total: usize = values.iter().map(|v| v.len()).sum();
                    Ok(vec![total.to_string()])
                }
                Expander::Slice { ident, from, to } => {
                    variable::apply(shell, ident, |v| variable::slice(v, *from, *to))
                }
                Expander::Replace {
                    ident,
                    from,
                    to,
                    what,
                } => variable::apply(shell, ident, |v| variable::replace(v, from, to, *what)),
                Expander::Trim {
                    ident,
                    pattern,
                    what,
                } => variable::apply(shell, ident, |v| variable::trim(v, pattern, *what)),
                Expander::Lower { ident, all } => {
                    variable::apply(shell, ident, |v| variable::lower(v, *all))
                }
                Expander::Upper { ident, all } => {
                    variable::apply(shell, ident, |v| variable::upper(v, *all))
                }
                Expander::Pad {
                    ident,
                    width,
                    fill,
                    left,
                } => variable::apply(shell, ident, |v| variable::pad(v, *width, *fill, *left)),
                Expander::ValIfUnset { ident, value } => {
                    match variable::try_resolve(shell, ident) {
                        Some(values) => Ok(values),
                        None => Ok(vec![value.clone()]),
                    }
                }
                Expander::SetValIfUnset { ident, value } => {
                    match variable::try_resolve(shell, ident) {
                        Some(values) => Ok(values),
                        None => {
                            shell.define(ident, vec![value.clone()])?;
                            Ok(vec![value.clone()])
                        }
                    }
                }
                Expander::ValIfSet { ident, value } => {
                    match variable::try_resolve(shell, ident) {
                        Some(_) => Ok(vec![value.clone()]),
                        None => Ok(Vec::new()),
                    }
                }
                Expander::ExitIfUnset { ident, message } => {
                    match variable::try_resolve(shell, ident) {
                        Some(values) => Ok(values),
                        None => Err(ExecError::Unset {
                            name: ident.clone(),
                            message: message.clone(),
                        }),
                    }
                }
                Expander::ListBrace {
                    prefix,
                    suffix,
                    words,
                } => brace::expand_list_brace(shell, prefix.as_deref(), suffix.as_deref(), words)
                    .await,
                Expander::RangeBrace {
                    prefix,
                    suffix,
                    from,
                    to,
                    step,
                    pad,
                } => {
                    let numbers = brace::range_values(*from, *to, *step, *pad);
                    brace::combine(shell, prefix.as_deref(), suffix.as_deref(), numbers).await
                }
                Expander::Arith(expr) => {
                    let value = expr.eval(shell.env())?;
                    Ok(vec![format_number(value)])
                }
            }
        })
    }
}

/// Cartesian string concatenation of the expansions of `parts`.
async fn expand_multi(shell: &mut Shell, parts: &[Expander]) -> Result<Vec<String>, ExecError> {
    let mut result = vec![String::new()];
    for part in parts {
        let values = part.expand(shell).await?;
        if values.is_empty() {
            continue;
        }
        let mut next = Vec::with_capacity(result.len() * values.len());
        for prefix in &result {
            for value in &values {
                next.push(format!("{prefix}{value}"));
            }
        }
        result = next;
    }
    Ok(result)
}

/// Concatenation of the expansions of `parts`; word splitting is retained.
async fn expand_list(shell: &mut Shell, parts: &[Expander]) -> Result<Vec<String>, ExecError> {
    let mut result = Vec::new();
    for part in parts {
        result.extend(part.expand(shell).await?);
    }
    Ok(result)
}

/// Run `parts` as a simple command in a subshell and split the captured
/// stdout on IFS.
async fn expand_substitution(
    shell: &mut Shell,
    parts: &[Expander],
) -> Result<Vec<String>, ExecError> {
    let exec = Executer::Simple(SimpleCommand {
        words: parts.to_vec(),
        redirects: Vec::new(),
        span: Span::default(),
    });

    let mut sub = shell.subshell();
    let sink = sub.capture_stdout();
    sub.run_statement(&exec).await?;

    let captured = {
        let buffer = sink.lock().await;
        String::from_utf8_lossy(&buffer).into_owned()
    };
    let ifs = shell.ifs();
    Ok(split_fields(&captured, &ifs))
}

/// Split captured text on IFS characters, dropping empty fields.
pub(crate) fn split_fields(text: &str, ifs: &str) -> Vec<String> {
    if ifs.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![text.to_string()];
    }
    text.split(|c| ifs.contains(c))
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render an arithmetic result: integral values print without a decimal point.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
#[path = "../expand_tests/mod.rs"]
mod tests;
