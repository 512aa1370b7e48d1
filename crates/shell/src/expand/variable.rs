// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-value parameter operators: slice, replace, trim, case, pad.

use super::pattern;
use super::{ReplaceMode, TrimMode};
use crate::exec::{ExecError, Shell};

/// Resolve `ident`, failing with an expansion error when unset.
pub(super) fn resolve(shell: &Shell, ident: &str) -> Result<Vec<String>, ExecError> {
    try_resolve(shell, ident).ok_or_else(|| ExecError::Expansion {
        reason: format!("undefined variable '{ident}'"),
    })
}

/// Resolve `ident`, returning `None` when unset.
pub(super) fn try_resolve(shell: &Shell, ident: &str) -> Option<Vec<String>> {
    shell.resolve(ident)
}

/// Resolve `ident` and map `op` over each value.
pub(super) fn apply<F>(shell: &Shell, ident: &str, op: F) -> Result<Vec<String>, ExecError>
where
    F: Fn(&str) -> String,
{
    let values = resolve(shell, ident)?;
    Ok(values.iter().map(|v| op(v)).collect())
}

/// Substring of `value` between `from` and `to`.
///
/// Negative indices count from the end. `to` of `None` means end of string.
/// Out-of-range positions clamp; an inverted range yields the empty string.
pub(super) fn slice(value: &str, from: i64, to: Option<i64>) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len() as i64;

    let clamp = |idx: i64| -> i64 {
        let resolved = if idx < 0 { len + idx } else { idx };
        resolved.clamp(0, len)
    };

    let start = clamp(from);
    let end = clamp(to.unwrap_or(len));
    if end <= start {
        return String::new();
    }
    chars[start as usize..end as usize].iter().collect()
}

/// Replace occurrences of `from` in `value` with `to`, per `mode`.
pub(super) fn replace(value: &str, from: &str, to: &str, mode: ReplaceMode) -> String {
    if from.is_empty() {
        return value.to_string();
    }
    match mode {
        ReplaceMode::First => value.replacen(from, to, 1),
        ReplaceMode::All => value.replace(from, to),
        ReplaceMode::Prefix => match value.strip_prefix(from) {
            Some(rest) => format!("{to}{rest}"),
            None => value.to_string(),
        },
        ReplaceMode::Suffix => match value.strip_suffix(from) {
            Some(rest) => format!("{rest}{to}"),
            None => value.to_string(),
        },
    }
}

/// Trim the shortest or longest prefix/suffix of `value` matching `pattern`.
///
/// Patterns use `*` and `?` wildcards. When nothing matches, the value is
/// returned unchanged.
pub(super) fn trim(value: &str, pat: &str, mode: TrimMode) -> String {
    // Candidate cut lengths are char boundaries; order decides shortest vs
    // longest match.
    let boundaries: Vec<usize> = value
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(value.len()))
        .collect();

    match mode {
        TrimMode::Suffix => {
            for &cut in boundaries.iter().rev() {
                if pattern::matches(pat, &value[cut..]) {
                    return value[..cut].to_string();
                }
            }
            value.to_string()
        }
        TrimMode::SuffixLong => {
            for &cut in boundaries.iter() {
                if pattern::matches(pat, &value[cut..]) {
                    return value[..cut].to_string();
                }
            }
            value.to_string()
        }
        TrimMode::Prefix => {
            for &cut in boundaries.iter() {
                if pattern::matches(pat, &value[..cut]) {
                    return value[cut..].to_string();
                }
            }
            value.to_string()
        }
        TrimMode::PrefixLong => {
            for &cut in boundaries.iter().rev() {
                if pattern::matches(pat, &value[..cut]) {
                    return value[cut..].to_string();
                }
            }
            value.to_string()
        }
    }
}

/// Lowercase the first character, or all of them.
pub(super) fn lower(value: &str, all: bool) -> String {
    if all {
        value.to_ascii_lowercase()
    } else {
        fold_first(value, char::to_ascii_lowercase)
    }
}

/// Uppercase the first character, or all of them.
pub(super) fn upper(value: &str, all: bool) -> String {
    if all {
        value.to_ascii_uppercase()
    } else {
        fold_first(value, char::to_ascii_uppercase)
    }
}

fn fold_first(value: &str, fold: impl Fn(&char) -> char) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            out.push(fold(&first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Pad `value` with `fill` to `width` characters, on the left or right.
pub(super) fn pad(value: &str, width: usize, fill: char, left: bool) -> String {
    let current = value.chars().count();
    if current >= width {
        return value.to_string();
    }
    let padding: String = std::iter::repeat(fill).take(width - current).collect();
    if left {
        format!("{padding}{value}")
    } else {
        format!("{value}{padding}")
    }
}
