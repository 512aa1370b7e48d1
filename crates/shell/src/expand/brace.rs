// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List and range brace expansion.

use super::Expander;
use crate::exec::{ExecError, Shell};

/// Expand a list brace: every word combined with every prefix and suffix.
pub(super) async fn expand_list_brace(
    shell: &mut Shell,
    prefix: Option<&Expander>,
    suffix: Option<&Expander>,
    words: &[Expander],
) -> Result<Vec<String>, ExecError> {
    let mut expanded = Vec::with_capacity(words.len());
    for word in words {
        expanded.extend(word.expand(shell).await?);
    }
    combine(shell, prefix, suffix, expanded).await
}

/// Generate the integer sequence of a range brace, formatted with optional
/// zero padding.
///
/// The range is inclusive on both ends. When `from > to` the direction
/// reverses; a zero step is forced to one.
pub(super) fn range_values(from: i64, to: i64, step: i64, pad: usize) -> Vec<String> {
    let magnitude = step.abs().max(1);
    let step = if from <= to { magnitude } else { -magnitude };

    let mut values = Vec::new();
    let mut current = from;
    loop {
        let done = if step > 0 { current > to } else { current < to };
        if done {
            break;
        }
        values.push(format_padded(current, pad));
        current += step;
    }
    values
}

/// Zero-left-pad `value` to `pad` digits (sign excluded from the count).
fn format_padded(value: i64, pad: usize) -> String {
    if pad == 0 {
        return value.to_string();
    }
    if value < 0 {
        format!("-{:0pad$}", value.unsigned_abs(), pad = pad.saturating_sub(1))
    } else {
        format!("{:0pad$}", value, pad = pad)
    }
}

/// Combine brace words with their expanded prefix and suffix as a cartesian
/// product, preserving order: prefixes outermost, then words, then suffixes.
pub(super) async fn combine(
    shell: &mut Shell,
    prefix: Option<&Expander>,
    suffix: Option<&Expander>,
    words: Vec<String>,
) -> Result<Vec<String>, ExecError> {
    let prefixes = match prefix {
        Some(expander) => expander.expand(shell).await?,
        None => vec![String::new()],
    };
    let suffixes = match suffix {
        Some(expander) => expander.expand(shell).await?,
        None => vec![String::new()],
    };

    let mut result = Vec::with_capacity(prefixes.len() * words.len() * suffixes.len());
    for prefix in &prefixes {
        for word in &words {
            for suffix in &suffixes {
                result.push(format!("{prefix}{word}{suffix}"));
            }
        }
    }
    Ok(result)
}
