// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `[[ ... ]]` test sub-language: boolean tree and evaluation.

use std::future::Future;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::pin::Pin;
use std::time::SystemTime;

use crate::exec::{ExecError, Shell};
use crate::expand::Expander;

/// A parsed test expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Tester {
    Unary {
        op: UnaryTest,
        expr: Expander,
    },
    Binary {
        op: BinaryTest,
        left: Expander,
        right: Expander,
    },
    And {
        left: Box<Tester>,
        right: Box<Tester>,
    },
    Or {
        left: Box<Tester>,
        right: Box<Tester>,
    },
    Not(Box<Tester>),
}

/// Unary test operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryTest {
    /// `-e` — the path exists.
    Exists,
    /// `-r` — any read permission bit is set.
    Readable,
    /// `-w` — any write permission bit is set.
    Writable,
    /// `-x` — any execute permission bit is set.
    Executable,
    /// `-s` — the file exists with size greater than zero.
    HasSize,
    /// `-f` — a regular file.
    Regular,
    /// `-d` — a directory.
    Directory,
    /// `-h` — a symbolic link.
    Symlink,
    /// `-n` — the string is non-empty.
    NotEmpty,
    /// `-z` — the string is empty.
    Empty,
}

/// Binary test operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryTest {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// `-nt` — left was modified more recently than right.
    NewerThan,
    /// `-ot` — left was modified before right.
    OlderThan,
    /// `-ef` — same device and inode.
    SameFile,
}

impl Tester {
    /// Evaluate the test against the shell environment.
    ///
    /// Operand expansion may run command substitutions, so evaluation is
    /// async and recursion is boxed.
    pub fn test<'a>(
        &'a self,
        shell: &'a mut Shell,
    ) -> Pin<Box<dyn Future<Output = Result<bool, ExecError>> + Send + 'a>> {
        Box::pin(async move {
            match self {
                Tester::Unary { op, expr } => {
                    let operand = expand_single(shell, expr).await?;
                    let operand = match op {
                        // File predicates resolve against the shell's cwd.
                        UnaryTest::NotEmpty | UnaryTest::Empty => operand,
                        _ => resolve_path(shell, &operand),
                    };
                    eval_unary(*op, &operand)
                }
                Tester::Binary { op, left, right } => {
                    let lhs = expand_single(shell, left).await?;
                    let rhs = expand_single(shell, right).await?;
                    let (lhs, rhs) = match op {
                        BinaryTest::NewerThan | BinaryTest::OlderThan | BinaryTest::SameFile => {
                            (resolve_path(shell, &lhs), resolve_path(shell, &rhs))
                        }
                        _ => (lhs, rhs),
                    };
                    eval_binary(*op, &lhs, &rhs)
                }
                Tester::And { left, right } => {
                    Ok(left.test(shell).await? && right.test(shell).await?)
                }
                Tester::Or { left, right } => {
                    Ok(left.test(shell).await? || right.test(shell).await?)
                }
                Tester::Not(inner) => Ok(!inner.test(shell).await?),
            }
        })
    }
}

/// Resolve a relative path operand against the shell's working directory.
fn resolve_path(shell: &Shell, operand: &str) -> String {
    if operand.starts_with('/') {
        return operand.to_string();
    }
    shell.dir().join(operand).display().to_string()
}

/// Expand a test operand; it must produce exactly one word.
async fn expand_single(shell: &mut Shell, expander: &Expander) -> Result<String, ExecError> {
    let mut values = expander.expand(shell).await?;
    if values.len() != 1 {
        return Err(ExecError::Test {
            reason: format!("operand expanded to {} words, expected one", values.len()),
        });
    }
    Ok(values.remove(0))
}

fn eval_unary(op: UnaryTest, operand: &str) -> Result<bool, ExecError> {
    let result = match op {
        UnaryTest::NotEmpty => !operand.is_empty(),
        UnaryTest::Empty => operand.is_empty(),
        UnaryTest::Exists => std::fs::metadata(operand).is_ok(),
        UnaryTest::Readable => mode_has(operand, 0o444),
        UnaryTest::Writable => mode_has(operand, 0o222),
        UnaryTest::Executable => mode_has(operand, 0o111),
        UnaryTest::HasSize => std::fs::metadata(operand).map(|m| m.len() > 0).unwrap_or(false),
        UnaryTest::Regular => std::fs::metadata(operand).map(|m| m.is_file()).unwrap_or(false),
        UnaryTest::Directory => std::fs::metadata(operand).map(|m| m.is_dir()).unwrap_or(false),
        UnaryTest::Symlink => std::fs::symlink_metadata(operand)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false),
    };
    Ok(result)
}

/// Any of the given permission bits satisfies the predicate.
fn mode_has(path: &str, bits: u32) -> bool {
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & bits != 0)
        .unwrap_or(false)
}

fn eval_binary(op: BinaryTest, lhs: &str, rhs: &str) -> Result<bool, ExecError> {
    match op {
        BinaryTest::Eq => compare_ints(lhs, rhs, |a, b| a == b),
        BinaryTest::Ne => compare_ints(lhs, rhs, |a, b| a != b),
        BinaryTest::Lt => compare_ints(lhs, rhs, |a, b| a < b),
        BinaryTest::Le => compare_ints(lhs, rhs, |a, b| a <= b),
        BinaryTest::Gt => compare_ints(lhs, rhs, |a, b| a > b),
        BinaryTest::Ge => compare_ints(lhs, rhs, |a, b| a >= b),
        BinaryTest::NewerThan => Ok(compare_mtime(lhs, rhs, |a, b| a > b)),
        BinaryTest::OlderThan => Ok(compare_mtime(lhs, rhs, |a, b| a < b)),
        BinaryTest::SameFile => {
            let same = match (std::fs::metadata(lhs), std::fs::metadata(rhs)) {
                (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
                _ => false,
            };
            Ok(same)
        }
    }
}

/// Parse both operands as integers and compare them.
fn compare_ints(lhs: &str, rhs: &str, cmp: fn(i64, i64) -> bool) -> Result<bool, ExecError> {
    Ok(cmp(parse_int(lhs)?, parse_int(rhs)?))
}

fn parse_int(text: &str) -> Result<i64, ExecError> {
    text.trim().parse::<i64>().map_err(|_| ExecError::Test {
        reason: format!("'{text}' is not an integer"),
    })
}

/// Compare modification times; a missing file fails the predicate.
fn compare_mtime(lhs: &str, rhs: &str, cmp: fn(SystemTime, SystemTime) -> bool) -> bool {
    let mtime = |path: &str| std::fs::metadata(path).and_then(|m| m.modified()).ok();
    match (mtime(lhs), mtime(rhs)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tester_tests.rs"]
mod tests;
