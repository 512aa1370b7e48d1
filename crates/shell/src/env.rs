// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped name→values environment with computed special variables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use crate::exec::ExecError;

/// Names that are read-only and computed on each resolve.
pub const SPECIALS: &[&str] = &[
    "SECONDS", "PWD", "OLDPWD", "PID", "PPID", "RANDOM", "PATH",
];

/// Returns true for the computed, read-only variable names.
pub fn is_special(name: &str) -> bool {
    SPECIALS.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Value {
    values: Vec<String>,
    exported: bool,
    readonly: bool,
}

/// A mapping from identifier to an ordered list of strings, with an optional
/// parent scope.
///
/// `resolve` walks the parent chain; `define`/`delete` act on the innermost
/// scope only. A child scope snapshots its parent, so later mutations of the
/// outer environment are not observed (command-substitution semantics).
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, Value>,
    parent: Option<Arc<Environment>>,
    /// Shell creation time, for `SECONDS`. Inherited by child scopes.
    started: Instant,
    /// Current and previous working directory, when set at this scope.
    cwd: Option<(PathBuf, PathBuf)>,
}

impl Environment {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            parent: None,
            started: Instant::now(),
            cwd: None,
        }
    }

    /// Create a child scope whose parent is a snapshot of this environment.
    pub fn child(&self) -> Self {
        Self {
            vars: HashMap::new(),
            parent: Some(Arc::new(self.clone())),
            started: self.started,
            cwd: None,
        }
    }

    /// Resolve a name, walking the parent chain. Special names are computed
    /// fresh on every call.
    pub fn resolve(&self, name: &str) -> Option<Vec<String>> {
        if is_special(name) {
            return Some(vec![self.resolve_special(name)]);
        }
        self.lookup(name).map(|v| v.values.clone())
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        if let Some(value) = self.vars.get(name) {
            return Some(value);
        }
        self.parent.as_deref().and_then(|parent| parent.lookup(name))
    }

    fn resolve_special(&self, name: &str) -> String {
        match name {
            "SECONDS" => self.started.elapsed().as_secs().to_string(),
            "PWD" => self
                .current_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "OLDPWD" => self
                .previous_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "PID" => std::process::id().to_string(),
            "PPID" => std::os::unix::process::parent_id().to_string(),
            "RANDOM" => rand::thread_rng().gen_range(0..=32767u32).to_string(),
            "PATH" => std::env::var("PATH").unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// The working directory recorded nearest to this scope.
    pub fn current_dir(&self) -> Option<PathBuf> {
        if let Some((pwd, _)) = &self.cwd {
            return Some(pwd.clone());
        }
        match self.parent.as_deref() {
            Some(parent) => parent.current_dir(),
            None => std::env::current_dir().ok(),
        }
    }

    fn previous_dir(&self) -> Option<PathBuf> {
        if let Some((_, oldpwd)) = &self.cwd {
            return Some(oldpwd.clone());
        }
        self.parent.as_deref().and_then(|parent| parent.previous_dir())
    }

    /// Record a directory change at this scope. A subshell's `cd` therefore
    /// never leaks to the parent.
    pub(crate) fn set_cwd(&mut self, pwd: &Path, oldpwd: &Path) {
        self.cwd = Some((pwd.to_path_buf(), oldpwd.to_path_buf()));
    }

    /// Define `name` at the innermost scope.
    pub fn define(&mut self, name: &str, values: Vec<String>) -> Result<(), ExecError> {
        self.check_writable(name)?;
        let exported = self.lookup(name).map(|v| v.exported).unwrap_or(false);
        self.vars.insert(
            name.to_string(),
            Value {
                values,
                exported,
                readonly: false,
            },
        );
        Ok(())
    }

    /// Delete `name` from the innermost scope.
    pub fn delete(&mut self, name: &str) -> Result<(), ExecError> {
        self.check_writable(name)?;
        self.vars.remove(name);
        Ok(())
    }

    fn check_writable(&self, name: &str) -> Result<(), ExecError> {
        if is_special(name) {
            return Err(ExecError::ReadOnly {
                name: name.to_string(),
            });
        }
        if self.lookup(name).map(|v| v.readonly).unwrap_or(false) {
            return Err(ExecError::ReadOnly {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Mark `name` as read-only, defining it empty when missing.
    pub fn set_readonly(&mut self, name: &str) -> Result<(), ExecError> {
        if is_special(name) {
            // Specials are already read-only.
            return Ok(());
        }
        let mut value = self
            .lookup(name)
            .cloned()
            .unwrap_or(Value { values: Vec::new(), exported: false, readonly: false });
        value.readonly = true;
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    /// Mark `name` for propagation to spawned process environments.
    pub fn export(&mut self, name: &str) -> Result<(), ExecError> {
        if is_special(name) {
            return Err(ExecError::ReadOnly {
                name: name.to_string(),
            });
        }
        let mut value = self
            .lookup(name)
            .cloned()
            .unwrap_or(Value { values: Vec::new(), exported: false, readonly: false });
        value.exported = true;
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    /// Clear the export mark on `name`.
    pub fn unexport(&mut self, name: &str) -> Result<(), ExecError> {
        if is_special(name) {
            return Err(ExecError::ReadOnly {
                name: name.to_string(),
            });
        }
        if let Some(mut value) = self.lookup(name).cloned() {
            value.exported = false;
            self.vars.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Exported name/value pairs for a spawned process, innermost wins.
    /// Multi-valued variables join with a single space.
    pub fn exported_pairs(&self) -> Vec<(String, String)> {
        let mut seen = HashMap::new();
        self.collect_exported(&mut seen);
        seen.into_iter().collect()
    }

    fn collect_exported(&self, seen: &mut HashMap<String, String>) {
        // Innermost first; outer scopes must not override.
        for (name, value) in &self.vars {
            if value.exported && !seen.contains_key(name) {
                seen.insert(name.clone(), value.values.join(" "));
            }
        }
        if let Some(parent) = self.parent.as_deref() {
            parent.collect_exported(seen);
        }
    }

    /// Names defined at any scope, for listings. Specials excluded.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut scope = Some(self);
        while let Some(env) = scope {
            for name in env.vars.keys() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
            scope = env.parent.as_deref();
        }
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
