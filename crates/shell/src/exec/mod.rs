// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell driver: alias table, environment, registries, and the
//! statement execute loop.
//!
//! # Example
//!
//! ```no_run
//! use brine_shell::Shell;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shell = Shell::new()
//!     .cwd("/tmp")
//!     .var("name", ["world"]);
//! let code = shell
//!     .execute(CancellationToken::new(), "echo hello $name", "demo", &[])
//!     .await?;
//! assert_eq!(code, 0);
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod command;
pub mod error;
mod run;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::ast::Executer;
use crate::env::Environment;
use crate::parser::Parser;

use builtin::BuiltinEntry;
use command::{CommandInput, OutputSink, SharedReader, SharedWriter};

pub use command::{Command, CommandKind, ExitStatus};
pub use error::ExecError;

/// Locates external programs for the shell.
pub trait CommandFinder: Send + Sync {
    /// Locate an executable named `name`, searching the given PATH value.
    fn find(&self, name: &str, path: &str) -> Option<PathBuf>;
}

/// The default finder: names with a slash pass through, everything else is
/// searched for in PATH, requiring an execute permission bit.
pub struct PathFinder;

impl CommandFinder for PathFinder {
    fn find(&self, name: &str, path: &str) -> Option<PathBuf> {
        if name.contains('/') {
            return Some(PathBuf::from(name));
        }
        for dir in path.split(':').filter(|dir| !dir.is_empty()) {
            let candidate = Path::new(dir).join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// The shell's own stdin source, shared with spawned commands.
#[derive(Clone)]
pub(crate) enum ShellInput {
    Inherit,
    Null,
    Shared(SharedReader),
}

impl ShellInput {
    fn to_command_input(&self) -> CommandInput {
        match self {
            ShellInput::Inherit => CommandInput::Inherit,
            ShellInput::Null => CommandInput::Null,
            ShellInput::Shared(reader) => CommandInput::Shared(Arc::clone(reader)),
        }
    }
}

/// An embeddable shell interpreter.
///
/// Create one with [`Shell::new`] and the builder methods, then call
/// [`execute`](Shell::execute). The shell owns its alias table, environment,
/// and registries for its whole lifetime; a subshell's environment is a
/// child scope snapshotting this shell's.
#[derive(Clone)]
pub struct Shell {
    pub(crate) env: Environment,
    pub(crate) aliases: IndexMap<String, Vec<String>>,
    pub(crate) builtins: IndexMap<&'static str, BuiltinEntry>,
    pub(crate) commands: HashMap<String, Vec<Executer>>,
    pub(crate) cwd: PathBuf,
    pub(crate) oldcwd: PathBuf,
    pub(crate) dirstack: Vec<PathBuf>,
    pub(crate) stdin: ShellInput,
    pub(crate) stdout: OutputSink,
    pub(crate) stderr: OutputSink,
    pub(crate) echo: bool,
    pub(crate) last_code: i32,
    pub(crate) cancel: CancellationToken,
    pub(crate) finder: Arc<dyn CommandFinder>,
}

impl Shell {
    /// Create a shell with inherited stdio and the process working
    /// directory.
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let mut env = Environment::new();
        env.set_cwd(&cwd, &cwd);
        Self {
            env,
            aliases: IndexMap::new(),
            builtins: builtin::registry(),
            commands: HashMap::new(),
            oldcwd: cwd.clone(),
            cwd,
            dirstack: Vec::new(),
            stdin: ShellInput::Inherit,
            stdout: OutputSink::Inherit,
            stderr: OutputSink::Inherit,
            echo: false,
            last_code: 0,
            cancel: CancellationToken::new(),
            finder: Arc::new(PathFinder),
        }
    }

    // -----------------------------------------------------------------------
    // Builder options
    // -----------------------------------------------------------------------

    /// Set the working directory.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.env.set_cwd(&dir, &self.cwd);
        self.oldcwd = self.cwd.clone();
        self.cwd = dir;
        self
    }

    /// Define a variable.
    pub fn var<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        // Builder definitions silently skip read-only names.
        let _ = self.env.define(name, values);
        self
    }

    /// Use a child scope of the given environment.
    pub fn parent_env(mut self, env: &Environment) -> Self {
        self.env = env.child();
        self
    }

    /// Supply the shell's stdin.
    pub fn stdin(mut self, reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        self.stdin = ShellInput::Shared(Arc::new(Mutex::new(Box::new(reader))));
        self
    }

    /// Supply the shell's stdout.
    pub fn stdout(mut self, writer: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        self.stdout = OutputSink::Writer(shared_writer(writer));
        self
    }

    /// Supply the shell's stderr.
    pub fn stderr(mut self, writer: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        self.stderr = OutputSink::Writer(shared_writer(writer));
        self
    }

    /// Echo each expanded command line before running it.
    pub fn echo(mut self, enabled: bool) -> Self {
        self.echo = enabled;
        self
    }

    /// Replace the external-command finder.
    pub fn finder(mut self, finder: impl CommandFinder + 'static) -> Self {
        self.finder = Arc::new(finder);
        self
    }

    // -----------------------------------------------------------------------
    // Environment and registries
    // -----------------------------------------------------------------------

    /// Resolve a variable, including the computed specials. `?` resolves to
    /// the last exit code.
    pub fn resolve(&self, name: &str) -> Option<Vec<String>> {
        if name == "?" {
            return Some(vec![self.last_code.to_string()]);
        }
        self.env.resolve(name)
    }

    /// Define a variable at the innermost scope.
    pub fn define(&mut self, name: &str, values: Vec<String>) -> Result<(), ExecError> {
        self.env.define(name, values)
    }

    /// Delete a variable from the innermost scope.
    pub fn delete(&mut self, name: &str) -> Result<(), ExecError> {
        self.env.delete(name)
    }

    /// Mark a variable for propagation to spawned processes.
    pub fn export(&mut self, name: &str) -> Result<(), ExecError> {
        self.env.export(name)
    }

    /// Clear a variable's export mark.
    pub fn unexport(&mut self, name: &str) -> Result<(), ExecError> {
        self.env.unexport(name)
    }

    /// Access the environment (for arithmetic evaluation and embedding).
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Define an alias from a script fragment.
    ///
    /// The body is parsed eagerly and must be exactly one simple command;
    /// it is expanded against the current environment into a static argv.
    pub async fn alias(&mut self, name: &str, script: &str) -> Result<(), ExecError> {
        let mut statements = Parser::parse(script)?;
        let argv = match (statements.pop(), statements.is_empty()) {
            (Some(Executer::Simple(cmd)), true) => {
                let mut argv = Vec::new();
                for word in &cmd.words {
                    argv.extend(word.expand(self).await?);
                }
                argv
            }
            _ => {
                return Err(ExecError::Expansion {
                    reason: format!("alias '{name}' must be a single simple command"),
                })
            }
        };
        if argv.is_empty() {
            return Err(ExecError::Empty);
        }
        self.aliases.insert(name.to_string(), argv);
        Ok(())
    }

    /// Remove an alias. Returns false when it did not exist.
    pub fn unalias(&mut self, name: &str) -> bool {
        self.aliases.shift_remove(name).is_some()
    }

    /// Register a user-defined command from a script.
    ///
    /// Invocations run the statements in a child scope with `0`, `1..n`,
    /// and `#` bound to the invocation name and arguments.
    pub fn register(&mut self, name: &str, script: &str) -> Result<(), ExecError> {
        let statements = Parser::parse(script)?;
        self.commands.insert(name.to_string(), statements);
        Ok(())
    }

    /// Change the working directory, updating `PWD`/`OLDPWD`.
    pub fn chdir(&mut self, dir: impl Into<PathBuf>) -> Result<(), ExecError> {
        let dir = dir.into();
        let resolved = if dir.is_absolute() {
            dir
        } else {
            self.cwd.join(dir)
        };
        let meta = std::fs::metadata(&resolved)?;
        if !meta.is_dir() {
            return Err(ExecError::Io {
                source: std::io::Error::other(format!(
                    "{}: not a directory",
                    resolved.display()
                )),
            });
        }
        let resolved = resolved.canonicalize()?;
        self.oldcwd = std::mem::replace(&mut self.cwd, resolved);
        self.env.set_cwd(&self.cwd, &self.oldcwd);
        Ok(())
    }

    /// The current working directory.
    pub fn dir(&self) -> &Path {
        &self.cwd
    }

    /// The previous working directory.
    pub fn old_dir(&self) -> &Path {
        &self.oldcwd
    }

    /// Exit code of the last executed statement.
    pub fn last_code(&self) -> i32 {
        self.last_code
    }

    /// Create a subshell: child environment scope, inherited cwd and echo,
    /// shallow-copied aliases, its own command table.
    pub fn subshell(&self) -> Shell {
        let mut sub = self.clone();
        sub.env = self.env.child();
        sub
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Parse and execute `source` statement by statement.
    ///
    /// `name` and `args` bind `0`, `1..n`, and `#`. Runtime errors are
    /// reported to the shell's stderr and recovered at the next statement;
    /// `exit` and cancellation terminate the loop. Returns the last exit
    /// code.
    pub async fn execute(
        &mut self,
        cancel: CancellationToken,
        source: &str,
        name: &str,
        args: &[String],
    ) -> Result<i32, ExecError> {
        self.cancel = cancel;
        self.bind_script_args(name, args)?;

        let mut parser = Parser::new(source);
        let mut code = 0;
        loop {
            if self.cancel.is_cancelled() {
                return Err(ExecError::Canceled);
            }
            match parser.next_statement() {
                Ok(Some(statement)) => match self.run_toplevel(&statement).await {
                    Ok(statement_code) => code = statement_code,
                    // `exit` ends the loop with its code.
                    Err(ExecError::Exit { code }) => return Ok(code),
                    Err(err) => return Err(err),
                },
                Ok(None) => return Ok(code),
                Err(parse_error) => {
                    let err = ExecError::Parse(parse_error);
                    self.report_error(&err).await;
                    self.last_code = err.code();
                    return Err(err);
                }
            }
        }
    }

    /// Execute a source string with default identity and no cancellation.
    pub async fn execute_str(&mut self, source: &str) -> Result<i32, ExecError> {
        self.execute(CancellationToken::new(), source, "brine", &[]).await
    }

    /// Run one top-level statement, reporting recoverable errors.
    async fn run_toplevel(&mut self, statement: &Executer) -> Result<i32, ExecError> {
        match self.run_statement(statement).await {
            Ok(code) => {
                self.last_code = code;
                Ok(code)
            }
            Err(err) if err.is_fatal() => {
                if let ExecError::Exit { code } = err {
                    self.last_code = code;
                }
                Err(err)
            }
            Err(err) => {
                self.report_error(&err).await;
                self.last_code = err.code();
                Ok(self.last_code)
            }
        }
    }

    fn bind_script_args(&mut self, name: &str, args: &[String]) -> Result<(), ExecError> {
        self.env.define("0", vec![name.to_string()])?;
        for (index, arg) in args.iter().enumerate() {
            self.env.define(&(index + 1).to_string(), vec![arg.clone()])?;
        }
        self.env.define("#", vec![args.len().to_string()])?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Stdio
    // -----------------------------------------------------------------------

    /// Redirect stdout into a fresh capture buffer and return it.
    pub(crate) fn capture_stdout(&mut self) -> Arc<Mutex<Vec<u8>>> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        self.stdout = OutputSink::Capture(Arc::clone(&buffer));
        buffer
    }

    /// The effective IFS: the `IFS` variable, or space/tab/newline.
    pub(crate) fn ifs(&self) -> String {
        self.env
            .resolve("IFS")
            .map(|values| values.concat())
            .unwrap_or_else(|| " \t\n".to_string())
    }

    pub(crate) fn stdin_handle(&self) -> CommandInput {
        self.stdin.to_command_input()
    }

    /// Write to the shell's stdout.
    pub(crate) async fn write_out(&self, text: &str) -> Result<(), ExecError> {
        self.stdout.write_all(text.as_bytes()).await
    }

    /// Write to the shell's stderr.
    pub(crate) async fn write_err(&self, text: &str) -> Result<(), ExecError> {
        self.stderr.write_all_err(text.as_bytes()).await
    }

    /// Format a runtime error onto stderr; failures to report are ignored.
    pub(crate) async fn report_error(&self, err: &ExecError) {
        let _ = self.write_err(&format!("brine: {err}\n")).await;
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("cwd", &self.cwd)
            .field("aliases", &self.aliases.keys().collect::<Vec<_>>())
            .field("echo", &self.echo)
            .field("last_code", &self.last_code)
            .finish_non_exhaustive()
    }
}

pub(crate) fn shared_writer(
    writer: impl AsyncWrite + Send + Unpin + 'static,
) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
