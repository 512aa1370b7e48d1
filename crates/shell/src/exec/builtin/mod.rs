// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The builtin registry and the in-process Command implementation.
//!
//! Builtins run inside the shell process with no forking. Standalone, the
//! driver calls their function directly against the shell so `cd`, `alias`,
//! and `export` take effect; inside a pipeline every stage runs as a
//! [`BuiltinCommand`] over a subshell clone, so stage mutations stay local
//! (matching POSIX pipeline semantics).

mod dirs;
mod meta;
mod misc;
mod vars;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::command::{Command, CommandInput, CommandKind, ExitStatus, OutputSink};
use super::error::ExecError;
use super::{Shell, ShellInput};

/// A builtin entry point: full argv in, exit code out.
pub type BuiltinFn = for<'a> fn(
    &'a mut Shell,
    &'a [String],
) -> Pin<Box<dyn Future<Output = Result<i32, ExecError>> + Send + 'a>>;

/// Deferred stage work for pipeline builtins and user commands.
pub(crate) type StageWork = Box<
    dyn for<'a> FnOnce(
            &'a mut Shell,
        )
            -> Pin<Box<dyn Future<Output = Result<i32, ExecError>> + Send + 'a>>
        + Send,
>;

/// A named in-process command.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub func: BuiltinFn,
}

/// Registry slot: the builtin plus its `enable` state.
#[derive(Clone, Copy)]
pub(crate) struct BuiltinEntry {
    pub(crate) def: Builtin,
    pub(crate) enabled: bool,
}

macro_rules! builtins {
    ($($name:literal => $func:path, $usage:literal, $summary:literal;)*) => {
        {
            let mut map: IndexMap<&'static str, BuiltinEntry> = IndexMap::new();
            $(
                {
                    fn wrapper<'a>(
                        shell: &'a mut Shell,
                        argv: &'a [String],
                    ) -> Pin<Box<dyn Future<Output = Result<i32, ExecError>> + Send + 'a>>
                    {
                        Box::pin($func(shell, argv))
                    }
                    map.insert($name, BuiltinEntry {
                        def: Builtin {
                            name: $name,
                            summary: $summary,
                            usage: $usage,
                            func: wrapper,
                        },
                        enabled: true,
                    });
                }
            )*
            map
        }
    };
}

/// Build the default builtin registry.
pub(crate) fn registry() -> IndexMap<&'static str, BuiltinEntry> {
    builtins! {
        "help" => meta::help, "help [name]", "display help for builtins";
        "builtins" => meta::builtins, "builtins", "list builtin commands";
        "true" => misc::true_cmd, "true", "return a zero exit code";
        "false" => misc::false_cmd, "false", "return a non-zero exit code";
        "builtin" => meta::builtin_cmd, "builtin name [args...]", "run a builtin, bypassing resolution";
        "command" => meta::command_cmd, "command name [args...]", "run a command, bypassing aliases";
        "seq" => misc::seq, "seq [first [step]] last", "print a sequence of numbers";
        "type" => meta::type_cmd, "type name...", "describe how names would be resolved";
        "env" => vars::env_cmd, "env", "print the spawned-process environment";
        "enable" => meta::enable, "enable [-n] [name]", "enable or disable builtins";
        "alias" => misc::alias_cmd, "alias [name=script...]", "define or list aliases";
        "unalias" => misc::unalias_cmd, "unalias name...", "remove aliases";
        "cd" => dirs::cd, "cd [dir]", "change the working directory";
        "pwd" => dirs::pwd, "pwd", "print the working directory";
        "popd" => dirs::popd, "popd", "pop the directory stack and change to it";
        "pushd" => dirs::pushd, "pushd [dir]", "push the working directory and change to dir";
        "dirs" => dirs::dirs_cmd, "dirs", "print the directory stack";
        "readonly" => vars::readonly_cmd, "readonly name[=value]...", "mark variables read-only";
        "export" => vars::export_cmd, "export [-n] name[=value]...", "mark variables for export";
        "exit" => misc::exit_cmd, "exit [code]", "exit the shell";
    }
}

// ---------------------------------------------------------------------------
// Pipeline stage command
// ---------------------------------------------------------------------------

/// A builtin (or user command) as a pipeline stage.
///
/// `start` spawns a worker task running the stage function against its own
/// subshell; `wait` joins it. Stdout piping goes through an in-process
/// duplex stream whose write half closes when the worker's shell drops.
pub struct BuiltinCommand {
    name: String,
    kind: CommandKind,
    shell: Option<Shell>,
    work: Option<StageWork>,
    pipe_requested: bool,
    pipe_both: bool,
    piped_stdout: Option<CommandInput>,
    task: Option<JoinHandle<i32>>,
    cancel: CancellationToken,
    status: Option<ExitStatus>,
}

impl BuiltinCommand {
    pub(crate) fn builtin(
        name: String,
        shell: Shell,
        work: StageWork,
        cancel: CancellationToken,
    ) -> Self {
        Self::new(name, CommandKind::Builtin, shell, work, cancel)
    }

    pub(crate) fn script(
        name: String,
        shell: Shell,
        work: StageWork,
        cancel: CancellationToken,
    ) -> Self {
        Self::new(name, CommandKind::Script, shell, work, cancel)
    }

    fn new(
        name: String,
        kind: CommandKind,
        shell: Shell,
        work: StageWork,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            name,
            kind,
            shell: Some(shell),
            work: Some(work),
            pipe_requested: false,
            pipe_both: false,
            piped_stdout: None,
            task: None,
            cancel,
            status: None,
        }
    }

    fn shell_mut(&mut self) -> Option<&mut Shell> {
        self.shell.as_mut()
    }
}

#[async_trait]
impl Command for BuiltinCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> CommandKind {
        self.kind
    }

    fn set_stdin(&mut self, input: CommandInput) {
        if let Some(shell) = self.shell_mut() {
            shell.stdin = match input {
                CommandInput::Inherit => ShellInput::Inherit,
                CommandInput::Null => ShellInput::Null,
                CommandInput::Reader(reader) => {
                    ShellInput::Shared(Arc::new(Mutex::new(reader)))
                }
                CommandInput::Shared(shared) => ShellInput::Shared(shared),
            };
        }
    }

    fn set_stdout(&mut self, output: OutputSink) {
        if let Some(shell) = self.shell_mut() {
            shell.stdout = output;
        }
    }

    fn set_stderr(&mut self, output: OutputSink) {
        if let Some(shell) = self.shell_mut() {
            shell.stderr = output;
        }
    }

    fn pipe_stdout(&mut self, both: bool) {
        self.pipe_requested = true;
        self.pipe_both = both;
    }

    fn take_stdout(&mut self) -> Option<CommandInput> {
        self.piped_stdout.take()
    }

    async fn start(&mut self) -> Result<(), ExecError> {
        let mut shell = self.shell.take().ok_or_else(|| ExecError::Spawn {
            name: self.name.clone(),
            source: std::io::Error::other("builtin was already started"),
        })?;
        let work = self.work.take().ok_or_else(|| ExecError::Spawn {
            name: self.name.clone(),
            source: std::io::Error::other("builtin was already started"),
        })?;

        if self.pipe_requested {
            let (read_half, write_half) = tokio::io::duplex(8192);
            let writer = OutputSink::Writer(super::shared_writer(write_half));
            shell.stdout = writer.clone();
            if self.pipe_both {
                shell.stderr = writer;
            }
            self.piped_stdout = Some(CommandInput::Reader(Box::new(read_half)));
        }

        self.task = Some(tokio::spawn(async move {
            let result = work(&mut shell).await;
            match result {
                Ok(code) => code,
                Err(ExecError::Exit { code }) => code,
                Err(err) => {
                    shell.report_error(&err).await;
                    err.code()
                }
            }
            // `shell` drops here, closing the duplex writer so the next
            // stage sees EOF.
        }));
        Ok(())
    }

    async fn wait(&mut self) -> Result<ExitStatus, ExecError> {
        let Some(mut task) = self.task.take() else {
            return Err(ExecError::Spawn {
                name: self.name.clone(),
                source: std::io::Error::other("builtin was not started"),
            });
        };

        let code = tokio::select! {
            joined = &mut task => joined.unwrap_or(255),
            _ = self.cancel.cancelled() => {
                task.abort();
                return Err(ExecError::Canceled);
            }
        };

        let status = ExitStatus::builtin(code);
        self.status = Some(status);
        Ok(status)
    }

    fn exit(&self) -> ExitStatus {
        self.status.unwrap_or(ExitStatus { pid: 0, code: 255 })
    }
}
