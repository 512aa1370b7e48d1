// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Command contract and the external-process implementation.
//!
//! Every executable unit — builtin or external process — offers the same
//! surface: stdio wiring, `start`, `wait`, and an exit status. Pipelines
//! wire stages through `pipe_stdout`/`take_stdout` and run them
//! concurrently. When a command's output goes to a non-file sink (a capture
//! buffer, an embedder-supplied writer), a relay task bridges the bytes and
//! is drained in `wait`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Child;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::error::ExecError;

/// A writer shared between the shell and its commands. The underlying
/// resource belongs to whoever created it; commands never close it.
pub type SharedWriter = Arc<Mutex<Box<dyn AsyncWrite + Send + Unpin>>>;

/// A reader shared between the shell and its commands.
pub type SharedReader = Arc<Mutex<Box<dyn AsyncRead + Send + Unpin>>>;

/// What kind of executable unit a command is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Implemented inside the shell process.
    Builtin,
    /// A user-registered command (a stored script).
    Script,
    /// An external program found on PATH.
    Regular,
}

/// Process identity and exit code of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    /// Process id; 0 for builtins.
    pub pid: i32,
    /// Exit code; 255 when the process state is unavailable.
    pub code: i32,
}

impl ExitStatus {
    pub(crate) fn builtin(code: i32) -> Self {
        Self { pid: 0, code }
    }
}

/// Where a command reads its input.
pub enum CommandInput {
    /// The process's own stdin.
    Inherit,
    /// No input; reads see EOF.
    Null,
    /// An owned reader, typically the previous pipeline stage's output.
    Reader(Box<dyn AsyncRead + Send + Unpin>),
    /// A reader shared with the shell (embedder-supplied stdin).
    Shared(SharedReader),
}

/// Where a command writes a stream.
///
/// This is the shell-owned, cloneable side of output wiring; per-command
/// pipes are created by `pipe_stdout` instead.
#[derive(Clone)]
pub enum OutputSink {
    /// The process's own stdout/stderr.
    Inherit,
    /// Discard.
    Null,
    /// Append into a capture buffer (command substitution).
    Capture(Arc<Mutex<Vec<u8>>>),
    /// Forward to a shared writer (embedder-supplied sink or an open file).
    Writer(SharedWriter),
}

impl OutputSink {
    /// Write the whole buffer to this sink.
    pub(crate) async fn write_all(&self, bytes: &[u8]) -> Result<(), ExecError> {
        match self {
            OutputSink::Inherit => {
                let mut out = tokio::io::stdout();
                out.write_all(bytes).await?;
                out.flush().await?;
            }
            OutputSink::Null => {}
            OutputSink::Capture(buffer) => {
                buffer.lock().await.extend_from_slice(bytes);
            }
            OutputSink::Writer(writer) => {
                let mut writer = writer.lock().await;
                writer.write_all(bytes).await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    /// Write to the real stderr instead of stdout for `Inherit`.
    pub(crate) async fn write_all_err(&self, bytes: &[u8]) -> Result<(), ExecError> {
        match self {
            OutputSink::Inherit => {
                let mut err = tokio::io::stderr();
                err.write_all(bytes).await?;
                err.flush().await?;
            }
            _ => self.write_all(bytes).await?,
        }
        Ok(())
    }
}

/// The uniform contract for builtins and external processes.
#[async_trait]
pub trait Command: Send {
    /// The command name (argv\[0\] as typed).
    fn name(&self) -> &str;

    fn kind(&self) -> CommandKind;

    fn set_stdin(&mut self, input: CommandInput);

    fn set_stdout(&mut self, output: OutputSink);

    fn set_stderr(&mut self, output: OutputSink);

    /// Configure stdout as a pipe before `start`. With `both`, stderr merges
    /// into the same pipe (`|&`).
    fn pipe_stdout(&mut self, both: bool);

    /// Take the read side of a piped stdout. Only available after `start`.
    fn take_stdout(&mut self) -> Option<CommandInput>;

    /// Begin execution. Spawns the process or worker task.
    async fn start(&mut self) -> Result<(), ExecError>;

    /// Wait for completion, drain relay bridges, release descriptors.
    async fn wait(&mut self) -> Result<ExitStatus, ExecError>;

    /// `start` followed by `wait`.
    async fn run(&mut self) -> Result<ExitStatus, ExecError> {
        self.start().await?;
        self.wait().await
    }

    /// The exit status observed so far; 255 before completion.
    fn exit(&self) -> ExitStatus;
}

// ---------------------------------------------------------------------------
// External commands
// ---------------------------------------------------------------------------

/// An external process run through [`tokio::process::Command`].
pub struct ExternalCommand {
    /// argv[0] as typed by the user.
    name: String,
    /// Resolved program path.
    program: PathBuf,
    args: Vec<String>,
    cwd: PathBuf,
    envs: Vec<(String, String)>,
    stdin: CommandInput,
    stdout: OutputSink,
    stderr: OutputSink,
    pipe_requested: bool,
    pipe_both: bool,
    child: Option<Child>,
    piped_stdout: Option<CommandInput>,
    relays: Vec<JoinHandle<Result<(), std::io::Error>>>,
    cancel: CancellationToken,
    status: Option<ExitStatus>,
}

impl ExternalCommand {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<PathBuf>,
        args: Vec<String>,
        cwd: impl Into<PathBuf>,
        envs: Vec<(String, String)>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
            cwd: cwd.into(),
            envs,
            stdin: CommandInput::Inherit,
            stdout: OutputSink::Inherit,
            stderr: OutputSink::Inherit,
            pipe_requested: false,
            pipe_both: false,
            child: None,
            piped_stdout: None,
            relays: Vec::new(),
            cancel,
            status: None,
        }
    }

    fn stdio_for_input(input: &CommandInput) -> std::process::Stdio {
        match input {
            CommandInput::Inherit => std::process::Stdio::inherit(),
            CommandInput::Null => std::process::Stdio::null(),
            CommandInput::Reader(_) | CommandInput::Shared(_) => std::process::Stdio::piped(),
        }
    }

    fn stdio_for_output(sink: &OutputSink, piped: bool) -> std::process::Stdio {
        if piped {
            return std::process::Stdio::piped();
        }
        match sink {
            OutputSink::Inherit => std::process::Stdio::inherit(),
            OutputSink::Null => std::process::Stdio::null(),
            OutputSink::Capture(_) | OutputSink::Writer(_) => std::process::Stdio::piped(),
        }
    }
}

#[async_trait]
impl Command for ExternalCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> CommandKind {
        CommandKind::Regular
    }

    fn set_stdin(&mut self, input: CommandInput) {
        self.stdin = input;
    }

    fn set_stdout(&mut self, output: OutputSink) {
        self.stdout = output;
    }

    fn set_stderr(&mut self, output: OutputSink) {
        self.stderr = output;
    }

    fn pipe_stdout(&mut self, both: bool) {
        self.pipe_requested = true;
        self.pipe_both = both;
    }

    fn take_stdout(&mut self) -> Option<CommandInput> {
        self.piped_stdout.take()
    }

    async fn start(&mut self) -> Result<(), ExecError> {
        let mut process = tokio::process::Command::new(&self.program);
        process.args(&self.args);
        process.current_dir(&self.cwd);
        for (key, value) in &self.envs {
            process.env(key, value);
        }
        process.stdin(Self::stdio_for_input(&self.stdin));
        process.stdout(Self::stdio_for_output(&self.stdout, self.pipe_requested));
        process.stderr(Self::stdio_for_output(
            &self.stderr,
            self.pipe_requested && self.pipe_both,
        ));
        process.kill_on_drop(true);

        let mut child = process.spawn().map_err(|source| ExecError::Spawn {
            name: self.name.clone(),
            source,
        })?;

        // Bridge supplied stdin into the child.
        match std::mem::replace(&mut self.stdin, CommandInput::Null) {
            CommandInput::Reader(reader) => {
                if let Some(stdin) = child.stdin.take() {
                    self.relays.push(spawn_reader_relay(reader, stdin));
                }
            }
            CommandInput::Shared(shared) => {
                if let Some(stdin) = child.stdin.take() {
                    self.relays.push(spawn_shared_reader_relay(shared, stdin));
                }
            }
            _ => {}
        }

        if self.pipe_requested {
            // Hand the raw stdout to the next stage; with `both`, merge
            // stderr into the same stream through a shared writer.
            if self.pipe_both {
                let (read_half, write_half) = tokio::io::duplex(8192);
                let writer: SharedWriter = Arc::new(Mutex::new(Box::new(write_half)));
                if let Some(stdout) = child.stdout.take() {
                    self.relays.push(spawn_sink_relay(
                        stdout,
                        OutputSink::Writer(Arc::clone(&writer)),
                    ));
                }
                if let Some(stderr) = child.stderr.take() {
                    self.relays
                        .push(spawn_sink_relay(stderr, OutputSink::Writer(writer)));
                }
                self.piped_stdout = Some(CommandInput::Reader(Box::new(read_half)));
            } else if let Some(stdout) = child.stdout.take() {
                self.piped_stdout = Some(CommandInput::Reader(Box::new(stdout)));
            }
        } else {
            // Bridge stdout/stderr to non-file sinks.
            if matches!(self.stdout, OutputSink::Capture(_) | OutputSink::Writer(_)) {
                if let Some(stdout) = child.stdout.take() {
                    self.relays
                        .push(spawn_sink_relay(stdout, self.stdout.clone()));
                }
            }
        }
        if !(self.pipe_requested && self.pipe_both)
            && matches!(self.stderr, OutputSink::Capture(_) | OutputSink::Writer(_))
        {
            if let Some(stderr) = child.stderr.take() {
                self.relays
                    .push(spawn_sink_relay(stderr, self.stderr.clone()));
            }
        }

        self.child = Some(child);
        Ok(())
    }

    async fn wait(&mut self) -> Result<ExitStatus, ExecError> {
        let Some(mut child) = self.child.take() else {
            return Err(ExecError::Spawn {
                name: self.name.clone(),
                source: std::io::Error::other("command was not started"),
            });
        };

        let pid = child.id().map(|id| id as i32).unwrap_or(0);

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = self.cancel.cancelled() => {
                let _ = child.kill().await;
                for relay in self.relays.drain(..) {
                    relay.abort();
                }
                return Err(ExecError::Canceled);
            }
        };

        // Drain the copy bridges; their descriptors close here.
        for relay in self.relays.drain(..) {
            match relay.await {
                Ok(Ok(())) => {}
                // Broken pipes are normal when a downstream stage exits early.
                Ok(Err(err)) if err.kind() == std::io::ErrorKind::BrokenPipe => {}
                Ok(Err(err)) => return Err(ExecError::Io { source: err }),
                Err(_) => {}
            }
        }

        let exit = ExitStatus {
            pid,
            code: status.code().unwrap_or(255),
        };
        self.status = Some(exit);
        Ok(exit)
    }

    fn exit(&self) -> ExitStatus {
        self.status.unwrap_or(ExitStatus { pid: 0, code: 255 })
    }
}

// ---------------------------------------------------------------------------
// Relay tasks
// ---------------------------------------------------------------------------

/// Copy an owned reader into a child's stdin, closing it at EOF.
fn spawn_reader_relay(
    mut reader: Box<dyn AsyncRead + Send + Unpin>,
    mut stdin: tokio::process::ChildStdin,
) -> JoinHandle<Result<(), std::io::Error>> {
    tokio::spawn(async move {
        tokio::io::copy(&mut reader, &mut stdin).await?;
        stdin.shutdown().await
    })
}

/// Copy a shared reader into a child's stdin.
fn spawn_shared_reader_relay(
    shared: SharedReader,
    mut stdin: tokio::process::ChildStdin,
) -> JoinHandle<Result<(), std::io::Error>> {
    tokio::spawn(async move {
        let mut reader = shared.lock().await;
        tokio::io::copy(&mut *reader, &mut stdin).await?;
        stdin.shutdown().await
    })
}

/// Copy a stream into an output sink in chunks.
pub(crate) fn spawn_sink_relay(
    mut reader: impl AsyncRead + Send + Unpin + 'static,
    sink: OutputSink,
) -> JoinHandle<Result<(), std::io::Error>> {
    tokio::spawn(async move {
        let mut buffer = [0u8; 8192];
        loop {
            let read = reader.read(&mut buffer).await?;
            if read == 0 {
                return Ok(());
            }
            sink.write_all(&buffer[..read])
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
        }
    })
}
