// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statement dispatch: simple commands, chains, pipelines, loops.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use crate::ast::{
    CondLoop, Conditional, Executer, ForLoop, Pipeline, Redirect, RedirectKind, SimpleCommand,
};

use super::builtin::{BuiltinCommand, StageWork};
use super::command::{Command, CommandInput, ExternalCommand, OutputSink};
use super::error::ExecError;
use super::{shared_writer, Shell, ShellInput};

/// Stdio overrides produced by a command's redirections.
#[derive(Default)]
pub(crate) struct RedirectIo {
    pub(crate) stdin: Option<CommandInput>,
    pub(crate) stdout: Option<OutputSink>,
    pub(crate) stderr: Option<OutputSink>,
}

impl Shell {
    /// Execute one statement and return its exit code.
    ///
    /// Boxed for async recursion: loops and chains re-enter, and command
    /// substitution re-enters from inside expansion.
    pub(crate) fn run_statement<'a>(
        &'a mut self,
        statement: &'a Executer,
    ) -> Pin<Box<dyn Future<Output = Result<i32, ExecError>> + Send + 'a>> {
        Box::pin(async move {
            if self.cancel.is_cancelled() {
                return Err(ExecError::Canceled);
            }
            match statement {
                Executer::Simple(cmd) => self.run_simple(cmd).await,
                Executer::Assign(assign) => {
                    let mut values = Vec::new();
                    for word in &assign.words {
                        values.extend(word.expand(self).await?);
                    }
                    self.define(&assign.ident, values)?;
                    Ok(0)
                }
                Executer::And { left, right } => {
                    let code = self.run_condition(left).await?;
                    if code == 0 {
                        self.run_condition(right).await
                    } else {
                        Ok(code)
                    }
                }
                Executer::Or { left, right } => {
                    let code = self.run_condition(left).await?;
                    if code != 0 {
                        self.run_condition(right).await
                    } else {
                        Ok(code)
                    }
                }
                Executer::Pipe(pipeline) => self.run_pipeline(pipeline).await,
                Executer::For(for_loop) => self.run_for(for_loop).await,
                Executer::While(cond_loop) => self.run_cond_loop(cond_loop, false).await,
                Executer::Until(cond_loop) => self.run_cond_loop(cond_loop, true).await,
                Executer::If(conditional) => self.run_if(conditional).await,
                Executer::Test(test) => match test.tester.test(self).await? {
                    true => Ok(0),
                    false => Ok(1),
                },
            }
        })
    }

    /// Run a statement whose outcome is judged by exit code: soft errors
    /// (command not found, failed test, bad expansion) report and become a
    /// non-zero code instead of aborting.
    pub(crate) async fn run_condition(&mut self, statement: &Executer) -> Result<i32, ExecError> {
        match self.run_statement(statement).await {
            Ok(code) => Ok(code),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                self.report_error(&err).await;
                Ok(err.code())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Simple commands
    // -----------------------------------------------------------------------

    async fn run_simple(&mut self, cmd: &SimpleCommand) -> Result<i32, ExecError> {
        let start = Instant::now();
        let mut argv = Vec::new();
        for word in &cmd.words {
            argv.extend(word.expand(self).await?);
        }
        if argv.is_empty() {
            return Err(ExecError::Empty);
        }
        let argv = self.substitute_alias(argv);

        if self.echo {
            let line = argv.join(" ");
            self.write_out(&format!("{line}\n")).await?;
        }

        let span = tracing::info_span!(
            "shell.cmd",
            cmd = %argv[0],
            args = ?&argv[1..],
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let io = self.open_redirects(&cmd.redirects).await?;
        let code = self.dispatch_argv(argv, io).await?;

        span.record("exit_code", code);
        span.record("duration_ms", start.elapsed().as_millis() as u64);
        Ok(code)
    }

    /// Resolve and run an expanded argv: builtin, user command, external.
    async fn dispatch_argv(
        &mut self,
        argv: Vec<String>,
        io: RedirectIo,
    ) -> Result<i32, ExecError> {
        let name = argv[0].clone();

        if let Some(entry) = self.builtins.get(name.as_str()) {
            if entry.enabled {
                let func = entry.def.func;
                return self.run_builtin_inline(func, &argv, io).await;
            }
        }

        if self.commands.contains_key(&name) {
            return self.run_user_command(&name, &argv[1..], io).await;
        }

        self.run_external(&argv, io).await
    }

    /// One level of alias substitution on argv\[0\].
    fn substitute_alias(&self, mut argv: Vec<String>) -> Vec<String> {
        if let Some(stored) = self.aliases.get(&argv[0]) {
            tracing::debug!(alias = %argv[0], "alias substitution");
            let mut substituted = stored.clone();
            substituted.extend(argv.drain(1..));
            return substituted;
        }
        argv
    }

    /// Run a builtin inline so it can mutate this shell, with redirections
    /// temporarily swapped into the shell's stdio.
    async fn run_builtin_inline(
        &mut self,
        func: super::builtin::BuiltinFn,
        argv: &[String],
        io: RedirectIo,
    ) -> Result<i32, ExecError> {
        let saved_stdin = self.stdin.clone();
        let saved_stdout = self.stdout.clone();
        let saved_stderr = self.stderr.clone();

        if let Some(input) = io.stdin {
            self.stdin = match input {
                CommandInput::Inherit => ShellInput::Inherit,
                CommandInput::Null => ShellInput::Null,
                CommandInput::Reader(reader) => {
                    ShellInput::Shared(Arc::new(Mutex::new(reader)))
                }
                CommandInput::Shared(shared) => ShellInput::Shared(shared),
            };
        }
        if let Some(sink) = io.stdout {
            self.stdout = sink;
        }
        if let Some(sink) = io.stderr {
            self.stderr = sink;
        }

        let result = func(self, argv).await;

        self.stdin = saved_stdin;
        self.stdout = saved_stdout;
        self.stderr = saved_stderr;
        result
    }

    /// Run a registered user command in a child scope with positional args.
    pub(crate) async fn run_user_command(
        &mut self,
        name: &str,
        args: &[String],
        io: RedirectIo,
    ) -> Result<i32, ExecError> {
        let Some(statements) = self.commands.get(name).cloned() else {
            return Err(ExecError::NotFound {
                name: name.to_string(),
            });
        };

        let saved_env = self.env.clone();
        let saved_stdout = self.stdout.clone();
        let saved_stderr = self.stderr.clone();
        self.env = self.env.child();
        if let Some(sink) = io.stdout {
            self.stdout = sink;
        }
        if let Some(sink) = io.stderr {
            self.stderr = sink;
        }

        let bind = self.env.define("0", vec![name.to_string()]).and_then(|_| {
            for (index, arg) in args.iter().enumerate() {
                self.env.define(&(index + 1).to_string(), vec![arg.clone()])?;
            }
            self.env.define("#", vec![args.len().to_string()])
        });

        let mut result = match bind {
            Ok(()) => Ok(0),
            Err(err) => Err(err),
        };
        if result.is_ok() {
            for statement in &statements {
                match self.run_condition(statement).await {
                    Ok(code) => result = Ok(code),
                    Err(err) => {
                        result = Err(err);
                        break;
                    }
                }
            }
        }

        self.env = saved_env;
        self.stdout = saved_stdout;
        self.stderr = saved_stderr;
        result
    }

    /// Spawn an external command wired to the shell's stdio.
    pub(crate) async fn run_external(
        &mut self,
        argv: &[String],
        io: RedirectIo,
    ) -> Result<i32, ExecError> {
        let name = &argv[0];
        let mut command = self.external_command(argv)?;
        command.set_stdin(io.stdin.unwrap_or_else(|| self.stdin_handle()));
        command.set_stdout(io.stdout.unwrap_or_else(|| self.stdout.clone()));
        command.set_stderr(io.stderr.unwrap_or_else(|| self.stderr.clone()));
        let status = command.run().await?;
        tracing::debug!(cmd = %name, pid = status.pid, code = status.code, "external command finished");
        Ok(status.code)
    }

    /// Resolve argv\[0\] through the finder and build the process command.
    pub(crate) fn external_command(&self, argv: &[String]) -> Result<ExternalCommand, ExecError> {
        let name = &argv[0];
        let path_value = self
            .env
            .resolve("PATH")
            .map(|values| values.concat())
            .unwrap_or_default();
        let Some(program) = self.finder.find(name, &path_value) else {
            tracing::debug!(cmd = %name, "command resolution miss");
            return Err(ExecError::NotFound { name: name.clone() });
        };
        Ok(ExternalCommand::new(
            name,
            program,
            argv[1..].to_vec(),
            self.cwd.clone(),
            self.env.exported_pairs(),
            self.cancel.clone(),
        ))
    }

    // -----------------------------------------------------------------------
    // Pipelines
    // -----------------------------------------------------------------------

    /// Run a pipeline: expand all stages, spawn them concurrently, wire
    /// stdout to stdin, and wait for everything. The exit code is the
    /// rightmost stage's.
    async fn run_pipeline(&mut self, pipeline: &Pipeline) -> Result<i32, ExecError> {
        let span = tracing::info_span!(
            "shell.pipe",
            stages = pipeline.items.len(),
            exit_code = tracing::field::Empty,
        );

        // Phase 1: expand every stage sequentially. `:=` may define
        // variables, so later stages see earlier definitions.
        struct Stage {
            command: Box<dyn Command>,
            both: bool,
            io: RedirectIo,
        }

        let mut stages: Vec<Stage> = Vec::with_capacity(pipeline.items.len());
        for item in &pipeline.items {
            let Executer::Simple(cmd) = &item.exec else {
                return Err(ExecError::Expansion {
                    reason: "pipelines accept only simple commands".to_string(),
                });
            };
            let mut argv = Vec::new();
            for word in &cmd.words {
                argv.extend(word.expand(self).await?);
            }
            if argv.is_empty() {
                return Err(ExecError::Empty);
            }
            let argv = self.substitute_alias(argv);
            let io = self.open_redirects(&cmd.redirects).await?;
            let command = self.stage_command(argv)?;
            stages.push(Stage {
                command,
                both: item.both,
                io,
            });
        }

        // Phase 2: wire and start in order, handing each stage's stdout to
        // the next stage's stdin.
        let count = stages.len();
        let mut carried: Option<CommandInput> = None;
        for (index, stage) in stages.iter_mut().enumerate() {
            let stdin = match (carried.take(), stage.io.stdin.take()) {
                (_, Some(redirected)) => redirected,
                (Some(previous), None) => previous,
                (None, None) if index == 0 => self.stdin_handle(),
                (None, None) => CommandInput::Null,
            };
            stage.command.set_stdin(stdin);

            let redirected_out = stage.io.stdout.take();
            if index < count - 1 && redirected_out.is_none() {
                stage.command.pipe_stdout(stage.both);
            } else {
                stage
                    .command
                    .set_stdout(redirected_out.unwrap_or_else(|| self.stdout.clone()));
            }
            stage.command.set_stderr(
                stage
                    .io
                    .stderr
                    .take()
                    .unwrap_or_else(|| self.stderr.clone()),
            );

            stage.command.start().await?;
            if index < count - 1 {
                carried = stage.command.take_stdout();
            }
        }

        // Phase 3: wait for all stages concurrently.
        let mut handles = Vec::with_capacity(count);
        for stage in stages {
            let mut command = stage.command;
            handles.push(tokio::spawn(async move { command.wait().await }));
        }

        let mut code = 0;
        let mut failure: Option<ExecError> = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(status)) => code = status.code,
                Ok(Err(err)) => failure = Some(err),
                Err(join_err) => {
                    failure = Some(ExecError::Io {
                        source: std::io::Error::other(join_err.to_string()),
                    })
                }
            }
        }

        span.record("exit_code", code);
        match failure {
            Some(err) => Err(err),
            None => Ok(code),
        }
    }

    /// Build the Command for one pipeline stage. Builtins and user commands
    /// run as workers over a subshell clone; their mutations stay in the
    /// stage.
    fn stage_command(&mut self, argv: Vec<String>) -> Result<Box<dyn Command>, ExecError> {
        let name = argv[0].clone();

        if let Some(entry) = self.builtins.get(name.as_str()) {
            if entry.enabled {
                let func = entry.def.func;
                let work: StageWork =
                    Box::new(move |shell| Box::pin(async move { func(shell, &argv).await }));
                return Ok(Box::new(BuiltinCommand::builtin(
                    name,
                    self.subshell(),
                    work,
                    self.cancel.clone(),
                )));
            }
        }

        if self.commands.contains_key(&name) {
            let work: StageWork = Box::new(move |shell| {
                Box::pin(async move {
                    let invocation = argv;
                    shell
                        .run_user_command(&invocation[0], &invocation[1..], RedirectIo::default())
                        .await
                })
            });
            return Ok(Box::new(BuiltinCommand::script(
                name,
                self.subshell(),
                work,
                self.cancel.clone(),
            )));
        }

        Ok(Box::new(self.external_command(&argv)?))
    }

    // -----------------------------------------------------------------------
    // Redirections
    // -----------------------------------------------------------------------

    /// Expand redirect targets and open their files.
    async fn open_redirects(&mut self, redirects: &[Redirect]) -> Result<RedirectIo, ExecError> {
        let mut io = RedirectIo::default();
        for redirect in redirects {
            let mut targets = redirect.target.expand(self).await?;
            if targets.len() != 1 {
                return Err(ExecError::Expansion {
                    reason: format!(
                        "redirection target expanded to {} words, expected one",
                        targets.len()
                    ),
                });
            }
            let target = targets.remove(0);
            let path = if target.starts_with('/') {
                std::path::PathBuf::from(&target)
            } else {
                self.cwd.join(&target)
            };

            match redirect.kind {
                RedirectKind::In => {
                    let file = tokio::fs::File::open(&path).await?;
                    io.stdin = Some(CommandInput::Reader(Box::new(file)));
                }
                RedirectKind::Out | RedirectKind::AppendOut => {
                    let file = open_target(&path, redirect.kind).await?;
                    io.stdout = Some(OutputSink::Writer(shared_writer(file)));
                }
                RedirectKind::Err | RedirectKind::AppendErr => {
                    let file = open_target(&path, redirect.kind).await?;
                    io.stderr = Some(OutputSink::Writer(shared_writer(file)));
                }
                RedirectKind::Both | RedirectKind::AppendBoth => {
                    let file = open_target(&path, redirect.kind).await?;
                    let sink = OutputSink::Writer(shared_writer(file));
                    io.stdout = Some(sink.clone());
                    io.stderr = Some(sink);
                }
            }
        }
        Ok(io)
    }

    // -----------------------------------------------------------------------
    // Control structures
    // -----------------------------------------------------------------------

    async fn run_for(&mut self, for_loop: &ForLoop) -> Result<i32, ExecError> {
        let mut items = Vec::new();
        for word in &for_loop.iter {
            items.extend(word.expand(self).await?);
        }

        if items.is_empty() {
            return self.run_body(&for_loop.alt).await;
        }

        let mut code = 0;
        for item in items {
            if self.cancel.is_cancelled() {
                return Err(ExecError::Canceled);
            }
            self.define(&for_loop.ident, vec![item])?;
            code = self.run_body(&for_loop.body).await?;
        }
        Ok(code)
    }

    async fn run_cond_loop(&mut self, cond_loop: &CondLoop, until: bool) -> Result<i32, ExecError> {
        let mut code = 0;
        loop {
            if self.cancel.is_cancelled() {
                return Err(ExecError::Canceled);
            }
            let cond = self.run_condition(&cond_loop.cond).await?;
            let proceed = if until { cond != 0 } else { cond == 0 };
            if !proceed {
                return Ok(code);
            }
            code = self.run_body(&cond_loop.body).await?;
        }
    }

    async fn run_if(&mut self, conditional: &Conditional) -> Result<i32, ExecError> {
        let cond = self.run_condition(&conditional.cond).await?;
        if cond == 0 {
            self.run_body(&conditional.then).await
        } else {
            self.run_body(&conditional.alt).await
        }
    }

    /// Run a statement body; statements recover like the top level.
    async fn run_body(&mut self, body: &[Executer]) -> Result<i32, ExecError> {
        let mut code = 0;
        for statement in body {
            code = self.run_condition(statement).await?;
        }
        Ok(code)
    }
}

/// Open an output redirect target, truncating or appending.
async fn open_target(
    path: &std::path::Path,
    kind: RedirectKind,
) -> Result<tokio::fs::File, ExecError> {
    let append = matches!(
        kind,
        RedirectKind::AppendOut | RedirectKind::AppendErr | RedirectKind::AppendBoth
    );
    let file = tokio::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .await?;
    Ok(file)
}
