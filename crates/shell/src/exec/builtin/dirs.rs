// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory builtins: `cd`, `pwd`, `pushd`, `popd`, `dirs`.

use std::path::PathBuf;

use super::super::error::ExecError;
use super::super::Shell;

pub(super) async fn cd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let target = match argv.get(1).map(String::as_str) {
        None => match ::dirs::home_dir() {
            Some(home) => home,
            None => {
                shell.write_err("cd: cannot determine home directory\n").await?;
                return Ok(1);
            }
        },
        Some("-") => {
            let previous = shell.old_dir().to_path_buf();
            shell.write_out(&format!("{}\n", previous.display())).await?;
            previous
        }
        Some(dir) => PathBuf::from(dir),
    };

    match shell.chdir(target) {
        Ok(()) => Ok(0),
        Err(err) => {
            shell.write_err(&format!("cd: {err}\n")).await?;
            Ok(1)
        }
    }
}

pub(super) async fn pwd(shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    let dir = shell.dir().display().to_string();
    shell.write_out(&format!("{dir}\n")).await?;
    Ok(0)
}

pub(super) async fn pushd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    match argv.get(1) {
        Some(dir) => {
            let previous = shell.dir().to_path_buf();
            if let Err(err) = shell.chdir(PathBuf::from(dir)) {
                shell.write_err(&format!("pushd: {err}\n")).await?;
                return Ok(1);
            }
            shell.dirstack.push(previous);
        }
        None => {
            // Without arguments, exchange the top of the stack with cwd.
            let Some(top) = shell.dirstack.pop() else {
                shell.write_err("pushd: no other directory\n").await?;
                return Ok(1);
            };
            let previous = shell.dir().to_path_buf();
            if let Err(err) = shell.chdir(top) {
                shell.write_err(&format!("pushd: {err}\n")).await?;
                return Ok(1);
            }
            shell.dirstack.push(previous);
        }
    }
    print_stack(shell).await?;
    Ok(0)
}

pub(super) async fn popd(shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    let Some(top) = shell.dirstack.pop() else {
        shell.write_err("popd: directory stack empty\n").await?;
        return Ok(1);
    };
    if let Err(err) = shell.chdir(top) {
        shell.write_err(&format!("popd: {err}\n")).await?;
        return Ok(1);
    }
    print_stack(shell).await?;
    Ok(0)
}

pub(super) async fn dirs_cmd(shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    print_stack(shell).await?;
    Ok(0)
}

/// Print cwd followed by the stack, most recent first.
async fn print_stack(shell: &Shell) -> Result<(), ExecError> {
    let mut line = shell.dir().display().to_string();
    for dir in shell.dirstack.iter().rev() {
        line.push(' ');
        line.push_str(&dir.display().to_string());
    }
    line.push('\n');
    shell.write_out(&line).await
}
