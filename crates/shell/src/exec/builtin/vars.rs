// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable builtins: `env`, `export`, `readonly`.

use std::collections::BTreeMap;

use super::super::error::ExecError;
use super::super::Shell;

/// Print the environment a spawned process would receive: the process
/// environment overlaid with the shell's exported variables.
pub(super) async fn env_cmd(shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    let mut merged: BTreeMap<String, String> = std::env::vars().collect();
    for (name, value) in shell.env.exported_pairs() {
        merged.insert(name, value);
    }

    let mut out = String::new();
    for (name, value) in merged {
        out.push_str(&name);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    shell.write_out(&out).await?;
    Ok(0)
}

/// `export [-n] name[=value]...` — mark (or unmark) names for propagation.
pub(super) async fn export_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let mut args = &argv[1..];
    let unexport = args.first().map(String::as_str) == Some("-n");
    if unexport {
        args = &args[1..];
    }
    if args.is_empty() {
        shell.write_err("export: name required\n").await?;
        return Ok(1);
    }

    for arg in args {
        let (name, value) = split_assignment(arg);
        let result = (|| {
            if let Some(value) = value {
                shell.env.define(name, vec![value.to_string()])?;
            }
            if unexport {
                shell.env.unexport(name)
            } else {
                shell.env.export(name)
            }
        })();
        if let Err(err) = result {
            shell.write_err(&format!("export: {err}\n")).await?;
            return Ok(1);
        }
    }
    Ok(0)
}

/// `readonly name[=value]...` — mark names as non-modifiable.
pub(super) async fn readonly_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    if argv.len() < 2 {
        shell.write_err("readonly: name required\n").await?;
        return Ok(1);
    }

    for arg in &argv[1..] {
        let (name, value) = split_assignment(arg);
        let result = (|| {
            if let Some(value) = value {
                shell.env.define(name, vec![value.to_string()])?;
            }
            shell.env.set_readonly(name)
        })();
        if let Err(err) = result {
            shell.write_err(&format!("readonly: {err}\n")).await?;
            return Ok(1);
        }
    }
    Ok(0)
}

/// Split `name=value` on the first `=`; a bare name has no value.
fn split_assignment(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (arg, None),
    }
}
