// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Small builtins: `true`, `false`, `seq`, `exit`, `alias`, `unalias`.

use super::super::error::ExecError;
use super::super::Shell;

pub(super) async fn true_cmd(_shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    Ok(0)
}

pub(super) async fn false_cmd(_shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    Ok(1)
}

/// `seq [first [step]] last` — print an inclusive integer sequence.
pub(super) async fn seq(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let mut numbers = Vec::with_capacity(3);
    for arg in &argv[1..] {
        match arg.parse::<i64>() {
            Ok(value) => numbers.push(value),
            Err(_) => {
                shell.write_err(&format!("seq: invalid number '{arg}'\n")).await?;
                return Ok(1);
            }
        }
    }

    let (first, step, last) = match numbers.as_slice() {
        [last] => (1, 1, *last),
        [first, last] => (*first, 1, *last),
        [first, step, last] => (*first, *step, *last),
        _ => {
            shell.write_err("seq: expected 1 to 3 arguments\n").await?;
            return Ok(1);
        }
    };
    if step == 0 {
        shell.write_err("seq: step must not be zero\n").await?;
        return Ok(1);
    }

    let step = if first <= last { step.abs() } else { -step.abs() };
    let mut parts = Vec::new();
    let mut current = first;
    loop {
        let done = if step > 0 { current > last } else { current < last };
        if done {
            break;
        }
        parts.push(current.to_string());
        current += step;
    }
    shell.write_out(&format!("{}\n", parts.join(" "))).await?;
    Ok(0)
}

/// `exit [code]` — terminate the execute loop with the given code.
pub(super) async fn exit_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let code = match argv.get(1) {
        Some(arg) => match arg.parse::<i32>() {
            Ok(code) => code,
            Err(_) => {
                shell.write_err(&format!("exit: invalid code '{arg}'\n")).await?;
                return Ok(1);
            }
        },
        None => shell.last_code(),
    };
    Err(ExecError::Exit { code })
}

/// `alias [name=script...]` — define aliases, or list them all.
pub(super) async fn alias_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    if argv.len() < 2 {
        let mut out = String::new();
        for (name, stored) in &shell.aliases {
            out.push_str(&format!("alias {}='{}'\n", name, stored.join(" ")));
        }
        shell.write_out(&out).await?;
        return Ok(0);
    }

    for arg in &argv[1..] {
        match arg.split_once('=') {
            Some((name, script)) => {
                let name = name.to_string();
                let script = script.to_string();
                if let Err(err) = shell.alias(&name, &script).await {
                    shell.write_err(&format!("alias: {err}\n")).await?;
                    return Ok(1);
                }
            }
            None => match shell.aliases.get(arg) {
                Some(stored) => {
                    let line = format!("alias {}='{}'\n", arg, stored.join(" "));
                    shell.write_out(&line).await?;
                }
                None => {
                    shell.write_err(&format!("alias: {arg}: not found\n")).await?;
                    return Ok(1);
                }
            },
        }
    }
    Ok(0)
}

/// `unalias name...` — remove aliases.
pub(super) async fn unalias_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    if argv.len() < 2 {
        shell.write_err("unalias: name required\n").await?;
        return Ok(1);
    }
    let mut code = 0;
    for name in &argv[1..] {
        if !shell.unalias(name) {
            shell.write_err(&format!("unalias: {name}: not found\n")).await?;
            code = 1;
        }
    }
    Ok(code)
}
