// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Introspection builtins: `help`, `builtins`, `type`, `command`,
//! `builtin`, `enable`.

use super::super::error::ExecError;
use super::super::run::RedirectIo;
use super::super::Shell;

/// `help [name]` — list builtins, or show one builtin's usage.
pub(super) async fn help(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    match argv.get(1) {
        Some(name) => match shell.builtins.get(name.as_str()) {
            Some(entry) => {
                let text = format!("{}\n    {}\n", entry.def.usage, entry.def.summary);
                shell.write_out(&text).await?;
                Ok(0)
            }
            None => {
                shell.write_err(&format!("help: {name}: not a builtin\n")).await?;
                Ok(1)
            }
        },
        None => {
            let mut out = String::new();
            for entry in shell.builtins.values() {
                out.push_str(&format!("{:<12} {}\n", entry.def.name, entry.def.summary));
            }
            shell.write_out(&out).await?;
            Ok(0)
        }
    }
}

/// `builtins` — list builtin names, marking disabled ones.
pub(super) async fn builtins(shell: &mut Shell, _argv: &[String]) -> Result<i32, ExecError> {
    let mut out = String::new();
    for entry in shell.builtins.values() {
        out.push_str(entry.def.name);
        if !entry.enabled {
            out.push_str(" (disabled)");
        }
        out.push('\n');
    }
    shell.write_out(&out).await?;
    Ok(0)
}

/// `builtin name [args...]` — run a builtin directly, bypassing aliases,
/// user commands, and PATH.
pub(super) async fn builtin_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let Some(name) = argv.get(1) else {
        shell.write_err("builtin: name required\n").await?;
        return Ok(1);
    };
    let Some(entry) = shell.builtins.get(name.as_str()).copied() else {
        shell.write_err(&format!("builtin: {name}: not a builtin\n")).await?;
        return Ok(1);
    };
    (entry.def.func)(shell, &argv[1..]).await
}

/// `command name [args...]` — run bypassing aliases and user commands:
/// builtins first, then PATH.
pub(super) async fn command_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let Some(name) = argv.get(1) else {
        shell.write_err("command: name required\n").await?;
        return Ok(1);
    };
    if let Some(entry) = shell.builtins.get(name.as_str()).copied() {
        if entry.enabled {
            return (entry.def.func)(shell, &argv[1..]).await;
        }
    }
    shell.run_external(&argv[1..], RedirectIo::default()).await
}

/// `type name...` — describe how each name would resolve.
pub(super) async fn type_cmd(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    if argv.len() < 2 {
        shell.write_err("type: name required\n").await?;
        return Ok(1);
    }

    let mut code = 0;
    for name in &argv[1..] {
        if let Some(stored) = shell.aliases.get(name) {
            let line = format!("{} is an alias for '{}'\n", name, stored.join(" "));
            shell.write_out(&line).await?;
        } else if shell.builtins.get(name.as_str()).is_some_and(|e| e.enabled) {
            shell.write_out(&format!("{name} is a shell builtin\n")).await?;
        } else if shell.commands.contains_key(name.as_str()) {
            shell.write_out(&format!("{name} is a user command\n")).await?;
        } else {
            let path_value = shell
                .env
                .resolve("PATH")
                .map(|values| values.concat())
                .unwrap_or_default();
            match shell.finder.find(name, &path_value) {
                Some(path) => {
                    shell.write_out(&format!("{} is {}\n", name, path.display())).await?;
                }
                None => {
                    shell.write_err(&format!("type: {name}: not found\n")).await?;
                    code = 1;
                }
            }
        }
    }
    Ok(code)
}

/// `enable [-n] [name]` — enable or disable builtins; `-f` (dynamic
/// loading) is not supported.
pub(super) async fn enable(shell: &mut Shell, argv: &[String]) -> Result<i32, ExecError> {
    let mut args = &argv[1..];
    let mut disable = false;

    match args.first().map(String::as_str) {
        Some("-f") => {
            shell.write_err("enable: -f: dynamic loading not supported\n").await?;
            return Ok(1);
        }
        Some("-n") => {
            disable = true;
            args = &args[1..];
        }
        _ => {}
    }

    if args.is_empty() {
        let mut out = String::new();
        for entry in shell.builtins.values() {
            if entry.enabled {
                out.push_str(&format!("enable {}\n", entry.def.name));
            }
        }
        shell.write_out(&out).await?;
        return Ok(0);
    }

    for name in args {
        match shell.builtins.get_mut(name.as_str()) {
            Some(entry) => entry.enabled = !disable,
            None => {
                shell.write_err(&format!("enable: {name}: not a builtin\n")).await?;
                return Ok(1);
            }
        }
    }
    Ok(0)
}
