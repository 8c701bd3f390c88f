// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack lock`: run a command unless another copy already holds its lock

use super::Context;
use anyhow::{bail, Context as _, Result};
use knack_adapters::RuntimeLock;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};

#[derive(clap::Args)]
pub struct LockArgs {
    /// Lock name (default: the command's file name)
    #[arg(long)]
    name: Option<String>,

    /// Directory for the lock file
    #[arg(long)]
    lock_dir: Option<PathBuf>,

    /// Command and arguments to run while holding the lock
    #[arg(last = true, required = true)]
    command: Vec<String>,
}

pub fn handle(args: LockArgs, ctx: &Context) -> Result<ExitCode> {
    let Some((program, program_args)) = args.command.split_first() else {
        bail!("no command given");
    };

    let mut config = ctx.config.lock.clone();
    if let Some(name) = args.name {
        config.name = Some(name);
    } else if config.name.is_none() {
        config.name = Path::new(program)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
    }
    if let Some(dir) = args.lock_dir {
        config.lock_dir = Some(dir);
    }

    let mut lock = RuntimeLock::acquire(&config)?;
    let status = Command::new(program)
        .args(program_args)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    lock.release()?;

    tracing::debug!(%status, "locked command finished");
    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> ExitCode {
    match (status.code(), status.signal()) {
        (Some(code), _) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        (None, Some(signal)) => ExitCode::from(u8::try_from(128 + signal).unwrap_or(1)),
        (None, None) => ExitCode::FAILURE,
    }
}
