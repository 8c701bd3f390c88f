// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! knack - a grab bag of small utilities

mod commands;
mod completions;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{cron, ewma, lock, numfmt, smwrand, werder, write, Context};
use config::Config;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Log filter variable
const LOG_ENV: &str = "KNACK_LOG";

#[derive(Parser)]
#[command(name = "knack", version, about = "A grab bag of small utilities")]
struct Cli {
    /// Never pipe output through a pager
    #[arg(long, global = true)]
    no_pager: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a hashed cron expression and list its firing times
    Cron(cron::CronArgs),
    /// Exponentially-weighted moving average of a series
    Ewma(ewma::EwmaArgs),
    /// Format numbers with magnitude prefixes
    Numfmt(numfmt::NumfmtArgs),
    /// Generate pronounceable nonsense sentences
    Werder(werder::WerderArgs),
    /// Print Super Mario World RNG output
    Smwrand(smwrand::SmwrandArgs),
    /// Run a command while holding a runtime lock
    Lock(lock::LockArgs),
    /// Replace a file with stdin, atomically
    Write(write::WriteArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell, &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load()?;
    if cli.no_pager {
        config.pager.enabled = false;
    }

    let ctx = Context {
        config,
        interrupt: Arc::new(AtomicBool::new(false)),
    };
    match cli.command {
        Commands::Cron(args) => cron::handle(args, &ctx)?,
        Commands::Ewma(args) => ewma::handle(args, &ctx)?,
        Commands::Numfmt(args) => numfmt::handle(args, &ctx)?,
        Commands::Werder(args) => werder::handle(args, &ctx)?,
        Commands::Smwrand(args) => smwrand::handle(args, &ctx)?,
        Commands::Lock(args) => return lock::handle(args, &ctx),
        Commands::Write(args) => write::handle(args, &ctx)?,
        Commands::Completions(_) => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
