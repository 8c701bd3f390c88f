// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod cron;
pub mod ewma;
pub mod lock;
pub mod numfmt;
pub mod smwrand;
pub mod werder;
pub mod write;

use crate::config::Config;
use knack_adapters::AutoPager;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status after Ctrl-C, as a shell reports SIGINT
pub const INTERRUPTED_EXIT: i32 = 130;

/// State shared by every command
pub struct Context {
    pub config: Config,
    /// Set by the Ctrl-C handler
    pub interrupt: Arc<AtomicBool>,
}

impl Context {
    /// Stdout, paged when configured and attached to a terminal
    ///
    /// Ctrl-C is caught only while a pager runs; otherwise it keeps its default.
    pub fn output(&self) -> anyhow::Result<AutoPager> {
        let tty = self.config.pager.enabled && io::stdout().is_terminal();
        let pager = AutoPager::spawn(
            &self.config.pager.pager_config(),
            tty,
            Box::new(io::stdout()),
        )?;
        if !pager.is_paging() {
            return Ok(pager);
        }

        let flag = Arc::clone(&self.interrupt);
        set_interrupt_handler(move || flag.store(true, Ordering::SeqCst))?;
        Ok(pager.with_interrupt(Arc::clone(&self.interrupt)))
    }

    /// On Ctrl-C, remove `path` and exit with [`INTERRUPTED_EXIT`]
    ///
    /// Exiting from the handler stops a read that is blocked on stdin.
    pub fn remove_on_interrupt(&self, path: PathBuf) -> anyhow::Result<()> {
        set_interrupt_handler(move || {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "no temp file to remove");
            }
            process::exit(INTERRUPTED_EXIT);
        })
    }
}

fn set_interrupt_handler(handler: impl FnMut() + Send + 'static) -> anyhow::Result<()> {
    match ctrlc::set_handler(handler) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Parse whitespace-separated numbers from stdin, for commands given no arguments
pub fn read_numbers(input: impl BufRead) -> anyhow::Result<Vec<f64>> {
    let mut numbers = Vec::new();
    for line in input.lines() {
        for word in line?.split_whitespace() {
            let n = word
                .parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid number {word:?}: {e}"))?;
            numbers.push(n);
        }
    }
    Ok(numbers)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
