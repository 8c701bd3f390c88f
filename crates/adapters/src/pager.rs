// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipe output through `$PAGER` when stdout is a terminal
//!
//! [`AutoPager`] is a [`Write`] sink. On a terminal it feeds a spawned pager
//! process; otherwise (or when the pager can't be found) it writes straight
//! to the fallback sink. A reader quitting the pager early is not an error.

use serde::Deserialize;
use std::io::{self, IsTerminal, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const DEFAULT_PAGER: &str = "pager";
pub const DEFAULT_LESS: &str = "FRX";

/// Pager command line and environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Program and arguments
    pub command: Vec<String>,
    /// Value for `LESS` in the pager's environment, if any
    pub less: Option<String>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            command: vec![DEFAULT_PAGER.to_string()],
            less: Some(DEFAULT_LESS.to_string()),
        }
    }
}

impl PagerConfig {
    /// `PAGER` (default `pager`), and `LESS=FRX` unless `LESS` is already set
    pub fn from_env() -> Self {
        let pager = std::env::var("PAGER").ok();
        let less = std::env::var("LESS").ok();
        Self::from_vars(pager.as_deref(), less.as_deref())
    }

    pub fn from_vars(pager: Option<&str>, less: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(pager) = pager.filter(|p| !p.trim().is_empty()) {
            config.command = split_command(pager);
        }
        if less.is_some_and(|l| !l.is_empty()) {
            config.less = None;
        }
        config
    }

    pub fn with_command(mut self, command: &str) -> Self {
        self.command = split_command(command);
        self
    }
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

/// Output sink that pages on a terminal
pub struct AutoPager {
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    fallback: Box<dyn Write + Send>,
    interrupt: Option<Arc<AtomicBool>>,
    closed: bool,
}

impl AutoPager {
    /// Page stdout with the environment's pager settings
    pub fn new() -> io::Result<Self> {
        Self::spawn(
            &PagerConfig::from_env(),
            io::stdout().is_terminal(),
            Box::new(io::stdout()),
        )
    }

    /// Start `config`'s pager if `tty`, else write to `fallback`
    ///
    /// A pager program that doesn't exist also falls back.
    pub fn spawn(
        config: &PagerConfig,
        tty: bool,
        fallback: Box<dyn Write + Send>,
    ) -> io::Result<Self> {
        let mut pager = Self {
            child: None,
            stdin: None,
            fallback,
            interrupt: None,
            closed: false,
        };
        if !tty {
            return Ok(pager);
        }
        let Some((program, args)) = config.command.split_first() else {
            return Ok(pager);
        };

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::piped());
        if let Some(less) = &config.less {
            command.env("LESS", less);
        }

        match command.spawn() {
            Ok(mut child) => {
                tracing::debug!(program, pid = child.id(), "pager started");
                pager.stdin = child.stdin.take();
                pager.child = Some(child);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(program, "pager not found, writing directly");
            }
            Err(e) => return Err(e),
        }
        Ok(pager)
    }

    /// Close on the next write once `flag` is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn is_paging(&self) -> bool {
        self.child.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Finish the pager's input and wait for it to exit
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let flushed = match self.stdin.take() {
            Some(mut stdin) => stdin.flush(),
            None => self.fallback.flush(),
        };
        match flushed {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("pager input closed early");
            }
            other => other?,
        }

        if let Some(mut child) = self.child.take() {
            loop {
                match child.wait() {
                    Ok(status) => {
                        tracing::debug!(%status, "pager exited");
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                        tracing::debug!("interrupted waiting for pager, retrying");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }

    /// Close after a quiet failure; the caller's write still "succeeds"
    fn close_quietly(&mut self, reason: &str) {
        tracing::debug!(reason, "closing pager");
        if let Err(e) = self.close() {
            tracing::debug!(error = %e, "error closing pager");
        }
    }
}

fn is_quiet(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::Interrupted
    )
}

impl Write for AutoPager {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.closed && self.interrupted() {
            self.close_quietly("interrupted");
        }
        if self.closed {
            return Ok(buf.len());
        }

        let written = match &mut self.stdin {
            Some(stdin) => stdin.write(buf),
            None => self.fallback.write(buf),
        };
        match written {
            Err(e) if is_quiet(&e) => {
                self.close_quietly(&e.to_string());
                Ok(buf.len())
            }
            other => other,
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        let flushed = match &mut self.stdin {
            Some(stdin) => stdin.flush(),
            None => self.fallback.flush(),
        };
        match flushed {
            Err(e) if is_quiet(&e) => {
                self.close_quietly(&e.to_string());
                Ok(())
            }
            other => other,
        }
    }
}

impl Drop for AutoPager {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to close pager");
        }
    }
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
