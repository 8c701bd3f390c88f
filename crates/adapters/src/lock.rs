// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-instance runtime lock
//!
//! Holds an exclusive advisory lock on `<lock_dir>/<name>.lock` for the
//! lifetime of a [`RuntimeLock`]. The file contains the holder's PID.

use fs2::FileExt;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the lock directory search
pub const LOCK_DIR_ENV: &str = "KNACK_LOCK_DIR";

const LOCK_DIR_CANDIDATES: [&str; 5] = ["/run/lock", "/var/lock", "/run", "/var/run", "/tmp"];

#[derive(Debug, Error)]
pub enum LockError {
    #[error("no suitable lock directory found")]
    NoLockDir,

    #[error("already locked: {}", path.display())]
    Busy { path: PathBuf },

    #[error("lock file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Lock name; defaults to the program name
    pub name: Option<String>,
    /// Directory for the lock file; defaults to the first system lock dir found
    pub lock_dir: Option<PathBuf>,
}

impl LockConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            lock_dir: None,
        }
    }

    pub fn with_lock_dir(mut self, lock_dir: impl Into<PathBuf>) -> Self {
        self.lock_dir = Some(lock_dir.into());
        self
    }

    fn resolve_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        std::env::args_os()
            .next()
            .as_deref()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
    }

    fn resolve_lock_dir(&self) -> Result<PathBuf, LockError> {
        if let Some(dir) = &self.lock_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = std::env::var_os(LOCK_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        LOCK_DIR_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|dir| dir.exists())
            .ok_or(LockError::NoLockDir)
    }

    /// Path of the lock file this config resolves to
    pub fn lock_path(&self) -> Result<PathBuf, LockError> {
        let dir = self.resolve_lock_dir()?;
        Ok(dir.join(format!("{}.lock", self.resolve_name())))
    }
}

/// An acquired runtime lock, released on drop
#[derive(Debug)]
pub struct RuntimeLock {
    file: Option<File>,
    path: PathBuf,
}

impl RuntimeLock {
    /// Take the lock without blocking, failing with [`LockError::Busy`] when held elsewhere
    pub fn acquire(config: &LockConfig) -> Result<Self, LockError> {
        let path = config.lock_path()?;
        let io_err = |source| LockError::Io {
            path: path.clone(),
            source,
        };

        // Don't truncate before holding the lock; another holder's PID lives there
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(io_err)?;

        if let Err(e) = file.try_lock_exclusive() {
            if is_contended(&e) {
                return Err(LockError::Busy { path: path.clone() });
            }
            return Err(io_err(e));
        }

        file.set_len(0).map_err(io_err)?;
        writeln!(file, "{:>10}", std::process::id()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        file.seek(SeekFrom::Start(0)).map_err(io_err)?;

        tracing::info!(path = %path.display(), pid = std::process::id(), "lock acquired");
        Ok(Self {
            file: Some(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    /// Unlock and remove the lock file; later calls do nothing
    pub fn release(&mut self) -> Result<(), LockError> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        // Unlink before unlocking
        let removed = std::fs::remove_file(&self.path);
        drop(file);
        removed.map_err(|source| LockError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "lock released");
        Ok(())
    }
}

impl Drop for RuntimeLock {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "failed to release lock");
        }
    }
}

fn is_contended(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::WouldBlock
        || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
