// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file replacement
//!
//! Writes go to `<path>.tmp<uuid>~` in the destination's directory and are
//! renamed over the destination on [`SafeWriter::commit`].

use std::ffi::OsString;
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SafeWriteError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy file stats from {}: {source}", path.display())]
    PreserveStats {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to commit {}: {source}", path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to discard {}: {source}", path.display())]
    Discard {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeWriteOptions {
    /// Copy permissions and timestamps of an existing destination to the temp file
    pub preserve_stats: bool,
}

impl Default for SafeWriteOptions {
    fn default() -> Self {
        Self {
            preserve_stats: true,
        }
    }
}

/// Writer that replaces its destination only when committed
///
/// Dropping an unfinished writer commits it.
#[derive(Debug)]
pub struct SafeWriter {
    file: Option<File>,
    path: PathBuf,
    temp_path: PathBuf,
}

impl SafeWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SafeWriteError> {
        Self::with_options(path, SafeWriteOptions::default())
    }

    pub fn with_options(
        path: impl AsRef<Path>,
        options: SafeWriteOptions,
    ) -> Result<Self, SafeWriteError> {
        let path = path.as_ref().to_path_buf();
        let temp_path = temp_path_for(&path);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|source| SafeWriteError::Create {
                path: temp_path.clone(),
                source,
            })?;

        let mut writer = Self {
            file: Some(file),
            path,
            temp_path,
        };
        if options.preserve_stats {
            if let Err(e) = writer.copy_stats() {
                if let Err(discard) = writer.discard() {
                    tracing::warn!(error = %discard, "failed to remove temp file");
                }
                return Err(e);
            }
        }

        tracing::debug!(
            path = %writer.path.display(),
            temp = %writer.temp_path.display(),
            "safe write started"
        );
        Ok(writer)
    }

    fn copy_stats(&mut self) -> Result<(), SafeWriteError> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(SafeWriteError::PreserveStats {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let Some(file) = &self.file else {
            return Ok(());
        };

        let copy = || -> io::Result<()> {
            file.set_permissions(metadata.permissions())?;
            let times = FileTimes::new()
                .set_accessed(metadata.accessed()?)
                .set_modified(metadata.modified()?);
            file.set_times(times)
        };
        copy().map_err(|source| SafeWriteError::PreserveStats {
            path: self.path.clone(),
            source,
        })
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// The open temp file, for adjusting its permissions before commit
    pub fn file(&self) -> Option<&File> {
        self.file.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.file.is_none()
    }

    /// Flush, sync and rename the temp file over the destination
    ///
    /// Calling this again after it succeeded does nothing.
    pub fn commit(&mut self) -> Result<(), SafeWriteError> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };
        let commit_err = |source| SafeWriteError::Commit {
            path: self.path.clone(),
            source,
        };

        file.flush().map_err(commit_err)?;
        file.sync_all().map_err(commit_err)?;
        drop(file);
        fs::rename(&self.temp_path, &self.path).map_err(commit_err)?;

        tracing::debug!(path = %self.path.display(), "safe write committed");
        Ok(())
    }

    /// Remove the temp file, leaving the destination untouched
    pub fn discard(&mut self) -> Result<(), SafeWriteError> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        drop(file);
        fs::remove_file(&self.temp_path).map_err(|source| SafeWriteError::Discard {
            path: self.temp_path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), "safe write discarded");
        Ok(())
    }
}

impl Write for SafeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.file {
            Some(file) => file.write(buf),
            None => Err(finished_error()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.file {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for SafeWriter {
    fn drop(&mut self) {
        if let Err(e) = self.commit() {
            tracing::warn!(error = %e, "safe write commit on drop failed");
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".tmp{}~", Uuid::new_v4()));
    PathBuf::from(name)
}

fn finished_error() -> io::Error {
    io::Error::other("safe writer already committed or discarded")
}

#[cfg(test)]
#[path = "safe_write_tests.rs"]
mod tests;
