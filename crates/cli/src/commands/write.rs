// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack write`: soak up stdin and atomically replace a file with it

use super::Context;
use anyhow::{Context as _, Result};
use knack_adapters::{read_chunks, SafeWriteOptions, SafeWriter, DEFAULT_CHUNK_SIZE};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct WriteArgs {
    /// File to replace
    path: PathBuf,

    /// Don't carry over the existing file's permissions and timestamps
    #[arg(long)]
    no_preserve_stats: bool,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

pub fn handle(args: WriteArgs, ctx: &Context) -> Result<()> {
    let options = SafeWriteOptions {
        preserve_stats: !args.no_preserve_stats,
    };
    let mut writer = SafeWriter::with_options(&args.path, options)?;
    ctx.remove_on_interrupt(writer.temp_path().to_path_buf())?;

    match copy(std::io::stdin().lock(), &mut writer, args.chunk_size) {
        Ok(bytes) => {
            writer.commit()?;
            tracing::debug!(path = %args.path.display(), bytes, "wrote file");
            Ok(())
        }
        Err(e) => {
            writer.discard()?;
            Err(e)
        }
    }
}

fn copy(input: impl Read, writer: &mut SafeWriter, chunk_size: usize) -> Result<usize> {
    let mut total = 0;
    for chunk in read_chunks(input, chunk_size.max(1)) {
        let chunk = chunk.context("failed to read stdin")?;
        writer.write_all(&chunk)?;
        total += chunk.len();
    }
    Ok(total)
}
