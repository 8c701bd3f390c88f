// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-size chunked reads

use std::io::{self, Read};

pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Iterator over `size`-byte chunks of a reader; only the last chunk may be short
pub fn read_chunks<R: Read>(reader: R, size: usize) -> ReadChunks<R> {
    ReadChunks {
        reader,
        size,
        done: false,
    }
}

#[derive(Debug)]
pub struct ReadChunks<R> {
    reader: R,
    size: usize,
    done: bool,
}

impl<R> ReadChunks<R> {
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for ReadChunks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = vec![0; self.size];
        let mut filled = 0;
        while filled < self.size {
            match self.reader.read(&mut chunk[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        if filled < self.size {
            self.done = true;
        }
        if filled == 0 {
            return None;
        }
        chunk.truncate(filled);
        Some(Ok(chunk))
    }
}

#[cfg(test)]
#[path = "readiter_tests.rs"]
mod tests;
