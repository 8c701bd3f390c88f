// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for process, file and terminal I/O

pub mod lock;
pub mod pager;
pub mod readiter;
pub mod safe_write;

pub use lock::{LockConfig, LockError, RuntimeLock};
pub use pager::{AutoPager, PagerConfig};
pub use readiter::{read_chunks, ReadChunks, DEFAULT_CHUNK_SIZE};
pub use safe_write::{SafeWriteError, SafeWriteOptions, SafeWriter};
