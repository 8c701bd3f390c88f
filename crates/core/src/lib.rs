// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! knack-core: pure, self-contained utilities
//!
//! This crate provides:
//! - Jenkins-style `H`/`R` cron expansion and a cron iterator
//! - An exponentially-weighted moving average accumulator
//! - Decimal/binary magnitude number formatting
//! - A bit-exact reproduction of the Super Mario World RNG
//! - A pronounceable random word generator
//!
//! None of these modules depend on each other.

pub mod cron;
pub mod ewma;
pub mod numfmt;
pub mod smwrand;
pub mod werder;

// Re-exports
pub use cron::{expand, CronError, CronIter, CronSchedule, HashId};
pub use ewma::Ewma;
pub use numfmt::{numfmt, FormattedNumber, NumFmt};
pub use smwrand::SmwRand;
pub use werder::{Werder, WerderConfig, WerderError};
