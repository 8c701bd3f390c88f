// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron expressions with Jenkins-style hashing
//!
//! This module provides:
//! - **Hash expansion**: `H` (hash) and `R` (random) placeholders resolved
//!   into concrete field values, optionally within a `(begin-end)` range and
//!   stepped by a `/divisor`
//! - **CronSchedule**: a parsed five or six field cron expression
//! - **CronIter**: forward/backward iteration over matching times
//!
//! Hashing spreads jobs that share a schedule across the field's range while
//! keeping each job's time stable: the same hash id always lands on the same
//! minute, hour, and so on.

mod hash;
mod iter;
mod schedule;




pub use hash::{expand, expand_with_rng, HashId};
pub use iter::CronIter;
pub use schedule::CronSchedule;

use thiserror::Error;

/// Errors from expanding, parsing or iterating a cron expression
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CronError {
    #[error("hashed definitions must include a hash id")]
    MissingHashId,

    #[error("invalid hash id: {0}")]
    InvalidHashId(String),

    #[error("bad cron expression: {0}")]
    BadCron(String),

    #[error("unrecognized name in cron expression: {0}")]
    NotAlpha(String),

    #[error("no matching time found in the search window")]
    NoMatch,
}

/// Position and natural bounds of one cron field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

/// Fields in expression order; seconds trail as an optional sixth field
pub(crate) static FIELDS: [FieldSpec; 6] = [
    FieldSpec { name: "minute", min: 0, max: 59 },
    FieldSpec { name: "hour", min: 0, max: 23 },
    FieldSpec { name: "day of month", min: 1, max: 31 },
    FieldSpec { name: "month", min: 1, max: 12 },
    FieldSpec { name: "day of week", min: 0, max: 6 },
    FieldSpec { name: "second", min: 0, max: 59 },
];

pub(crate) const DAY_OF_MONTH: usize = 2;
pub(crate) const MONTH: usize = 3;
pub(crate) const DAY_OF_WEEK: usize = 4;
pub(crate) const SECOND: usize = 5;
