// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor-based iteration over a hashed cron expression

use super::{expand, CronError, CronSchedule, HashId};
use chrono::NaiveDateTime;

/// Walks the firing times of a cron expression from a starting point
///
/// Hash and random fields are resolved once, at construction; the cursor
/// then moves with each `get_next`/`get_prev` call.
#[derive(Debug, Clone)]
pub struct CronIter {
    expanded: String,
    schedule: CronSchedule,
    cursor: NaiveDateTime,
}

impl CronIter {
    /// Expand and parse `expr`, positioning the cursor at `start`
    ///
    /// Fails with [`CronError::MissingHashId`] when `expr` uses `H` and no
    /// hash id is given.
    pub fn new(
        expr: &str,
        start: NaiveDateTime,
        hash_id: Option<&HashId>,
    ) -> Result<Self, CronError> {
        let expanded = expand(expr, hash_id)?;
        let schedule = CronSchedule::parse(&expanded)?;
        Ok(Self {
            expanded,
            schedule,
            cursor: start,
        })
    }

    /// The concrete expression after hash expansion
    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    pub fn schedule(&self) -> &CronSchedule {
        &self.schedule
    }

    pub fn cursor(&self) -> NaiveDateTime {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: NaiveDateTime) {
        self.cursor = cursor;
    }

    /// Advance to the next firing time
    pub fn get_next(&mut self) -> Result<NaiveDateTime, CronError> {
        let next = self.schedule.next_after(self.cursor)?;
        self.cursor = next;
        Ok(next)
    }

    /// Step back to the previous firing time
    pub fn get_prev(&mut self) -> Result<NaiveDateTime, CronError> {
        let prev = self.schedule.prev_before(self.cursor)?;
        self.cursor = prev;
        Ok(prev)
    }

    /// [`get_next`](Self::get_next) as seconds since the Unix epoch, reading times as UTC
    pub fn get_next_timestamp(&mut self) -> Result<f64, CronError> {
        self.get_next().map(timestamp)
    }

    /// [`get_prev`](Self::get_prev) as seconds since the Unix epoch, reading times as UTC
    pub fn get_prev_timestamp(&mut self) -> Result<f64, CronError> {
        self.get_prev().map(timestamp)
    }
}

impl Iterator for CronIter {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next().ok()
    }
}

fn timestamp(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64
}
