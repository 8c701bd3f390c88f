// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack cron`: expand hashed cron expressions and list firing times

use super::Context;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use knack_core::{CronIter, HashId};
use serde::Serialize;
use std::fmt;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(clap::Args)]
pub struct CronArgs {
    /// Cron expression; `H`/`R` fields and `@hourly`-style aliases are expanded
    expr: String,

    /// Seed for `H` fields (defaults to `[cron] hash_id` from the config)
    #[arg(long)]
    hash_id: Option<String>,

    /// Start time, RFC 3339 or `YYYY-MM-DD[ HH:MM[:SS]]` (default: now)
    #[arg(long)]
    start: Option<String>,

    /// Number of firing times to list
    #[arg(long, short = 'n', default_value_t = 5)]
    count: usize,

    /// Walk backwards from the start time
    #[arg(long)]
    prev: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct CronReport {
    expression: String,
    expanded: String,
    times: Vec<NaiveDateTime>,
}

impl fmt::Display for CronReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expanded)?;
        for time in &self.times {
            write!(f, "\n{}", time.format(TIME_FORMAT))?;
        }
        Ok(())
    }
}

pub fn handle(args: CronArgs, ctx: &Context) -> Result<()> {
    let hash_id = match args.hash_id {
        Some(id) => Some(HashId::from(id)),
        None => ctx.config.cron.hash_id()?,
    };
    let start = match &args.start {
        Some(s) => parse_start(s)?,
        None => chrono::Local::now().naive_local(),
    };

    let mut iter = CronIter::new(&args.expr, start, hash_id.as_ref())?;
    let mut times = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let time = if args.prev {
            iter.get_prev()?
        } else {
            iter.get_next()?
        };
        times.push(time);
    }

    let report = CronReport {
        expression: args.expr,
        expanded: iter.expanded().to_string(),
        times,
    };
    let mut out = ctx.output()?;
    output::write(&mut out, &report, args.format)?;
    out.close()?;
    Ok(())
}

/// Accept RFC 3339 (kept as wall-clock time in its own offset) or a naive date/time
pub(crate) fn parse_start(s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    bail!("invalid start time: {s:?}")
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
