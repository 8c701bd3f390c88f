// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack numfmt`: print numbers with magnitude prefixes

use super::{read_numbers, Context};
use anyhow::Result;
use std::io::Write;

#[derive(clap::Args)]
pub struct NumfmtArgs {
    /// Numbers to format (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<f64>,

    /// Use 1024 and IEC prefixes (Ki, Mi, ...)
    #[arg(long)]
    binary: bool,

    /// Move to the next prefix once the value reaches this multiple of the divisor
    #[arg(long)]
    rollover: Option<f64>,

    /// Maximum number of prefix steps
    #[arg(long)]
    limit: Option<usize>,

    /// Output template, e.g. "{value:.1} {prefix}B"
    #[arg(long)]
    template: Option<String>,
}

pub fn handle(args: NumfmtArgs, ctx: &Context) -> Result<()> {
    let mut options = ctx.config.numfmt.clone();
    if args.binary {
        options = options.with_binary(true);
    }
    if let Some(rollover) = args.rollover {
        options = options.with_rollover(rollover);
    }
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(template) = args.template {
        options = options.with_template(template);
    }

    let numbers = if args.numbers.is_empty() {
        read_numbers(std::io::stdin().lock())?
    } else {
        args.numbers
    };

    let mut out = ctx.output()?;
    for n in numbers {
        writeln!(out, "{}", options.format(n))?;
    }
    out.close()?;
    Ok(())
}
