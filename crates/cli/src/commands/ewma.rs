// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack ewma`: exponentially-weighted moving average of a series

use super::{read_numbers, Context};
use crate::output::{self, OutputFormat};
use anyhow::{ensure, Result};
use knack_core::ewma::DEFAULT_WEIGHT;
use knack_core::Ewma;
use serde::Serialize;
use std::fmt;

#[derive(clap::Args)]
pub struct EwmaArgs {
    /// Values in order (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Smoothing weight; larger is smoother
    #[arg(long, short, default_value_t = DEFAULT_WEIGHT)]
    weight: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct EwmaReport {
    average: f64,
    weight: f64,
    count: usize,
    sum: f64,
}

impl fmt::Display for EwmaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.average)
    }
}

pub fn handle(args: EwmaArgs, ctx: &Context) -> Result<()> {
    ensure!(args.weight > 0.0, "weight must be positive, got {}", args.weight);

    let values = if args.values.is_empty() {
        read_numbers(std::io::stdin().lock())?
    } else {
        args.values
    };
    let mut ewma = Ewma::new(args.weight);
    ewma.extend(values);

    let report = EwmaReport {
        average: ewma.average(),
        weight: ewma.weight(),
        count: ewma.len(),
        sum: ewma.sum(),
    };
    let mut out = ctx.output()?;
    output::write(&mut out, &report, args.format)?;
    out.close()?;
    Ok(())
}
