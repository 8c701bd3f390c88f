// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `knack werder`: pronounceable nonsense

use super::Context;
use anyhow::Result;
use knack_core::Werder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

#[derive(clap::Args)]
pub struct WerderArgs {
    /// Werds per sentence (random within the configured bounds by default)
    #[arg(long, short)]
    words: Option<usize>,

    /// Number of sentences
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

pub fn handle(args: WerderArgs, ctx: &Context) -> Result<()> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut werder = Werder::with_config(ctx.config.werder, rng)?;

    let mut out = ctx.output()?;
    for _ in 0..args.count {
        writeln!(out, "{}", werder.sentence(args.words))?;
    }
    out.close()?;
    Ok(())
}
