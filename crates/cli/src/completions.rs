// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the knack CLI.
//!
//! ```bash
//! # Bash
//! knack completions bash > ~/.local/share/bash-completion/completions/knack
//!
//! # Zsh
//! knack completions zsh > ~/.zfunc/_knack
//!
//! # Fish
//! knack completions fish > ~/.config/fish/completions/knack.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completions for `C` into `out`
pub fn generate_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "knack", out);
}

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
