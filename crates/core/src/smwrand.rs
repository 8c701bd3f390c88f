// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Super Mario World random number generator
//!
//! A bit-exact model of the game's two-register 8-bit generator, after the
//! deconstruction by Retro Game Mechanics Explained. The output cycles
//! every [`PERIOD`] calls to [`SmwRand::rand`].

/// Calls to `rand` before the output repeats
pub const PERIOD: usize = 27776;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmwRand {
    seed_1: u8,
    seed_2: u8,
}

impl SmwRand {
    /// Generator in the power-on state, both seeds zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seeds(seed_1: u8, seed_2: u8) -> Self {
        Self { seed_1, seed_2 }
    }

    pub fn seeds(&self) -> (u8, u8) {
        (self.seed_1, self.seed_2)
    }

    fn step(&mut self) -> u8 {
        self.seed_1 = self.seed_1.wrapping_add(self.seed_1 << 2).wrapping_add(1);
        let feedback = u8::from(matches!(self.seed_2 & 0x90, 0x90 | 0));
        self.seed_2 = (self.seed_2 << 1).wrapping_add(feedback);
        self.seed_1 ^ self.seed_2
    }

    /// Two outputs, in the order the game stores them
    pub fn rand(&mut self) -> (u8, u8) {
        let output_2 = self.step();
        let output_1 = self.step();
        (output_1, output_2)
    }
}

impl Iterator for SmwRand {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.rand())
    }
}

#[cfg(test)]
#[path = "smwrand_tests.rs"]
mod tests;
