// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random but pronounceable nonsense words ("werds") and sentences
//!
//! Werds alternate between vowel and consonant phonemes. Consonants at the
//! start of a werd come from a table of word beginnings and the consonant
//! that closes it from a table of endings.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VOWELS: &[&str] = &[
    "a", "a", "ai", "e", "e", "ea", "ee", "i", "i", "ie", "io", "o", "o", "oa", "oi", "oo", "ou",
    "u", "u",
];

const BEGINNINGS: &[&str] = &[
    "b", "bl", "cl", "cr", "dr", "fl", "fr", "gr", "k", "l", "m", "pl", "qu", "sl", "sn", "spl",
    "squ", "tr", "wr",
];

const ENDINGS: &[&str] = &[
    "ch", "ck", "d", "ff", "gh", "ght", "ll", "ls", "ly", "m", "mn", "nct", "nd", "ng", "nt", "ny",
    "rd", "rt", "sk", "st", "t", "w", "zz",
];

const MIDDLES: &[&str] = &[
    "b", "c", "cr", "ct", "d", "f", "g", "h", "k", "l", "m", "n", "nk", "p", "ph", "r", "s", "sh",
    "sn", "sp", "st", "str", "t", "th", "v", "w", "x", "z",
];

const PUNCTUATION: &[&str] = &["!", ".", "?"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WerderError {
    #[error("invalid {what} bounds: min {min} > max {max}")]
    InvalidBounds {
        what: &'static str,
        min: usize,
        max: usize,
    },
}

/// Length bounds for generated werds and sentences (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WerderConfig {
    pub syllables_min: usize,
    pub syllables_max: usize,
    pub werds_min: usize,
    pub werds_max: usize,
}

impl Default for WerderConfig {
    fn default() -> Self {
        Self {
            syllables_min: 3,
            syllables_max: 7,
            werds_min: 5,
            werds_max: 9,
        }
    }
}

impl WerderConfig {
    pub fn validate(&self) -> Result<(), WerderError> {
        if self.syllables_min > self.syllables_max {
            return Err(WerderError::InvalidBounds {
                what: "syllable",
                min: self.syllables_min,
                max: self.syllables_max,
            });
        }
        if self.werds_min > self.werds_max {
            return Err(WerderError::InvalidBounds {
                what: "werd",
                min: self.werds_min,
                max: self.werds_max,
            });
        }
        Ok(())
    }
}

/// Werd generator over any random source
#[derive(Debug, Clone)]
pub struct Werder<R: Rng> {
    config: WerderConfig,
    rng: R,
}

impl<R: Rng> Werder<R> {
    pub fn new(rng: R) -> Self {
        Self {
            config: WerderConfig::default(),
            rng,
        }
    }

    pub fn with_config(config: WerderConfig, rng: R) -> Result<Self, WerderError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &WerderConfig {
        &self.config
    }

    /// A werd of `syllables` phonemes, or a random count within the configured bounds
    pub fn werd(&mut self, syllables: Option<usize>) -> String {
        let syllables = syllables.unwrap_or_else(|| {
            self.rng
                .random_range(self.config.syllables_min..=self.config.syllables_max)
        });

        // Start with a consonant 2/3 of the time
        let flip = self.rng.random_range(0..=2usize);

        let mut werd = String::new();
        for syllable in 0..syllables {
            let parts = if (flip + syllable) % 2 == 1 {
                VOWELS
            } else if syllable == 0 {
                BEGINNINGS
            } else if syllable == syllables - 1 {
                ENDINGS
            } else {
                MIDDLES
            };
            werd.push_str(self.pick(parts));
        }
        werd
    }

    /// Capitalized, space-separated werds closed by `!`, `.` or `?`
    pub fn sentence(&mut self, werds: Option<usize>) -> String {
        let werds = werds.unwrap_or_else(|| {
            self.rng
                .random_range(self.config.werds_min..=self.config.werds_max)
        });
        let body = (0..werds)
            .map(|_| self.werd(None))
            .collect::<Vec<_>>()
            .join(" ");

        let mut chars = body.chars();
        let mut sentence = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        sentence.push_str(self.pick(PUNCTUATION));
        sentence
    }

    fn pick(&mut self, parts: &'static [&'static str]) -> &'static str {
        parts.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "werder_tests.rs"]
mod tests;
