// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exponentially-weighted moving average

use std::fmt;

/// Weight used by [`Ewma::default`]
pub const DEFAULT_WEIGHT: f64 = 8.0;

/// Running exponentially-weighted moving average
///
/// The first sample seeds the average; each later sample moves it by
/// `1 / weight` of the difference. Also tracks the sample count and sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Ewma {
    state: f64,
    weight: f64,
    items: usize,
    sum: f64,
}

impl Ewma {
    pub fn new(weight: f64) -> Self {
        Self {
            state: 0.0,
            weight,
            items: 0,
            sum: 0.0,
        }
    }

    /// Build an average over `values` with the default weight
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().collect()
    }

    pub fn add(&mut self, value: f64) {
        if self.items == 0 {
            self.state = value * self.weight;
        } else {
            self.state += value - self.state / self.weight;
        }
        self.items += 1;
        self.sum += value;
    }

    /// Weighted average of the samples so far; `0.0` when empty
    pub fn average(&self) -> f64 {
        self.state / self.weight
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Plain sum of all samples
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

impl Default for Ewma {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

impl Extend<f64> for Ewma {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for Ewma {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut ewma = Self::default();
        ewma.extend(iter);
        ewma
    }
}

impl From<&Ewma> for f64 {
    fn from(ewma: &Ewma) -> Self {
        ewma.average()
    }
}

impl fmt::Display for Ewma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.average(), f)
    }
}

#[cfg(test)]
#[path = "ewma_tests.rs"]
mod tests;
