// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable numbers with decimal or binary magnitude prefixes
//!
//! Templates use `{name}` placeholders:
//!
//! - `{value}`: the scaled number
//! - `{value:.N}`: the scaled number with `N` decimal places
//! - `{prefix}`: the magnitude prefix (`k`, `Mi`, ...), empty below the first
//!
//! Unknown placeholders are left as-is.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const DEFAULT_TEMPLATE: &str = "{value:.2} {prefix}";

// {value}, {value:.2} and {prefix}
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(value|prefix)(?::\.(\d+))?\}").expect("constant regex pattern is valid")
});

/// (decimal, binary) prefix pairs, ascending
const DEFAULT_PREFIXES: [(&str, &str); 8] = [
    ("k", "Ki"),
    ("M", "Mi"),
    ("G", "Gi"),
    ("T", "Ti"),
    ("P", "Pi"),
    ("E", "Ei"),
    ("Z", "Zi"),
    ("Y", "Yi"),
];

/// Number formatting options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumFmt {
    /// Template for the rendered result
    pub template: String,
    /// Divide by 1024 and use IEC prefixes instead of 1000 and SI
    pub binary: bool,
    /// Scale to the next prefix only once the value reaches `divisor * rollover`
    pub rollover: f64,
    /// Maximum number of prefix steps; 0 means no limit
    pub limit: usize,
    /// (decimal, binary) prefix pairs, ascending
    pub prefixes: Vec<(String, String)>,
}

impl Default for NumFmt {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            binary: false,
            rollover: 1.0,
            limit: 0,
            prefixes: DEFAULT_PREFIXES
                .iter()
                .map(|(decimal, binary)| (decimal.to_string(), binary.to_string()))
                .collect(),
        }
    }
}

impl NumFmt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn with_rollover(mut self, rollover: f64) -> Self {
        self.rollover = rollover;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_prefixes(mut self, prefixes: Vec<(String, String)>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn divisor(&self) -> f64 {
        if self.binary {
            1024.0
        } else {
            1000.0
        }
    }

    /// Scale `num` down until it drops below the rollover threshold
    pub fn format(&self, num: f64) -> FormattedNumber {
        let divisor = self.divisor();
        let limit = if self.limit == 0 || self.limit > self.prefixes.len() {
            self.prefixes.len()
        } else {
            self.limit
        };

        let mut value = num;
        let mut prefix = "";
        for (count, (decimal, binary)) in self.prefixes.iter().enumerate() {
            if value < divisor * self.rollover || count >= limit {
                break;
            }
            value /= divisor;
            prefix = if self.binary { binary } else { decimal };
        }

        FormattedNumber {
            value,
            prefix: prefix.to_string(),
            template: self.template.clone(),
        }
    }
}

/// Format `num` with the default options
pub fn numfmt(num: f64) -> FormattedNumber {
    NumFmt::default().format(num)
}

/// A scaled number and its prefix
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedNumber {
    pub value: f64,
    pub prefix: String,
    template: String,
}

impl FormattedNumber {
    /// Render through a template other than the one it was formatted with
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &regex::Captures| match &caps[1] {
                "prefix" => self.prefix.clone(),
                _ => match caps.get(2).and_then(|p| p.as_str().parse::<usize>().ok()) {
                    Some(precision) => format!("{:.*}", precision, self.value),
                    None => self.value.to_string(),
                },
            })
            .to_string()
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.template))
    }
}

#[cfg(test)]
#[path = "numfmt_tests.rs"]
mod tests;
