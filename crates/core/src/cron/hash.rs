// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `H`/`R` placeholder expansion

use super::{CronError, FIELDS};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// h, r(1-5), h/15, h(30-59)/10
#[allow(clippy::expect_used)]
static HASH_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<kind>h|r)(\((?P<begin>\d+)-(?P<end>\d+)\))?(/(?P<divisor>\d+))?$")
        .expect("constant regex pattern is valid")
});

/// Named shorthands: (alias, static expression, hashed expression)
const ALIASES: [(&str, &str, &str); 7] = [
    ("@midnight", "0 0 * * *", "h h(0-2) * * * h"),
    ("@hourly", "0 * * * *", "h * * * * h"),
    ("@daily", "0 0 * * *", "h h * * * h"),
    ("@weekly", "0 0 * * 0", "h h * * h h"),
    ("@monthly", "0 0 1 * *", "h h h * * h"),
    ("@yearly", "0 0 1 1 *", "h h h h * h"),
    ("@annually", "0 0 1 1 *", "h h h h * h"),
];

/// Seed identity for `H` fields
///
/// Any byte sequence works; text is taken as its UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashId(Vec<u8>);

impl HashId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// CRC32 of the identity bytes
    pub fn checksum(&self) -> u32 {
        crc32fast::hash(&self.0)
    }
}

impl From<&str> for HashId {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for HashId {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for HashId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for HashId {
    fn from(bytes: &[u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for HashId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Hash ids read from configuration: a string, or an array of byte values
impl TryFrom<&toml::Value> for HashId {
    type Error = CronError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::String(s) => Ok(Self::from(s.as_str())),
            toml::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_integer()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| {
                            CronError::InvalidHashId(format!("{} is not a byte value", item))
                        })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(Self),
            other => Err(CronError::InvalidHashId(format!(
                "hash id must be bytes or a UTF-8 string, got {}",
                other.type_str()
            ))),
        }
    }
}

/// Expand aliases and `H`/`R` fields into a plain cron expression
///
/// `R` fields draw from the thread-local generator, so two calls may differ.
pub fn expand(expr: &str, hash_id: Option<&HashId>) -> Result<String, CronError> {
    expand_with_rng(expr, hash_id, &mut rand::rng())
}

/// Like [`expand`], drawing `R` values from `rng`
pub fn expand_with_rng<R: Rng + ?Sized>(
    expr: &str,
    hash_id: Option<&HashId>,
    rng: &mut R,
) -> Result<String, CronError> {
    let lowered = expr.trim().to_lowercase();
    let resolved = match resolve_alias(&lowered, hash_id.is_some()) {
        Some(alias) => alias,
        None => lowered.as_str(),
    };

    let fields = resolved
        .split_whitespace()
        .enumerate()
        .map(|(idx, field)| expand_field(field, idx, hash_id, rng))
        .collect::<Result<Vec<_>, _>>()?;
    let expanded = fields.join(" ");

    debug!(expr, expanded = %expanded, "expanded cron expression");
    Ok(expanded)
}

fn resolve_alias(expr: &str, hashed: bool) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _, _)| *alias == expr)
        .map(|(_, plain, hashed_expr)| if hashed { *hashed_expr } else { *plain })
}

fn expand_field<R: Rng + ?Sized>(
    field: &str,
    idx: usize,
    hash_id: Option<&HashId>,
    rng: &mut R,
) -> Result<String, CronError> {
    let Some(caps) = HASH_EXPRESSION.captures(field) else {
        return Ok(field.to_string());
    };

    let seed = match &caps["kind"] {
        "h" => hash_id.ok_or(CronError::MissingHashId)?.checksum(),
        _ => rng.random::<u32>(),
    };

    // Unknown positions and unusable numbers are left for the parser to reject
    let Some(spec) = FIELDS.get(idx) else {
        return Ok(field.to_string());
    };
    let number = |name: &str| caps.name(name).map(|m| m.as_str().parse::<u32>());
    let range = match (number("begin"), number("end")) {
        (Some(Ok(begin)), Some(Ok(end))) if begin <= end => Some((begin, end)),
        (None, None) => None,
        _ => return Ok(field.to_string()),
    };
    let divisor = match number("divisor") {
        Some(Ok(divisor)) if divisor > 0 => Some(divisor),
        None => None,
        _ => return Ok(field.to_string()),
    };

    // Each position reads a different slice of the seed
    let seed = seed >> idx;
    let expanded = match (range, divisor) {
        // H(30-59)/10 -> 34-59/10
        (Some((begin, end)), Some(divisor)) => {
            format!("{}-{}/{}", offset(seed, begin, divisor), end, divisor)
        }
        // H(0-29) -> 12
        (Some((begin, end)), None) => reduce(seed, begin, end).to_string(),
        // H/15 -> 7-59/15
        (None, Some(divisor)) => {
            format!("{}-{}/{}", offset(seed, spec.min, divisor), spec.max, divisor)
        }
        // H -> 32
        (None, None) => reduce(seed, spec.min, spec.max).to_string(),
    };
    Ok(expanded)
}

/// A value in `[begin, end]`
fn reduce(seed: u32, begin: u32, end: u32) -> u64 {
    let width = u64::from(end) - u64::from(begin) + 1;
    u64::from(seed) % width + u64::from(begin)
}

/// A starting point in `[base, base + divisor)`
fn offset(seed: u32, base: u32, divisor: u32) -> u64 {
    u64::from(base) + u64::from(seed % divisor)
}
