//! Codec module - Fixed-width base-62 short codes
//!
//! Provides:
//! - The short code alphabet and width constants
//! - `encode`: integer id -> 7 character code (silent truncation on overflow)
//! - `encode_with`: the same, with an explicit overflow policy
//! - `call`: the dynamically typed calling convention on top of the encoder

pub mod call;

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Digits, then lowercase, then uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric base of the encoding (alphabet length)
pub const BASE: u64 = ALPHABET.len() as u64;

/// Number of characters in every short code
pub const WIDTH: usize = 7;

/// Number of distinct values a code can represent (62^7)
pub const CAPACITY: u64 = BASE.pow(WIDTH as u32);

/// Character used for unused leading positions
pub const PAD: u8 = ALPHABET[0];

/// What to do with values that do not fit in `WIDTH` digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Drop the most significant digits (historical behavior)
    #[default]
    Wrap,
    /// Fail with `EncodeError::OutOfRange`
    Reject,
}

impl std::str::FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap" | "truncate" => Ok(OverflowPolicy::Wrap),
            "reject" | "strict" => Ok(OverflowPolicy::Reject),
            _ => Err(format!("Unknown overflow policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("value {value} does not fit in a short code (capacity {capacity})")]
    OutOfRange { value: u64, capacity: u64 },
}

impl EncodeError {
    /// Stable error code used in result items
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// A fixed-width short code.
///
/// Always exactly `WIDTH` characters from `ALPHABET`, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    fn from_digits(digits: [u8; WIDTH]) -> Self {
        Self(digits.iter().map(|&b| char::from(b)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ShortCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for ShortCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Encode `value` into a short code.
///
/// Values `>= CAPACITY` keep only their lowest `WIDTH` digits, so
/// `encode(CAPACITY) == encode(0)`.
pub fn encode(mut value: u64) -> ShortCode {
    let mut digits = [PAD; WIDTH];
    let mut slot = WIDTH;

    // Least significant digit first, filled from the back.
    loop {
        slot -= 1;
        digits[slot] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 || slot == 0 {
            break;
        }
    }

    ShortCode::from_digits(digits)
}

/// Encode `value`, applying `policy` to values that do not fit.
pub fn encode_with(value: u64, policy: OverflowPolicy) -> Result<ShortCode, EncodeError> {
    if policy == OverflowPolicy::Reject && value >= CAPACITY {
        return Err(EncodeError::OutOfRange {
            value,
            capacity: CAPACITY,
        });
    }
    Ok(encode(value))
}
