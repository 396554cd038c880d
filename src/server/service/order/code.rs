//! Order code derivation.
//!
//! An order code is the externally visible identifier handed back to clients on placement.
//! Two schemes are supported:
//!
//! - `legacy`: the submission timestamp's year, month, day, hour, minute and second followed by
//!   the user ID, each printed without padding. Codes from existing clients look like this, but
//!   distinct inputs can produce the same text and two orders of the same user in the same
//!   second always collide.
//! - `randomized`: a zero-padded `YYYYMMDDhhmmss` timestamp, the user ID and a 6-digit random
//!   suffix. The fixed-width parts keep codes unambiguous.
//!
//! In both schemes the unique index on `order_code` is what finally rejects a collision.

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::Rng;
use std::{fmt, str::FromStr};

/// Exclusive upper bound of the random suffix; yields 6 digits when zero-padded.
const RANDOM_SUFFIX_BOUND: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderCodeScheme {
    Legacy,
    #[default]
    Randomized,
}

impl FromStr for OrderCodeScheme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "legacy" => Ok(Self::Legacy),
            "randomized" => Ok(Self::Randomized),
            _ => Err("expected 'legacy' or 'randomized'".to_string()),
        }
    }
}

impl fmt::Display for OrderCodeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Randomized => write!(f, "randomized"),
        }
    }
}

pub struct OrderCodeGenerator {
    scheme: OrderCodeScheme,
}

impl OrderCodeGenerator {
    pub fn new(scheme: OrderCodeScheme) -> Self {
        Self { scheme }
    }

    /// Derives the order code for an order submitted at `submitted_at` by `user_id`.
    pub fn generate(&self, submitted_at: DateTime<Utc>, user_id: u64) -> String {
        match self.scheme {
            OrderCodeScheme::Legacy => legacy_code(submitted_at, user_id),
            OrderCodeScheme::Randomized => {
                let suffix = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);
                randomized_code(submitted_at, user_id, suffix)
            }
        }
    }
}

fn legacy_code(at: DateTime<Utc>, user_id: u64) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        user_id
    )
}

fn randomized_code(at: DateTime<Utc>, user_id: u64, suffix: u32) -> String {
    format!("{}{}{:06}", at.format("%Y%m%d%H%M%S"), user_id, suffix)
}
