//! Field normalization.
//!
//! Raw cells in movie exports are dirty: years come as `"(2019)"`, vote counts
//! as `"1,234"`, ratings are sometimes blank. Every function here is total and
//! pure. A malformed cell maps to a fixed fallback instead of an error, so one
//! bad row can never abort a query.

use crate::types::MovieRecord;

/// Canonical year used when a cell does not hold exactly four digits.
pub const UNKNOWN_YEAR: &str = "0";

/// Keep only the ASCII digits of `raw`.
fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a year cell.
///
/// Every non-digit is stripped. Exactly four remaining digits are the year,
/// anything else becomes [`UNKNOWN_YEAR`].
///
/// Example: `"(1999)"` -> `"1999"`, `"1999-2001"` -> `"0"`, `""` -> `"0"`
///
/// The result is always four digits or `"0"`, so comparing two results as
/// strings orders them the same way as comparing them as numbers.
pub fn normalize_year(raw: &str) -> String {
    let cleaned = digits(raw);
    if cleaned.len() == 4 {
        cleaned
    } else {
        UNKNOWN_YEAR.to_string()
    }
}

/// Normalize a rating cell.
///
/// Surrounding whitespace is trimmed and the rest parsed as a float. Blank,
/// unparsable, negative and non-finite values all become `0.0` (as does
/// `-0.0`, so every zero compares equal).
pub fn normalize_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() && rating > 0.0 => rating,
        _ => 0.0,
    }
}

/// Normalize a vote-count cell.
///
/// Every non-digit is stripped, so `"1,234 votes"` reads as `1234`. No digits
/// at all gives `0`; a digit run too long for `u64` saturates.
pub fn normalize_votes(raw: &str) -> u64 {
    let cleaned = digits(raw);
    if cleaned.is_empty() {
        return 0;
    }
    // Only overflow can fail here
    cleaned.parse().unwrap_or(u64::MAX)
}

impl MovieRecord {
    pub fn normalized_year(&self) -> String {
        normalize_year(&self.year)
    }

    pub fn normalized_rating(&self) -> f64 {
        normalize_rating(&self.rating)
    }

    pub fn normalized_votes(&self) -> u64 {
        normalize_votes(&self.votes)
    }
}
