//! Helpers for the hard-coded seed records both screens start from.

use chrono::NaiveDate;

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seed dates are literals; an invalid one falls back to the epoch and is
/// caught by the seed tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
