//! Aggregate statistics over a fetched record collection.
//!
//! Everything here is pure and synchronous. The manager dashboard fetches the
//! whole collection and calls [`summarize`] on it.

use crate::models::Record;

/// Values shown on the manager dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub mean: f64,
    pub mode: Option<u8>,
    pub high_stress_percentage: f64,
    /// Record count per level, index 0 being level 1.
    pub distribution: [usize; 5],
}

/// Arithmetic mean of stress levels, rounded to 2 decimal places.
/// An empty collection yields `0.0`.
pub fn mean(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: i64 = records.iter().map(|r| i64::from(r.stress_level)).sum();
    round_to(sum as f64 / records.len() as f64, 2)
}

/// Most frequent level in `1..=5`.
///
/// Levels are scanned in ascending order and only a strictly greater count
/// replaces the current mode, so ties resolve to the lowest level. Returns
/// `None` when no record carries a level in range.
pub fn mode(records: &[Record]) -> Option<u8> {
    let counts = distribution(records);
    let mut best: Option<(u8, usize)> = None;
    for (level, &count) in (1u8..=5).zip(counts.iter()) {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((level, count)),
        }
    }
    best.map(|(level, _)| level)
}

/// Share of records at level 4 or 5, as a percentage rounded to 1 decimal.
/// An empty collection yields `0.0`.
pub fn high_stress_percentage(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let high = records.iter().filter(|r| r.is_high_stress()).count();
    round_to(high as f64 / records.len() as f64 * 100.0, 1)
}

/// Count of records per level. Out-of-range levels are not counted.
pub fn distribution(records: &[Record]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for record in records {
        if let Some(slot) = usize::try_from(record.stress_level)
            .ok()
            .and_then(|level| level.checked_sub(1))
            .and_then(|i| counts.get_mut(i))
        {
            *slot += 1;
        }
    }
    counts
}

pub fn summarize(records: &[Record]) -> DashboardStats {
    DashboardStats {
        total: records.len(),
        mean: mean(records),
        mode: mode(records),
        high_stress_percentage: high_stress_percentage(records),
        distribution: distribution(records),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
