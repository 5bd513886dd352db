//! Class statistics
//!
//! Aggregates over the whole roster: mean/max/min percentage and the letter
//! grade distribution.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{Grade, StudentRecord};

/// Summary statistics for a non-empty roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of records
    pub count: usize,

    /// Arithmetic mean of the percentages
    pub average: f64,

    /// Highest percentage
    pub max: f64,

    /// Lowest percentage
    pub min: f64,

    /// How many records fall in each grade band; only bands that occur
    /// appear as keys
    pub grade_counts: BTreeMap<Grade, usize>,
}

/// Compute statistics over `records`
///
/// Callers guarantee `records` is non-empty (the roster returns
/// `EmptyRoster` before reaching here).
pub(crate) fn compute(records: &[StudentRecord]) -> Statistics {
    let count = records.len();

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut grade_counts: BTreeMap<Grade, usize> = BTreeMap::new();

    for record in records {
        sum += record.percentage;
        max = max.max(record.percentage);
        min = min.min(record.percentage);
        *grade_counts.entry(record.grade).or_insert(0) += 1;
    }

    Statistics {
        count,
        average: sum / count as f64,
        max,
        min,
        grade_counts,
    }
}
