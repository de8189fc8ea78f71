use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::finder::YearRange;

/// Descriptive statistics derived from a set of Sunday-Christmas years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternStats {
    pub count: usize,
    /// Share of years in the range that qualify, one decimal place.
    pub frequency_percent: f64,
    /// Differences between consecutive qualifying years.
    pub gaps: Vec<i32>,
    /// Mean gap, two decimal places; `None` with fewer than two results.
    pub average_gap: Option<f64>,
    pub max_gap: Option<i32>,
    /// Most frequent gap; ties resolve toward the smaller gap.
    pub most_common_gap: Option<i32>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    /// First qualifying year at or after the reference year.
    pub next_year: Option<i32>,
    /// Decade (e.g. 1990) mapped to occurrences within it.
    pub by_decade: BTreeMap<i32, usize>,
}

/// Compute statistics for `years` as found within `range`.
///
/// Pure function of its inputs; the caller supplies the reference year for
/// the next-occurrence lookup instead of the library reading a clock.
pub fn analyze_patterns(range: YearRange, years: &[i32], reference_year: i32) -> PatternStats {
    let gaps: Vec<i32> = years.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let average_gap = if gaps.is_empty() {
        None
    } else {
        let mean = gaps.iter().sum::<i32>() as f64 / gaps.len() as f64;
        Some(round_to(mean, 2))
    };

    let mut gap_counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &gap in &gaps {
        *gap_counts.entry(gap).or_insert(0) += 1;
    }
    // Ascending iteration plus strict comparison keeps the smaller gap on ties.
    let mut most_common_gap = None;
    let mut best_count = 0;
    for (&gap, &count) in &gap_counts {
        if count > best_count {
            best_count = count;
            most_common_gap = Some(gap);
        }
    }

    let mut by_decade: BTreeMap<i32, usize> = BTreeMap::new();
    for &year in years {
        *by_decade.entry(year / 10 * 10).or_insert(0) += 1;
    }

    PatternStats {
        count: years.len(),
        frequency_percent: round_to(years.len() as f64 / range.span() as f64 * 100.0, 1),
        average_gap,
        max_gap: gaps.iter().copied().max(),
        most_common_gap,
        first_year: years.first().copied(),
        last_year: years.last().copied(),
        next_year: years.iter().copied().find(|&year| year >= reference_year),
        gaps,
        by_decade,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
