use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{self, validate_year, CYCLE_YEARS};
use crate::error::YuleError;

/// Inclusive span of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Validated constructor; reversed or out-of-bounds ranges are rejected,
    /// never swapped or clamped.
    pub fn new(start: i32, end: i32) -> Result<Self, YuleError> {
        validate_year(start)?;
        validate_year(end)?;
        if start > end {
            return Err(YuleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of years covered, end inclusive. Always at least 1.
    pub fn span(&self) -> u32 {
        (self.end - self.start + 1) as u32
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Lazy producer of Sunday-Christmas years, one at a time.
///
/// Finite and restartable: building a fresh iterator over the same range
/// replays the same sequence. `direct_scan` is defined as draining this
/// iterator, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct SundayChristmases {
    next_year: i32,
    end: i32,
}

impl SundayChristmases {
    pub fn new(range: YearRange) -> Self {
        Self {
            next_year: range.start,
            end: range.end,
        }
    }
}

impl Iterator for SundayChristmases {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while self.next_year <= self.end {
            let year = self.next_year;
            self.next_year += 1;
            if calendar::is_sunday_christmas(year) {
                return Some(year);
            }
        }
        None
    }
}

/// Years in `range` whose December 25th is a Sunday, ascending.
///
/// Ranges spanning at least one full 400-year cycle go through the
/// precomputed cycle table; shorter ranges are scanned year by year. Both
/// paths return identical results for every input.
pub fn find_sunday_christmases(range: YearRange) -> Vec<i32> {
    if range.span() >= CYCLE_YEARS as u32 {
        cycle_scan(range)
    } else {
        direct_scan(range)
    }
}

/// Per-year weekday check over the whole range.
pub fn direct_scan(range: YearRange) -> Vec<i32> {
    SundayChristmases::new(range).collect()
}

/// Modular lookup against the 400-year cycle table.
pub fn cycle_scan(range: YearRange) -> Vec<i32> {
    let table = calendar::cycle_table();
    let years: Vec<i32> = (range.start..=range.end)
        .filter(|year| table[year.rem_euclid(CYCLE_YEARS) as usize])
        .collect();

    debug!(
        start = range.start,
        end = range.end,
        matches = years.len(),
        "cycle scan finished"
    );
    years
}
