use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::YuleError;

/// Earliest year the finder accepts.
pub const MIN_YEAR: i32 = 1;
/// Latest year the finder accepts.
pub const MAX_YEAR: i32 = 9999;

/// The Gregorian weekday pattern for a fixed date repeats after this many years.
pub const CYCLE_YEARS: i32 = 400;

pub fn validate_year(year: i32) -> Result<(), YuleError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(YuleError::YearOutOfBounds { year })
    }
}

/// Weekday of December 25th in the given year.
///
/// Computed from the calendar date alone, so the answer is independent of
/// time zone and locale.
pub fn christmas_weekday(year: i32) -> Result<Weekday, YuleError> {
    validate_year(year)?;
    Ok(dec25_weekday(year))
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

// December 25 exists in every year the bounds admit, so the lookup is
// infallible once the year has been validated.
pub(crate) fn dec25_weekday(year: i32) -> Weekday {
    NaiveDate::from_ymd_opt(year, 12, 25)
        .expect("December 25 is a valid date in every supported year")
        .weekday()
}

pub(crate) fn is_sunday_christmas(year: i32) -> bool {
    dec25_weekday(year) == Weekday::Sun
}

/// One flag per year offset within the 400-year Gregorian cycle.
///
/// Index `o` answers for every year congruent to `o` modulo 400. Year 2000
/// opens a cycle (2000 % 400 == 0), so the table is derived from 2000..2399.
pub(crate) fn cycle_table() -> [bool; CYCLE_YEARS as usize] {
    let mut table = [false; CYCLE_YEARS as usize];
    for (offset, slot) in table.iter_mut().enumerate() {
        *slot = is_sunday_christmas(2000 + offset as i32);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_leap_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn known_christmas_weekdays() {
        // Each value confirmed against a published calendar.
        assert_eq!(christmas_weekday(2021).unwrap(), Weekday::Sat);
        assert_eq!(christmas_weekday(2022).unwrap(), Weekday::Sun);
        assert_eq!(christmas_weekday(2023).unwrap(), Weekday::Mon);
        assert_eq!(christmas_weekday(2016).unwrap(), Weekday::Sun);
        assert_eq!(christmas_weekday(1900).unwrap(), Weekday::Tue);
        assert_eq!(christmas_weekday(2000).unwrap(), Weekday::Mon);
        assert_eq!(christmas_weekday(2100).unwrap(), Weekday::Sat);
    }

    #[test]
    fn rejects_years_outside_bounds() {
        assert!(matches!(
            christmas_weekday(0),
            Err(YuleError::YearOutOfBounds { year: 0 })
        ));
        assert!(matches!(
            christmas_weekday(10000),
            Err(YuleError::YearOutOfBounds { year: 10000 })
        ));
        assert!(christmas_weekday(MIN_YEAR).is_ok());
        assert!(christmas_weekday(MAX_YEAR).is_ok());
    }

    #[test]
    fn cycle_table_matches_direct_checks() {
        let table = cycle_table();
        for offset in 0..CYCLE_YEARS as usize {
            assert_eq!(table[offset], is_sunday_christmas(2000 + offset as i32));
        }
    }

    #[test]
    fn cycle_table_has_58_sundays() {
        // December 25 is a Sunday exactly 58 times per 400-year cycle.
        let table = cycle_table();
        assert_eq!(table.iter().filter(|&&sunday| sunday).count(), 58);
    }
}
