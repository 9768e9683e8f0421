//! Elapsed time since the calendar epoch, January 1 of civil year 1006.
//!
//! All conversions pass through [`EpochSeconds`], a plain count of seconds
//! since 1006-01-01T00:00:00 on the local wall clock.

use std::ops::{Add, Sub};

use crate::date::{CivilDate, days_in_month};
use crate::error::CalendarError;

/// First civil year of the supported range; its January 1 is the epoch.
pub const EPOCH_YEAR: i32 = 1006;
/// Last civil year of the supported range.
pub const LAST_YEAR: i32 = 2400;
/// Epoch seconds of 2400-12-31T23:59:59, the last supported instant.
pub const MAX_EPOCH_SECONDS: i64 = 44_022_009_599;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Days in every Zoroastrian year, and in a common civil year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Seconds elapsed since the calendar epoch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EpochSeconds(pub i64);

impl EpochSeconds {
    /// Whole days elapsed since the epoch.
    pub fn days(&self) -> i64 {
        self.0.div_euclid(SECONDS_PER_DAY)
    }
    /// Seconds elapsed since the start of the current day.
    pub fn seconds_of_day(&self) -> i64 {
        self.0.rem_euclid(SECONDS_PER_DAY)
    }
    /// Returns `self` if it lies in `0..=MAX_EPOCH_SECONDS`.
    pub fn checked(self) -> Result<Self, CalendarError> {
        if (0..=MAX_EPOCH_SECONDS).contains(&self.0) {
            Ok(self)
        } else {
            Err(CalendarError::EpochOutOfRange {
                seconds: self.0,
                max: MAX_EPOCH_SECONDS,
            })
        }
    }
}

impl Add<i64> for EpochSeconds {
    type Output = EpochSeconds;
    fn add(self, rhs: i64) -> Self::Output {
        EpochSeconds(self.0 + rhs)
    }
}
impl Sub<EpochSeconds> for EpochSeconds {
    type Output = i64;
    fn sub(self, rhs: EpochSeconds) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Converts a civil date/time into seconds elapsed since the epoch.
///
/// The day count is 365 days per civil year since 1006, plus one for every
/// Gregorian leap year in `1006..year`, plus the days already elapsed in
/// `year`.
///
/// Returns `Err` if the year lies outside `EPOCH_YEAR..=LAST_YEAR`.
///
/// # Example
///
/// ```
/// use parsi_calendar::CivilDate;
/// use parsi_calendar::epoch::{EpochSeconds, civil_to_epoch_seconds};
///
/// let date = CivilDate::new(1006, 1, 2, 0, 0, 1).unwrap();
/// assert_eq!(Ok(EpochSeconds(86_401)), civil_to_epoch_seconds(date));
/// ```
pub fn civil_to_epoch_seconds(date: CivilDate) -> Result<EpochSeconds, CalendarError> {
    let year = date.year();
    if !(EPOCH_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year,
            min: EPOCH_YEAR,
            max: LAST_YEAR,
        });
    }

    let days = i64::from(year - EPOCH_YEAR) * DAYS_PER_YEAR
        + leap_days_since_epoch(year)
        + elapsed_days_in_year(&date);
    let seconds = days * SECONDS_PER_DAY + date.seconds_of_day();
    tracing::trace!(%date, days, seconds, "civil date to epoch seconds");
    Ok(EpochSeconds(seconds))
}

/// Days elapsed in the civil year before `date`; zero on January 1.
fn elapsed_days_in_year(date: &CivilDate) -> i64 {
    let before: u32 = (1..date.month())
        .map(|m| days_in_month(date.year(), m))
        .sum();
    i64::from(before + date.day() - 1)
}

/// Number of Gregorian leap years in `EPOCH_YEAR..year`.
fn leap_days_since_epoch(year: i32) -> i64 {
    leap_years_before(year) - leap_years_before(EPOCH_YEAR)
}

fn leap_years_before(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::YearType;

    fn epoch(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        civil_to_epoch_seconds(CivilDate::new(y, mo, d, h, mi, s).unwrap())
            .unwrap()
            .0
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(0, epoch(1006, 1, 1, 0, 0, 0));
        assert_eq!(6 * 3600, epoch(1006, 1, 1, 6, 0, 0));
    }

    #[test]
    fn known_values() {
        for ((y, mo, d, h, mi, s), std) in [
            ((2024, 1, 1, 0, 0, 0), 32_124_988_800),
            ((2024, 8, 15, 12, 0, 0), 32_144_644_800),
            ((2000, 1, 1, 12, 0, 0), 31_367_649_600),
            ((2400, 1, 1, 0, 0, 0), 43_990_387_200),
            ((2400, 12, 31, 23, 59, 59), MAX_EPOCH_SECONDS),
        ] {
            assert_eq!(std, epoch(y, mo, d, h, mi, s), "{y}-{mo}-{d}");
        }
    }

    #[test]
    fn january_first_has_no_elapsed_days() {
        for year in [1006, 1600, 1900, 2023, 2024, 2400] {
            let date = CivilDate::from_ymd(year, 1, 1).unwrap();
            assert_eq!(0, elapsed_days_in_year(&date));
            assert_eq!(i64::from(date.ordinal()) - 1, elapsed_days_in_year(&date));
        }
    }

    #[test]
    fn elapsed_days_agree_with_ordinal() {
        for (y, m, d) in [(2024, 3, 1), (2023, 3, 1), (2024, 12, 31), (1900, 12, 31)] {
            let date = CivilDate::from_ymd(y, m, d).unwrap();
            assert_eq!(i64::from(date.ordinal()) - 1, elapsed_days_in_year(&date));
        }
    }

    #[test]
    fn leap_day_count_matches_iteration() {
        let mut count = 0;
        for year in EPOCH_YEAR..=LAST_YEAR {
            assert_eq!(count, leap_days_since_epoch(year), "{year}");
            if YearType::from_gregorian(year).is_leap() {
                count += 1;
            }
        }
    }

    #[test]
    fn year_lengths() {
        let day = SECONDS_PER_DAY;
        // March 1 of a leap year against March 1 of the year before
        assert_eq!(366 * day, epoch(2024, 3, 1, 0, 0, 0) - epoch(2023, 3, 1, 0, 0, 0));
        assert_eq!(365 * day, epoch(2023, 3, 1, 0, 0, 0) - epoch(2022, 3, 1, 0, 0, 0));
        assert_eq!(365 * day, epoch(1900, 3, 1, 0, 0, 0) - epoch(1899, 3, 1, 0, 0, 0));
        assert_eq!(366 * day, epoch(2000, 3, 1, 0, 0, 0) - epoch(1999, 3, 1, 0, 0, 0));
    }

    #[test]
    fn consecutive_days_are_contiguous() {
        let mut prev = epoch(1999, 12, 31, 0, 0, 0);
        for year in [2000, 2001] {
            for month in 1..=12 {
                for d in 1..=days_in_month(year, month) {
                    let cur = epoch(year, month, d, 0, 0, 0);
                    assert_eq!(SECONDS_PER_DAY, cur - prev, "{year}-{month}-{d}");
                    prev = cur;
                }
            }
        }
    }

    #[test]
    fn rejects_years_outside_range() {
        for year in [1005, 2401, -1] {
            let date = CivilDate::from_ymd(year, 6, 1).unwrap();
            assert_eq!(
                Err(CalendarError::YearOutOfRange {
                    year,
                    min: EPOCH_YEAR,
                    max: LAST_YEAR
                }),
                civil_to_epoch_seconds(date)
            );
        }
    }

    #[test]
    fn checked_range() {
        assert!(EpochSeconds(0).checked().is_ok());
        assert!(EpochSeconds(MAX_EPOCH_SECONDS).checked().is_ok());
        assert!(EpochSeconds(-1).checked().is_err());
        assert!(EpochSeconds(MAX_EPOCH_SECONDS + 1).checked().is_err());
    }

    #[test]
    fn splits_days_and_seconds() {
        let e = EpochSeconds(3 * SECONDS_PER_DAY + 21_600);
        assert_eq!(3, e.days());
        assert_eq!(21_600, e.seconds_of_day());
        assert_eq!(SECONDS_PER_DAY, (e + SECONDS_PER_DAY) - e);
    }
}
