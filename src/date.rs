//! Civil (Gregorian) date and time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::CalendarError;

/// A Gregorian calendar date with a wall-clock time of day.
///
/// All components are validated on construction, so a `CivilDate` always
/// names a real instant of the proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl CivilDate {
    /// Creates a `CivilDate` from its components.
    ///
    /// # Example
    ///
    /// ```
    /// use parsi_calendar::CivilDate;
    ///
    /// let date = CivilDate::new(2024, 8, 15, 12, 0, 0).unwrap();
    /// assert_eq!(15, date.day());
    /// assert!(CivilDate::new(2023, 2, 29, 0, 0, 0).is_err());
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        check("month", month, 1..=12)?;
        check("day", day, 1..=days_in_month(year, month))?;
        check("hour", hour, 0..=23)?;
        check("minute", minute, 0..=59)?;
        check("second", second, 0..=59)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a `CivilDate` at midnight of the given day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Reads the current wall-clock time in the local time zone.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// Reads the current wall-clock time at a fixed offset from UTC, given
    /// in minutes east of Greenwich.
    pub fn now_at_offset(offset_minutes: i32) -> Result<Self, CalendarError> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(CalendarError::InvalidCivilDate {
                field: "utc offset",
                value: offset_minutes.into(),
            })?;
        Ok(Self::from(Utc::now().with_timezone(&offset).naive_local()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }

    /// Returns the ordinal day of the year, `1` for January 1.
    ///
    /// # Example
    ///
    /// ```
    /// use parsi_calendar::CivilDate;
    ///
    /// let date = CivilDate::from_ymd(2024, 3, 1).unwrap();
    /// assert_eq!(61, date.ordinal());
    /// ```
    pub fn ordinal(&self) -> u32 {
        ordinal_day_number(self.month, self.day, YearType::from_gregorian(self.year))
    }

    /// Returns the Julian day number (JDN) of the date.
    ///
    /// # Example
    ///
    /// ```
    /// use parsi_calendar::CivilDate;
    ///
    /// let date = CivilDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn jdn(&self) -> i64 {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use parsi_calendar::CivilDate;
    ///
    /// let date = CivilDate::from_ymd(2024, 8, 15).unwrap();
    /// assert_eq!(4, date.day_of_week()); // Thursday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        (self.jdn().rem_euclid(7) + 1) as u32
    }
}

impl From<NaiveDateTime> for CivilDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            // chrono folds a leap second into the nanosecond field
            second: dt.second().min(59),
        }
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
    /// A space may stand in for the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FORMATS: &[&str] = &[
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
            .map(Self::from)
            .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self::from))
            .ok_or_else(|| CalendarError::UnparseableCivilDate { input: s.into() })
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` of `year`, February following the Gregorian
/// leap rule. Returns `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if YearType::from_gregorian(year).is_leap() => 29,
        2 => 28,
        1..=12 => 31,
        _ => 0,
    }
}

fn ordinal_day_number(month: u32, day: u32, year_type: YearType) -> u32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as u32,
    }
}

fn check(
    field: &'static str,
    value: u32,
    range: std::ops::RangeInclusive<u32>,
) -> Result<(), CalendarError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CalendarError::InvalidCivilDate {
            field,
            value: value.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_components() {
        use CalendarError::InvalidCivilDate;
        for ((y, mo, d, h, mi, s), field) in [
            ((2024, 0, 1, 0, 0, 0), "month"),
            ((2024, 13, 1, 0, 0, 0), "month"),
            ((2024, 1, 0, 0, 0, 0), "day"),
            ((2024, 4, 31, 0, 0, 0), "day"),
            ((2023, 2, 29, 0, 0, 0), "day"),
            ((2024, 1, 1, 24, 0, 0), "hour"),
            ((2024, 1, 1, 0, 60, 0), "minute"),
            ((2024, 1, 1, 0, 0, 60), "second"),
        ] {
            let err = CivilDate::new(y, mo, d, h, mi, s).unwrap_err();
            assert!(
                matches!(err, InvalidCivilDate { field: f, .. } if f == field),
                "{y}-{mo}-{d} {h}:{mi}:{s} -> {err}"
            );
        }
        assert!(CivilDate::new(2024, 2, 29, 23, 59, 59).is_ok());
        assert!(CivilDate::new(2000, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilDate::new(1900, 2, 29, 0, 0, 0).is_err());
    }

    #[test]
    fn leap_rule() {
        use YearType::*;
        for (std, year) in [
            (Leap, 2024),
            (Common, 2023),
            (Common, 1900),
            (Leap, 2000),
            (Common, 2100),
            (Leap, 1600),
        ] {
            assert_eq!(std, YearType::from_gregorian(year), "{year}");
        }
    }

    #[test]
    fn ordinal_matches_month_lengths() {
        for year in [2023, 2024] {
            let mut expected = 0;
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    expected += 1;
                    let date = CivilDate::from_ymd(year, month, day).unwrap();
                    assert_eq!(expected, date.ordinal(), "{date}");
                }
            }
        }
    }

    #[test]
    fn to_day_of_week() {
        for ((y, m, d), std) in [
            ((1970, 1, 1), 4),
            ((2000, 1, 1), 6),
            ((2021, 9, 8), 3),
            ((2024, 8, 15), 4),
            ((1006, 1, 1), 3),
        ] {
            let date = CivilDate::from_ymd(y, m, d).unwrap();
            assert_eq!(std, date.day_of_week(), "{date}");
        }
    }

    #[test]
    fn from_chrono() {
        let dt = NaiveDate::from_ymd_opt(2024, 8, 15)
            .unwrap()
            .and_hms_opt(6, 30, 15)
            .unwrap();
        assert_eq!(
            CivilDate::new(2024, 8, 15, 6, 30, 15).unwrap(),
            CivilDate::from(dt)
        );
    }

    #[test]
    fn parse() {
        for (input, std) in [
            ("2024-08-15", (2024, 8, 15, 0, 0, 0)),
            ("2024-08-15T06:30", (2024, 8, 15, 6, 30, 0)),
            ("2024-08-15T06:30:15", (2024, 8, 15, 6, 30, 15)),
            (" 2024-08-15 23:59:59 ", (2024, 8, 15, 23, 59, 59)),
        ] {
            let (y, mo, d, h, mi, s) = std;
            assert_eq!(
                Ok(CivilDate::new(y, mo, d, h, mi, s).unwrap()),
                input.parse::<CivilDate>(),
                "{input}"
            );
        }
        for input in ["", "2024-02-30", "15/08/2024", "2024-08-15T25:00"] {
            assert!(
                matches!(
                    input.parse::<CivilDate>(),
                    Err(CalendarError::UnparseableCivilDate { .. })
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn display_iso() {
        let date = CivilDate::new(1006, 1, 1, 5, 59, 59).unwrap();
        assert_eq!("1006-01-01T05:59:59", date.to_string());
    }

    #[test]
    fn rejects_bad_offset() {
        assert!(CivilDate::now_at_offset(330).is_ok());
        assert!(CivilDate::now_at_offset(24 * 60).is_err());
    }
}
