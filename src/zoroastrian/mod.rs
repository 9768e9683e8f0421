//! Zoroastrian (Parsi) calendars.
//!
//! Both supported reckonings count 365 days in every year: twelve mahs of
//! 30 roj each, followed by the five Gatha days which are kept here as roj
//! 31 to 35 of the twelfth mah. Years are counted in the Yazdegerdi era
//! (Y.Z.) and a day begins at 06:00 on the wall clock rather than at
//! midnight.
//!
//! Kadmi runs exactly one mah ahead of Shahenshahi.
//!
//! # Example
//!
//! ```
//! use parsi_calendar::CivilDate;
//! use parsi_calendar::zoroastrian::{CalendarVariant, convert_with};
//!
//! let date = CivilDate::new(2024, 8, 15, 12, 0, 0).unwrap();
//! let td = convert_with(date, CalendarVariant::Shahenshahi).unwrap();
//! assert_eq!((1, 1, 1394), (td.roj(), td.mah(), td.year()));
//! assert_eq!("Hormazd Roj, Fravardin Mah, 1394 Y.Z.", td.to_string());
//! ```

use std::fmt::{self as std_fmt, Display};
use std::str::FromStr;

use serde::Deserialize;

use crate::date::CivilDate;
use crate::epoch::{self, DAYS_PER_YEAR, EpochSeconds};
use crate::error::CalendarError;

pub mod fmt;

/// Yazdegerdi year in progress at the epoch, January 1 of civil year 1006.
pub const EPOCH_YZ_YEAR: i32 = 374;
/// Wall-clock hour at which a new roj begins.
pub const DAY_START_HOUR: i64 = 6;

const DAYS_PER_MAH: u32 = 30;

/// Which reckoning to convert into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarVariant {
    #[default]
    Shahenshahi,
    Kadmi,
}

impl CalendarVariant {
    /// Day of the Yazdegerdi year 374 on which the epoch falls, minus one,
    /// for an instant before (`false`) or after (`true`) the 06:00 day start.
    ///
    /// At the epoch Shahenshahi reads roj 16 of mah 9 before 06:00, Kadmi
    /// roj 16 of mah 10.
    pub fn day_offset(&self, after_day_start: bool) -> i64 {
        let base = match self {
            CalendarVariant::Shahenshahi => 256,
            CalendarVariant::Kadmi => 286,
        };
        base + after_day_start as i64
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalendarVariant::Shahenshahi => "shahenshahi",
            CalendarVariant::Kadmi => "kadmi",
        }
    }
}

impl FromStr for CalendarVariant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shahenshahi" | "s" => Ok(CalendarVariant::Shahenshahi),
            "kadmi" | "k" => Ok(CalendarVariant::Kadmi),
            _ => Err(CalendarError::UnknownName {
                kind: "calendar variant",
                name: s.into(),
            }),
        }
    }
}

impl Display for CalendarVariant {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.name())
    }
}

/// A date in a Zoroastrian calendar.
///
/// `roj` is `1..=30`, except in mah 12 where roj 31 to 35 are the Gatha
/// days and roj 36 the leap day; `mah` is `1..=12`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TraditionalDate {
    roj: u32,
    mah: u32,
    year: i32,
}

impl TraditionalDate {
    /// Creates a `TraditionalDate`, checking `roj` against `mah`.
    ///
    /// # Example
    ///
    /// ```
    /// use parsi_calendar::TraditionalDate;
    ///
    /// assert!(TraditionalDate::new(35, 12, 1393).is_ok());
    /// assert!(TraditionalDate::new(31, 11, 1393).is_err());
    /// ```
    pub fn new(roj: u32, mah: u32, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&mah) {
            return Err(CalendarError::MahOutOfRange { mah });
        }
        let last_roj = if mah == 12 { 36 } else { DAYS_PER_MAH };
        if !(1..=last_roj).contains(&roj) {
            return Err(CalendarError::RojOutOfRange { roj, mah });
        }
        Ok(Self { roj, mah, year })
    }

    pub fn roj(&self) -> u32 {
        self.roj
    }
    pub fn mah(&self) -> u32 {
        self.mah
    }
    /// Yazdegerdi year.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Day of the year, `1` for roj 1 of mah 1 up to `365` for the last
    /// Gatha day. Roj 36, the leap day, gives `366`.
    pub fn day_of_year(&self) -> u32 {
        (self.mah - 1) * DAYS_PER_MAH + self.roj
    }
    pub fn roj_name(&self) -> &'static str {
        fmt::roj_name(self.roj)
    }
    pub fn mah_name(&self) -> &'static str {
        fmt::mah_name(self.mah)
    }

    /// Splits a day of the year (`1..=365`) into roj and mah.
    fn from_day_of_year(day: u32, year: i32) -> Self {
        let mut mah = day / DAYS_PER_MAH + 1;
        let mut roj = day % DAYS_PER_MAH;
        if roj == 0 {
            roj = DAYS_PER_MAH;
            mah -= 1;
        }
        // Gatha days stay in the twelfth mah
        if mah == 13 {
            mah = 12;
            roj += DAYS_PER_MAH;
        }
        Self { roj, mah, year }
    }
}

/// Formats with the formal preset, e.g. `Govad Roj, Ava Mah, 1394 Y.Z.`.
impl Display for TraditionalDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&fmt::DisplayFormat::from(fmt::Preset::Formal).render(self))
    }
}

/// Converts epoch seconds into a date of `variant`.
///
/// Returns `Err` if `epoch` is negative or past the end of civil year 2400.
///
/// # Example
///
/// ```
/// use parsi_calendar::epoch::EpochSeconds;
/// use parsi_calendar::zoroastrian::{CalendarVariant, epoch_seconds_to_traditional_date};
///
/// let td = epoch_seconds_to_traditional_date(EpochSeconds(0), CalendarVariant::Shahenshahi)
///     .unwrap();
/// assert_eq!((16, 9, 374), (td.roj(), td.mah(), td.year()));
/// ```
pub fn epoch_seconds_to_traditional_date(
    epoch: EpochSeconds,
    variant: CalendarVariant,
) -> Result<TraditionalDate, CalendarError> {
    let epoch = epoch.checked()?;
    let minutes = epoch.0 / 60;
    let hours = minutes / 60;
    let hour_of_day = hours % 24;
    let days = hours / 24;

    let mut day = days + variant.day_offset(hour_of_day >= DAY_START_HOUR);
    let mut year = EPOCH_YZ_YEAR;
    while day > DAYS_PER_YEAR {
        day -= DAYS_PER_YEAR;
        year += 1;
    }
    tracing::trace!(?epoch, %variant, year, day, "epoch seconds to day of year");

    // day is in 1..=365 here, so the split cannot leave the tables
    Ok(TraditionalDate::from_day_of_year(day as u32, year))
}

/// Converts a civil date/time into a Shahenshahi date.
///
/// # Example
///
/// ```
/// use parsi_calendar::{CivilDate, convert};
///
/// let date = CivilDate::new(2024, 8, 14, 12, 0, 0).unwrap();
/// let td = convert(date).unwrap();
/// assert_eq!("Vahishtoisht Roj, Aspandard Mah, 1393 Y.Z.", td.to_string());
/// ```
pub fn convert(date: CivilDate) -> Result<TraditionalDate, CalendarError> {
    convert_with(date, CalendarVariant::Shahenshahi)
}

/// Converts a civil date/time into a date of `variant`.
pub fn convert_with(
    date: CivilDate,
    variant: CalendarVariant,
) -> Result<TraditionalDate, CalendarError> {
    let epoch = epoch::civil_to_epoch_seconds(date)?;
    let td = epoch_seconds_to_traditional_date(epoch, variant)?;
    tracing::debug!(
        %date,
        %variant,
        roj = td.roj,
        mah = td.mah,
        year = td.year,
        "converted civil date"
    );
    Ok(td)
}

/// Converts the current local wall-clock time.
pub fn today(variant: CalendarVariant) -> Result<TraditionalDate, CalendarError> {
    convert_with(CivilDate::now(), variant)
}
