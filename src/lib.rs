//! Utilities for converting civil dates into the Zoroastrian (Parsi)
//! calendars.
//!
//! Supported are the Shahenshahi and Kadmi reckonings for civil years 1006
//! through 2400, counted from the epoch of January 1, 1006.
//!
//! # Examples
//!
//! Basic usage with [`CivilDate`]:
//!
//! ```
//! use parsi_calendar::CivilDate;
//!
//! let date = CivilDate::from_ymd(2024, 8, 15).unwrap();
//!
//! assert_eq!(4, date.day_of_week()); // Thursday
//! assert_eq!(228, date.ordinal());
//! ```
//!
//! Shahenshahi calendar, rendered through a display preset:
//!
//! ```
//! use parsi_calendar::{CivilDate, convert};
//! use parsi_calendar::zoroastrian::fmt::{DisplayFormat, Preset};
//!
//! let date = CivilDate::new(2024, 8, 15, 12, 0, 0).unwrap();
//! let td = convert(date).unwrap();
//!
//! assert_eq!((1, 1, 1394), (td.roj(), td.mah(), td.year()));
//! assert_eq!(
//!     "Hormazd, mah Fravardin, 1394 yz",
//!     DisplayFormat::from(Preset::Compact).render(&td)
//! );
//! ```

pub mod config;
pub mod date;
pub mod epoch;
pub mod error;
pub mod zoroastrian;

pub use date::{CivilDate, YearType};
pub use epoch::EpochSeconds;
pub use error::CalendarError;
pub use zoroastrian::fmt::{DisplayFormat, Preset, format_display_string};
pub use zoroastrian::{CalendarVariant, TraditionalDate, convert, convert_with, today};
