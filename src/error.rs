//! Error types.

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a civil year lies outside the supported window.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported civil year.
        min: i32,
        /// Last supported civil year.
        max: i32,
    },

    /// Returned when a civil date/time component is malformed.
    #[error("invalid {field}: {value}")]
    InvalidCivilDate {
        /// Name of the offending component.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when text cannot be read as a civil date/time.
    #[error("cannot parse civil date/time {input:?}")]
    UnparseableCivilDate {
        /// The text as given.
        input: String,
    },

    /// Returned when an epoch-seconds value cannot be converted.
    #[error("epoch seconds {seconds} outside supported range 0..={max}")]
    EpochOutOfRange {
        /// The rejected value.
        seconds: i64,
        /// Largest supported value.
        max: i64,
    },

    /// Returned when a roj index is not valid in its mah: `1..=30`, or
    /// `1..=36` in the twelfth mah which carries the closing days.
    #[error("roj {roj} out of range for mah {mah}")]
    RojOutOfRange {
        /// The rejected index.
        roj: u32,
        /// The mah it was paired with.
        mah: u32,
    },

    /// Returned when a mah index is not in `1..=12`.
    #[error("mah {mah} not in 1..=12")]
    MahOutOfRange {
        /// The rejected index.
        mah: u32,
    },

    /// Returned when a calendar variant or preset name is not recognised.
    #[error("unknown {kind} {name:?}")]
    UnknownName {
        /// What kind of name was looked up.
        kind: &'static str,
        /// The name as given.
        name: String,
    },

    /// Returned when a display template cannot be compiled.
    #[error("invalid display template {template:?}: {reason}")]
    InvalidTemplate {
        /// The template as given.
        template: String,
        /// What is wrong with it.
        reason: String,
    },
}
