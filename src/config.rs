//! TOML configuration for rendering dates.
//!
//! ```toml
//! calendar = "kadmi"
//! utc_offset_minutes = 330
//!
//! [display]
//! preset = "compact"
//! template = "{roj} / {mah} / {year}"
//! ```
//!
//! Every key is optional; a `template` takes precedence over `preset`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CalendarError;
use crate::zoroastrian::CalendarVariant;
use crate::zoroastrian::fmt::{DisplayFormat, Preset};

/// Offsets at or beyond a full day are rejected.
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Error type for loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the file is not valid TOML for [`Config`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Returned when a value parses but is not usable.
    #[error("invalid configuration: {0}")]
    Calendar(#[from] CalendarError),
}

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reckoning to convert into.
    #[serde(default)]
    pub calendar: CalendarVariant,

    /// Fixed offset from UTC in minutes; the local time zone when absent.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub preset: Preset,
    pub template: Option<String>,
}

impl DisplayConfig {
    /// Compiles the configured template, or the preset when none is set.
    pub fn format(&self) -> Result<DisplayFormat, CalendarError> {
        match &self.template {
            Some(template) => DisplayFormat::parse(template),
            None => Ok(self.preset.into()),
        }
    }
}

impl Config {
    /// Parses and validates a configuration document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Reads a configuration file, falling back to defaults if it does not
    /// exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), CalendarError> {
        if let Some(offset) = self.utc_offset_minutes
            && !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset)
        {
            return Err(CalendarError::InvalidCivilDate {
                field: "utc offset",
                value: offset.into(),
            });
        }
        self.display.format()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(CalendarVariant::Shahenshahi, config.calendar);
        assert_eq!(DisplayFormat::from(Preset::Formal), config.display.format().unwrap());
    }

    #[test]
    fn full_document() {
        let config = Config::from_toml_str(
            r#"
            calendar = "kadmi"
            utc_offset_minutes = 330

            [display]
            preset = "compact"
            template = "{roj_num}.{mah_num}.{year}"
            "#,
        )
        .unwrap();
        assert_eq!(CalendarVariant::Kadmi, config.calendar);
        assert_eq!(Some(330), config.utc_offset_minutes);
        assert_eq!(Preset::Compact, config.display.preset);
        assert_eq!(
            "{roj_num}.{mah_num}.{year}",
            config.display.format().unwrap().template()
        );
    }

    #[test]
    fn preset_without_template() {
        let config = Config::from_toml_str("[display]\npreset = \"compact\"\n").unwrap();
        assert_eq!(
            Preset::Compact.template(),
            config.display.format().unwrap().template()
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            Config::from_toml_str("colour = \"blue\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("calendar = \"fasli\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_template() {
        assert!(matches!(
            Config::from_toml_str("[display]\ntemplate = \"{nope}\"\n"),
            Err(ConfigError::Calendar(CalendarError::InvalidTemplate { .. }))
        ));
    }

    #[test]
    fn rejects_bad_offset() {
        assert!(matches!(
            Config::from_toml_str("utc_offset_minutes = 1440"),
            Err(ConfigError::Calendar(CalendarError::InvalidCivilDate { .. }))
        ));
        assert!(Config::from_toml_str("utc_offset_minutes = -1439").is_ok());
    }
}
