use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parsi_calendar::config::Config;
use parsi_calendar::{CalendarError, CalendarVariant, CivilDate, DisplayFormat, Preset};

/// Shahenshahi and Kadmi calendar dates for civil dates.
#[derive(Parser)]
#[command(
    name = "parsi-date",
    version,
    about = "Show Zoroastrian calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file; ignored if it does not exist.
    #[arg(short, long, global = true, default_value = "parsi-date.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the date for the current wall-clock time.
    Today(DisplayArgs),
    /// Show the date for a given civil date and time.
    Convert(ConvertArgs),
    /// List roj and mah names with their numbers.
    Names,
}

/// Display overrides shared by `today` and `convert`.
#[derive(clap::Args)]
pub struct DisplayArgs {
    /// Calendar to convert into (shahenshahi, kadmi).
    #[arg(long)]
    pub calendar: Option<CalendarVariant>,

    /// Built-in display format (formal, compact).
    #[arg(long, conflicts_with = "template")]
    pub preset: Option<Preset>,

    /// Display template, e.g. "{roj} Roj, {mah} Mah, {year} Y.Z.".
    #[arg(long)]
    pub template: Option<String>,
}

impl DisplayArgs {
    /// Picks the calendar and display format, flags taking precedence over
    /// `config`: `--template`, then `--preset`, then `[display]`.
    pub fn resolve(
        &self,
        config: &Config,
    ) -> Result<(CalendarVariant, DisplayFormat), CalendarError> {
        let variant = self.calendar.unwrap_or(config.calendar);
        let format = match (&self.template, self.preset) {
            (Some(template), _) => DisplayFormat::parse(template)?,
            (None, Some(preset)) => preset.into(),
            (None, None) => config.display.format()?,
        };
        Ok((variant, format))
    }
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Civil date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`.
    pub datetime: CivilDate,

    #[command(flatten)]
    pub display: DisplayArgs,
}
