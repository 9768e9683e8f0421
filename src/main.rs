mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use parsi_calendar::config::Config;
use parsi_calendar::zoroastrian::fmt::{MAH_NAMES, ROJ_NAMES};
use parsi_calendar::{CivilDate, convert_with};

use crate::cli::{Cli, Command, DisplayArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading configuration {}", cli.config.display()))?;

    match cli.command {
        Command::Today(args) => {
            let now = match config.utc_offset_minutes {
                Some(offset) => CivilDate::now_at_offset(offset)?,
                None => CivilDate::now(),
            };
            show(now, &config, &args)
        }
        Command::Convert(args) => show(args.datetime, &config, &args.display),
        Command::Names => {
            print_names();
            Ok(())
        }
    }
}

/// Converts `date` and prints it, flags taking precedence over `config`.
fn show(date: CivilDate, config: &Config, args: &DisplayArgs) -> Result<()> {
    let (variant, format) = args.resolve(config)?;
    tracing::info!(%date, %variant, template = format.template(), "converting");

    let td = convert_with(date, variant)
        .with_context(|| format!("converting {date} to the {variant} calendar"))?;
    println!("{}", format.render(&td));
    Ok(())
}

fn print_names() {
    println!("Mah");
    for (i, name) in MAH_NAMES.iter().enumerate() {
        println!("{:>4}  {name}", i + 1);
    }
    println!();
    println!("Roj");
    for (i, name) in ROJ_NAMES.iter().enumerate() {
        println!("{:>4}  {name}", i + 1);
    }
}
