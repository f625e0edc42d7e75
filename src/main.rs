mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use discordian::{Clock, GregorianDate, SystemClock};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli, &SystemClock, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Converts the requested date (or today's) and writes one line to `out`.
fn run(cli: &Cli, clock: &impl Clock, out: &mut impl Write) -> Result<()> {
    let date = match cli.date.as_deref() {
        Some(input) => GregorianDate::parse_iso(input)?,
        None => clock.today().context("failed to read the current date")?,
    };
    info!(%date, "converting");

    let converted = discordian::convert(date);
    let line = if cli.json {
        serde_json::to_string(&converted)?
    } else {
        converted.sentence()
    };

    writeln!(out, "{line}")?;
    Ok(())
}
