use clap::Parser;

/// Convert a Gregorian date to the Discordian calendar.
#[derive(Debug, Parser)]
#[command(
    name = "ddate",
    version,
    about = "Convert a Gregorian date to the Discordian calendar"
)]
pub struct Cli {
    /// Date to convert, as YYYY-MM-DD. Defaults to today's local date.
    pub date: Option<String>,

    /// Print the converted date as JSON instead of a sentence.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
