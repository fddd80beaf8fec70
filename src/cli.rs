use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Sunrise and sunset table generator.
#[derive(Debug, Parser)]
#[command(
    name = "suntable",
    version,
    about = "Write daily sunrise and sunset times for a range of years into SQLite",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override latitude from config (degrees, positive North).
    #[arg(long)]
    pub latitude: Option<f64>,

    /// Override longitude from config (degrees, positive East).
    #[arg(long)]
    pub longitude: Option<f64>,

    /// Override zenith angle from config (degrees).
    #[arg(long)]
    pub zenith: Option<f64>,

    /// Override leap-year rule from config.
    #[arg(long, value_enum)]
    pub leap_rule: Option<LeapRuleArg>,

    /// Existing SQLite database to write into.
    pub store_path: PathBuf,

    /// File holding the INSERT statement with seven placeholders.
    pub template_file: PathBuf,

    /// First year to generate.
    #[arg(value_parser = clap::value_parser!(i32).range(1900..=9999))]
    pub from_year: i32,

    /// Last year to generate (inclusive).
    #[arg(value_parser = clap::value_parser!(i32).range(1900..=9999))]
    pub until_year: i32,

    /// Standard-time offset from UTC in hours.
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(i32).range(-12..=14))]
    pub utc_offset: i32,
}

/// Leap-year rule names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LeapRuleArg {
    /// Standard Gregorian rule.
    Gregorian,
    /// February always has 28 days.
    SourceCompatible,
}
