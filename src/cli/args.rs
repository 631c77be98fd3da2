use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// The session itself is interactive; these flags only control where data
/// comes from and how much is logged.
#[derive(Parser, Debug)]
#[command(name = "bikeshare-explorer")]
#[command(about = "Explore US bikeshare trip data for Chicago, New York City and Washington")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Directory holding chicago.csv, new_york_city.csv and washington.csv")]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, help = "TOML file with data_dir and per-city [files] overrides")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(short, long, help = "Do not show the loading spinner")]
    pub quiet: bool,
}
