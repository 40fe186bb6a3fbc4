use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Save a webpage or local HTML file as a PDF.
#[derive(Debug, Parser)]
#[command(name = "webpdf", version, about)]
pub struct Cli {
    /// URL or path to a local HTML file.
    pub input: String,

    /// Output filename or directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Additional configuration file (TOML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the reachability and script probe.
    #[arg(long)]
    pub no_probe: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
