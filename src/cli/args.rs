use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradetally")]
#[command(about = "Collect grading comments and total the scores", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total the grading comments of a directory
    Scan {
        /// Directory to scan
        path: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Print the score of every scanned file
        #[arg(long = "per-file")]
        per_file: bool,

        /// Write a text report into every directory with scanned files
        #[arg(long)]
        report: bool,

        /// Write a CSV summary at the scan root (requires --recursive)
        #[arg(long)]
        summary: bool,

        /// Marker that starts a grading comment
        #[arg(long, env = "GRADETALLY_MARKER")]
        marker: Option<String>,

        /// Suffix of the files to scan
        #[arg(long, env = "GRADETALLY_SUFFIX")]
        suffix: Option<String>,

        /// Configuration file (skips discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a gradetally configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        match &self.command {
            Commands::Scan { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
