//! CLI commands and argument parsing

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Query the USGS volcano webcam API
#[derive(Parser, Debug)]
#[command(name = "ashcam")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Give up on a call after this many seconds
    #[arg(short, long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one webcam
    Webcam {
        /// Webcam code, e.g. akunIsland-N
        code: String,
    },

    /// List every webcam
    Webcams,

    /// List the images of a webcam
    Images {
        /// Webcam code, e.g. redoubt-2
        code: String,

        /// Only images from the last N days
        #[arg(long)]
        days_old: Option<u32>,

        /// Start of a time window (RFC 3339)
        #[arg(long, requires = "end")]
        start: Option<DateTime<Utc>>,

        /// End of a time window (RFC 3339)
        #[arg(long, requires = "start")]
        end: Option<DateTime<Utc>>,

        /// List oldest images first
        #[arg(long)]
        oldest_first: bool,

        /// Maximum number of images (0 = no limit)
        #[arg(long, default_value = "0")]
        limit: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
