//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// calendarize - Turn free-form text into calendar events
#[derive(Debug, Parser)]
#[command(name = "calendarize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generation endpoint URL
    #[arg(long, env = "CALENDARIZE_ENDPOINT", default_value = "http://localhost:8000/generate")]
    pub endpoint: String,

    /// IANA timezone sent with conversion requests
    #[arg(long, env = "CALENDARIZE_TIMEZONE", default_value = "UTC")]
    pub time_zone: String,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit text to the extraction service and show the resulting events
    Convert {
        /// The text to convert (joined with spaces)
        text: Vec<String>,

        /// Read the text from a file instead
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the normalized events as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Write each event's ICS file into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Build export artifacts for a previously saved event
    Export {
        /// Path to an event JSON file (service response shape)
        event: PathBuf,

        /// Print the Google Calendar deep link
        #[arg(long)]
        google: bool,

        /// Print the Outlook deep link
        #[arg(long)]
        outlook: bool,

        /// Download the ICS file
        #[arg(long)]
        ics: bool,

        /// Open links in the browser / the downloaded file
        #[arg(long)]
        open: bool,

        /// Directory for the ICS download (default: current directory)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}
