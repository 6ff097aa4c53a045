//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Display formatting tool for the archive portal
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: display.toml if present)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands, one per display transform.
///
/// Text arguments accept `-` to read from stdin.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a count with its pluralized noun (or just the suffix)
    #[command(visible_alias = "p")]
    Pluralize {
        /// Number of items
        count: usize,

        /// Noun to pluralize; omitted prints only the suffix
        noun: Option<String>,
    },

    /// Capitalise the first letter (or every word)
    #[command(visible_alias = "c")]
    Capitalise {
        /// Text to capitalise
        text: String,

        /// Capitalise every space-separated word
        #[arg(short, long)]
        words: bool,
    },

    /// Truncate text to a visible-character bound plus an ellipsis
    #[command(visible_alias = "t")]
    Truncate {
        /// Text to truncate
        text: String,

        /// Character bound (default from config, 7 out of the box)
        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Shorten a hash to its first seven characters plus "..."
    ShortHash {
        /// Hash or identifier to shorten
        hash: String,
    },

    /// Split text into trimmed, non-empty lines
    #[command(visible_alias = "l")]
    Lines {
        /// Text to split
        text: String,

        /// Print as a JSON array instead of one line per row
        #[arg(short, long)]
        json: bool,
    },

    /// Highlight case-insensitive matches of a search term
    Highlight {
        /// Text to search in
        text: String,

        /// Search term (matched literally)
        needle: String,

        /// Print the segment list as JSON instead of colored text
        #[arg(short, long)]
        json: bool,
    },

    /// Format a byte count as a human-readable size
    Bytes {
        /// Number of bytes
        count: u64,
    },

    /// Get the initial letters of a person's name
    Initials {
        /// The person's name
        name: String,
    },

    /// Replace a substring everywhere (defaults turn underscores into spaces)
    Replace {
        /// Text to rewrite
        text: String,

        /// Substring to replace
        #[arg(default_value = "_")]
        from: String,

        /// Replacement
        #[arg(default_value = " ")]
        to: String,
    },

    /// Print the calendar date (or year) of a backend timestamp
    Date {
        /// Timestamp, e.g. 2025-05-29T15:30:00Z
        value: String,

        /// Print only the year
        #[arg(short, long)]
        year: bool,
    },

    /// Map an enumerated state to its display name and CSS class
    #[command(visible_alias = "s")]
    State {
        #[command(subcommand)]
        state: StateCommand,
    },
}

/// State mapper subcommands, one per enumeration.
#[derive(Subcommand, Debug, Clone)]
pub enum StateCommand {
    /// IVA verification state (Unverified, CodeRequested, ...)
    Iva {
        /// Raw state as sent by the backend
        state: String,

        /// Print as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// IVA contact channel type (Phone, Fax, ...)
    IvaType {
        /// Raw type as sent by the backend
        r#type: String,

        /// Contact value (phone number, address, ...)
        #[arg(default_value = "")]
        value: String,

        /// Print as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Access request status (allowed, denied, pending)
    Access {
        /// Raw status as sent by the backend
        status: String,
    },

    /// Account status (active, inactive)
    Account {
        /// Raw status as sent by the backend
        status: String,
    },
}
