//! Command dispatch for the display tool.
//!
//! Results go to stdout (one value per line, or JSON with `--json`);
//! diagnostics go through the logger on stderr so output stays pipeable.

use std::io::Read;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::args::{Cli, Commands, StateCommand};
use crate::config::DisplayConfig;
use crate::debug;
use crate::status::StateDisplay;
use crate::status::access::access_request_status_class;
use crate::status::account::account_status_class;
use crate::status::iva::{iva_state_display, iva_type_display};
use crate::text::bytes::format_bytes;
use crate::text::capitalise::{capitalise, capitalise_words};
use crate::text::date::{iso_date, year};
use crate::text::highlight::highlight_matches;
use crate::text::initials::initials;
use crate::text::lines::split_lines;
use crate::text::plural::{plural_count, plural_s};
use crate::text::replace::replace_all;
use crate::text::truncate::{short_hash, truncate};

/// Execute the parsed command against the loaded config.
pub fn run(cli: &Cli, config: &DisplayConfig) -> Result<()> {
    match &cli.command {
        Commands::Pluralize { count, noun } => match noun {
            Some(noun) => println!("{}", plural_count(*count, noun)),
            None => println!("{}", plural_s(*count)),
        },
        Commands::Capitalise { text, words } => {
            let text = read_arg(text)?;
            if *words {
                println!("{}", capitalise_words(&text));
            } else {
                println!("{}", capitalise(&text));
            }
        }
        Commands::Truncate { text, size } => {
            let text = read_arg(text)?;
            let size = size.unwrap_or(config.truncate.size);
            debug!("truncate"; "using bound {size}");
            println!("{}", truncate(&text, size));
        }
        Commands::ShortHash { hash } => println!("{}", short_hash(hash)),
        Commands::Lines { text, json } => {
            let text = read_arg(text)?;
            let lines = split_lines(&text);
            if *json {
                println!("{}", serde_json::to_string(&lines)?);
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        Commands::Highlight { text, needle, json } => {
            let text = read_arg(text)?;
            let segments = highlight_matches(&text, needle);
            if *json {
                println!("{}", serde_json::to_string(&segments)?);
            } else {
                for segment in &segments {
                    if segment.highlighted {
                        print!("{}", segment.text.yellow().bold());
                    } else {
                        print!("{}", segment.text);
                    }
                }
                println!();
            }
        }
        Commands::Bytes { count } => println!("{}", format_bytes(*count)),
        Commands::Initials { name } => match initials(name) {
            Some(initials) => println!("{initials}"),
            None => debug!("initials"; "blank name, nothing to show"),
        },
        Commands::Replace { text, from, to } => {
            let text = read_arg(text)?;
            println!("{}", replace_all(&text, from, to));
        }
        Commands::Date { value, year: only_year } => {
            let formatted = if *only_year { year(value) } else { iso_date(value) };
            if formatted.is_empty() {
                debug!("date"; "`{value}` is not a valid timestamp");
            }
            println!("{formatted}");
        }
        Commands::State { state } => run_state(state, config)?,
    }
    Ok(())
}

fn run_state(command: &StateCommand, config: &DisplayConfig) -> Result<()> {
    match command {
        StateCommand::Iva { state, json } => {
            let display = with_overrides(iva_state_display(state), state, config);
            if *json {
                println!("{}", serde_json::to_string(&display)?);
            } else {
                println!("{}\t{}", display.name, display.class);
            }
        }
        StateCommand::IvaType { r#type, value, json } => {
            let display = iva_type_display(r#type, value);
            if display.icon.is_empty() {
                debug!("state"; "unknown IVA type `{}`", r#type);
            }
            if *json {
                println!("{}", serde_json::to_string(&display)?);
            } else {
                println!("{}\t{}\t{}", display.display, display.type_and_value, display.icon);
            }
        }
        StateCommand::Access { status } => {
            println!("{}", override_or(config, status, access_request_status_class(status)));
        }
        StateCommand::Account { status } => {
            println!("{}", override_or(config, status, account_status_class(status)));
        }
    }
    Ok(())
}

/// Apply config fallback label and per-state class overrides.
fn with_overrides(mut display: StateDisplay, raw: &str, config: &DisplayConfig) -> StateDisplay {
    if raw.is_empty() {
        display.name = config.fallback.state_label.clone();
    }
    if let Some(class) = config.class_override(raw) {
        debug!("state"; "class override for `{raw}`: {class}");
        display.class = class.to_owned();
    }
    display
}

fn override_or<'a>(config: &'a DisplayConfig, raw: &str, class: &'a str) -> &'a str {
    config.class_override(raw).unwrap_or(class)
}

/// Read a text argument, `-` meaning stdin (one trailing newline stripped).
fn read_arg(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_owned());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    Ok(buffer)
}
