//! portal-display - display formatting tool for the archive portal.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use portal_display::cli::{self, Cli};
use portal_display::config::DisplayConfig;
use portal_display::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = DisplayConfig::load(cli.config.as_deref())?;
    debug!("config"; "truncate bound {}, {} class overrides",
        config.truncate.size, config.classes.len());

    cli::run(&cli, &config)
}
