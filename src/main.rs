//! remove_bg - make a solid image background transparent.

mod cli;
mod config;
mod image;
mod logger;

use crate::image::background::remove_background;
use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RemovalConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RemovalConfig::load(&cli)?;
    debug!("config"; "threshold={}, fade={}", config.threshold, config.fade);

    let stats = remove_background(&cli.input, &cli.output, &config)?;

    if let Some(bg) = stats.background {
        debug!(
            "remove";
            "background color: rgba({}, {}, {}, {})",
            bg[0], bg[1], bg[2], bg[3]
        );
    }
    let counts = stats.counts;
    debug!(
        "remove";
        "{} pixels: {} transparent, {} faded, {} opaque",
        counts.total(), counts.transparent, counts.faded, counts.opaque
    );

    log!(
        "remove";
        "saved soft-transparent image to {} (threshold={}, fade={})",
        cli.output.display(), config.threshold, config.fade
    );
    Ok(())
}
