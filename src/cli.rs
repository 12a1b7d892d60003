//! Command line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::{expand_path, Config};
use crate::style::ColorMode;

/// Show the day's chapter of Proverbs.
#[derive(Debug, Parser)]
#[command(name = "proverbs")]
#[command(version, about = "Show the day's chapter of Proverbs.")]
pub struct CommandLine {
    /// Day to show instead of today (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Verse file to read (overrides PROVERBS_PATH)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Text colour: black, red, orange, green, blue, purple or mixed
    #[arg(short, long)]
    pub color: Option<ColorMode>,

    /// Print the reading as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the clock header
    #[arg(long)]
    pub no_clock: bool,
}

impl CommandLine {
    /// Parse process arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Verse file path: the flag if given, else the configured path.
    pub fn resource_path(&self, config: &Config) -> PathBuf {
        self.file
            .as_deref()
            .map_or_else(|| config.resource_path.clone(), expand_path)
    }

    /// Colour mode: the flag if given, else the configured mode.
    pub fn color_mode(&self, config: &Config) -> ColorMode {
        self.color.unwrap_or(config.color)
    }
}
