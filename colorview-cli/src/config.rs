//! Command line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use styledom::DefaultTheme;

/// Columns used when the width is neither given nor detectable.
pub const DEFAULT_WIDTH: u16 = 80;

#[derive(Debug, Parser)]
#[command(
    name = "palette-report",
    version,
    about = "Report the colors used in a stylesheet or a list of values"
)]
pub struct Args {
    /// Color values to report. Read from stdin, one per line, when omitted.
    pub colors: Vec<String>,

    /// Scan CSS files for color declarations instead of taking values.
    #[arg(long, value_name = "FILE", conflicts_with = "colors")]
    pub css: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Report width in columns. Defaults to the terminal width.
    #[arg(long)]
    pub width: Option<u16>,

    #[arg(long, env = "PALETTE_REPORT_LOG", default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> DefaultTheme {
        match self {
            Self::Dark => DefaultTheme::dark(),
            Self::Light => DefaultTheme::light(),
        }
    }
}

/// Where the color collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    Values(Vec<String>),
    Css(Vec<PathBuf>),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: ColorSource,
    pub theme: ThemeChoice,
    pub width: Option<u16>,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = if !args.css.is_empty() {
            ColorSource::Css(args.css)
        } else if !args.colors.is_empty() {
            ColorSource::Values(args.colors)
        } else {
            ColorSource::Stdin
        };

        Self {
            source,
            theme: args.theme,
            width: args.width.filter(|w| *w > 0),
            log_level: args.log_level,
        }
    }
}
