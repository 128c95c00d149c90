mod config;
mod error;
mod logging;
mod scan;

use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use colorview::color_report;
use log::{error, info};
use styledom::terminal::{terminal_width, write_buffer};
use styledom::{layout, render};

use crate::config::{Args, ColorSource, Config, DEFAULT_WIDTH};
use crate::error::CliError;
use crate::scan::scan_colors;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let colors = collect_colors(&config.source)?;
    info!("collected {} color values", colors.len());

    let theme = config.theme.theme();
    let width = config
        .width
        .or_else(terminal_width)
        .unwrap_or(DEFAULT_WIDTH);

    let tree = color_report(&colors);
    let laid_out = layout(&tree, &theme, width);
    let buf = render(&laid_out, &theme);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_buffer(&buf, &mut out)?;
    Ok(())
}

fn collect_colors(source: &ColorSource) -> Result<Vec<String>, CliError> {
    match source {
        ColorSource::Values(values) => Ok(values.clone()),
        ColorSource::Css(paths) => {
            let mut colors = Vec::new();
            for path in paths {
                let css = fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                let found = scan_colors(&css);
                info!("{}: {} color values", path.display(), found.len());
                colors.extend(found);
            }
            Ok(colors)
        }
        ColorSource::Stdin => read_lines(io::stdin().lock()),
    }
}

/// Non-blank lines, trimmed.
fn read_lines(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut colors = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(CliError::Stdin)?;
        let line = line.trim();
        if !line.is_empty() {
            colors.push(line.to_string());
        }
    }
    Ok(colors)
}
