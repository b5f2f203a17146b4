// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flatbed — command-line document scanner.
//
// Entry point. Initialises logging, parses arguments, runs one scan (or
// detection) on a still image and reports failures in plain English.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use flatbed_core::error::{FlatbedError, Result};
use flatbed_core::human_errors::humanize_error;
use flatbed_core::{OutputSpec, PaperSize, ScanConfig, ScanError};
use flatbed_scan::{DocumentScanner, save_scan};
use image::RgbImage;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the document in a photo, flatten it and save it as a JPEG
    Scan {
        /// Photo containing the document
        input: PathBuf,
        /// Directory the scan is saved into (created if missing)
        #[arg(short, long, default_value = "scans")]
        output_dir: PathBuf,
        #[command(flatten)]
        size: SizeArgs,
        /// JSON configuration file (see `flatbed config`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the ordered document corners as JSON without warping
    Detect {
        /// Photo containing the document
        input: PathBuf,
        /// JSON configuration file (see `flatbed config`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the default configuration as JSON
    Config,
}

/// Output size overrides. Either an explicit size or a paper preset.
#[derive(Debug, clap::Args)]
struct SizeArgs {
    /// Output width in pixels
    #[arg(long, requires = "height", conflicts_with = "paper")]
    width: Option<f32>,
    /// Output height in pixels
    #[arg(long, requires = "width", conflicts_with = "paper")]
    height: Option<f32>,
    /// Paper preset for the output size: a3, a4, a5, letter, legal
    #[arg(long)]
    paper: Option<String>,
    /// Output resolution used with --paper, in pixels per millimetre
    #[arg(long, default_value = "2.0")]
    px_per_mm: f32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan {
            input,
            output_dir,
            size,
            config,
        } => {
            let config = apply_size(load_config(config.as_deref())?, &size)?;
            let scanner = DocumentScanner::from_config(config)?;
            let frame = load_frame(&input)?;
            let page = scanner.scan(&frame)?;
            let path = save_scan(&page, &output_dir)?;
            println!("{}", path.display());
        }
        Commands::Detect { input, config } => {
            let scanner = DocumentScanner::from_config(load_config(config.as_deref())?)?;
            let frame = load_frame(&input)?;
            let corners = scanner.detect(&frame)?;
            let report = serde_json::json!({
                "top_left": [corners.top_left.x, corners.top_left.y],
                "top_right": [corners.top_right.x, corners.top_right.y],
                "bottom_left": [corners.bottom_left.x, corners.bottom_left.y],
                "bottom_right": [corners.bottom_right.x, corners.bottom_right.y],
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&ScanConfig::default())?);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ScanConfig::load(path)
        }
        None => Ok(ScanConfig::default()),
    }
}

/// Command-line size options take precedence over the configuration file.
fn apply_size(mut config: ScanConfig, size: &SizeArgs) -> Result<ScanConfig> {
    if let Some(name) = &size.paper {
        let paper = PaperSize::from_name(name)
            .ok_or_else(|| FlatbedError::InvalidConfig(format!("unknown paper size '{name}'")))?;
        config.output = OutputSpec::from_paper(paper, size.px_per_mm)?;
    } else if let (Some(width), Some(height)) = (size.width, size.height) {
        config.output = OutputSpec::new(width, height)?;
    }
    Ok(config)
}

fn load_frame(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|err| {
        FlatbedError::ImageError(format!("failed to open {}: {}", path.display(), err))
    })?;
    info!(
        width = image.width(),
        height = image.height(),
        "Frame loaded"
    );
    Ok(image.to_rgb8())
}

/// 2 means "no document in this photo, try another", 1 is any other failure.
fn exit_status(err: &FlatbedError) -> u8 {
    match err {
        FlatbedError::Scan(ScanError::NoDocumentDetected) => 2,
        _ => 1,
    }
}
