use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use common::LogOptions;
use starfield::config::{DEFAULT_DENSITY, DEFAULT_OUTPUT};
use starfield::encoder::{output_format, save_canvas};
use starfield::prelude::*;

/// Generate a starfield image
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Size of the image in pixels (WIDTHxHEIGHT or WIDTH:HEIGHT)
    #[arg(short, long, default_value = "1920x1080")]
    size: Size,

    /// Ratio of star pixels to total pixels (0.0-1.0)
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Background color (#RRGGBB or #RGB) or path to a background image
    #[arg(short, long, default_value = "#000000")]
    background: BackgroundSpec,

    /// Output file path (png, jpg, bmp or tiff)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Random seed; a random one is chosen and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How a background image is fitted to the canvas (cover or stretch)
    #[arg(long, default_value = "cover")]
    fit: FitMode,

    /// Disable the glow ring around bright stars
    #[arg(long)]
    no_glow: bool,

    /// Disable diffraction spikes on the brightest stars
    #[arg(long)]
    no_spikes: bool,

    /// Log level specification, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write rotating log files into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn generation_config(&self) -> Result<GenerationConfig, ConfigError> {
        let effects = StarEffects {
            glow: !self.no_glow,
            spikes: !self.no_spikes,
        };

        Ok(GenerationConfig::new(
            self.size,
            self.density,
            self.background.clone(),
            &self.output,
        )?
        .with_seed(self.seed)
        .with_fit(self.fit)
        .with_effects(effects))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = common::setup_logging(&LogOptions {
        level: args.log_level.clone(),
        directory: args.log_dir.clone(),
        ..Default::default()
    })
    .context("Logger initialization failed")?;

    let config = args.generation_config()?;
    // Fail on an unknown extension before spending time on generation
    output_format(config.output())?;

    log::info!(
        "Generating starfield: {} with density {}",
        config.size(),
        config.density()
    );

    let canvas = StarfieldGenerator::new(config.clone())
        .generate()
        .context("Starfield generation failed")?;

    save_canvas(&canvas, config.output())
        .with_context(|| format!("Failed to save {}", config.output().display()))?;

    log::info!("Starfield saved to {}", config.output().display());

    Ok(())
}
