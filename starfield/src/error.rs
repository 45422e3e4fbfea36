use std::path::PathBuf;

use thiserror::Error;

/// Invalid user-supplied generation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid size '{0}': expected WIDTHxHEIGHT or WIDTH:HEIGHT with both dimensions > 0")]
    InvalidSize(String),

    #[error("Invalid density {0}: must be between 0.0 and 1.0")]
    InvalidDensity(f64),

    #[error("Invalid hex color '{0}': expected #RGB or #RRGGBB")]
    InvalidColor(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not load background image '{path}': {source}")]
    BackgroundLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Unsupported output file: {0}")]
    UnsupportedOutput(#[from] common::FileExtensionError),

    #[error("Failed to write image '{path}': {source}")]
    Encoding {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
