//! Builds the base canvas the stars are composited onto.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::imageops::FilterType;
use image::DynamicImage;
use strum_macros::{Display, EnumString};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::Size;
use crate::error::{ConfigError, Error, Result};

const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundSpec {
    Color(Color),
    Image(PathBuf),
}

impl FromStr for BackgroundSpec {
    type Err = ConfigError;

    /// `#`-prefixed strings and bare 3/6-digit hex strings are colors,
    /// anything else is an image path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() || s.starts_with('#') || Color::is_bare_hex(s) {
            return Color::from_hex(s).map(BackgroundSpec::Color);
        }
        Ok(BackgroundSpec::Image(PathBuf::from(s)))
    }
}

/// How a background image is mapped onto a canvas of a different shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FitMode {
    /// Scale to cover the canvas keeping aspect ratio, then center-crop.
    #[default]
    Cover,
    /// Scale each axis independently to the canvas size.
    Stretch,
}

/// Produces a canvas of exactly `size` from the background spec.
pub fn resolve_background(size: Size, spec: &BackgroundSpec, fit: FitMode) -> Result<Canvas> {
    match spec {
        BackgroundSpec::Color(color) => {
            log::debug!("Filling {} background with {}", size, color);
            Ok(Canvas::new_filled(size.width(), size.height(), *color))
        }
        BackgroundSpec::Image(path) => {
            let image = load_image(path)?;
            log::debug!(
                "Loaded background {} ({}x{}), fitting to {} ({})",
                path.display(),
                image.width(),
                image.height(),
                size,
                fit
            );
            Ok(fit_image(&image, size, fit))
        }
    }
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| Error::BackgroundLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Resizes `image` to exactly `size` using `fit`.
pub fn fit_image(image: &DynamicImage, size: Size, fit: FitMode) -> Canvas {
    let (width, height) = (size.width(), size.height());

    if image.width() == width && image.height() == height {
        return Canvas::from(image.to_rgb8());
    }

    let resized = match fit {
        FitMode::Cover => image.resize_to_fill(width, height, RESIZE_FILTER),
        FitMode::Stretch => image.resize_exact(width, height, RESIZE_FILTER),
    };

    Canvas::from(resized.to_rgb8())
}
