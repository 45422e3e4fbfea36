//! Writes finished canvases to disk.

use std::path::Path;

use common::ImageFileFormat;
use image::ImageFormat;

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Checks that `path` has an extension the encoder can write.
pub fn output_format<P: AsRef<Path>>(path: P) -> Result<ImageFileFormat> {
    Ok(ImageFileFormat::from_path(path)?)
}

fn image_format(format: ImageFileFormat) -> ImageFormat {
    match format {
        ImageFileFormat::Png => ImageFormat::Png,
        ImageFileFormat::Jpeg => ImageFormat::Jpeg,
        ImageFileFormat::Bmp => ImageFormat::Bmp,
        ImageFileFormat::Tiff => ImageFormat::Tiff,
    }
}

/// Encodes `canvas` using the format implied by the file extension.
pub fn save_canvas<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = output_format(path)?;

    log::debug!(
        "Encoding {}x{} canvas as {:?} to {}",
        canvas.width(),
        canvas.height(),
        format,
        path.display()
    );

    canvas
        .to_rgb_image()
        .save_with_format(path, image_format(format))
        .map_err(|source| Error::Encoding {
            path: path.to_path_buf(),
            source,
        })
}
