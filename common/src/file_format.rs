use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FileExtensionError {
    #[error("Failed to get file extension for file: {0}")]
    MissingFileExtension(String),
    #[error("Unsupported file extension for file: {0}")]
    UnsupportedFileExtension(String),
}

pub type FileFormatResult<T> = Result<T, FileExtensionError>;

pub fn get_file_extension<P: AsRef<Path>>(path: &P) -> Option<&str> {
    path.as_ref().extension().and_then(|os_str| os_str.to_str())
}

/// Raster formats the encoder can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFileFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl ImageFileFormat {
    pub const ALL: [Self; 4] = [Self::Png, Self::Jpeg, Self::Bmp, Self::Tiff];

    pub fn from_path<P: AsRef<Path>>(path: P) -> FileFormatResult<Self> {
        let path = path.as_ref();
        let ext = get_file_extension(&path)
            .ok_or_else(|| FileExtensionError::MissingFileExtension(path.display().to_string()))?;

        if ext.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Ok(Self::Jpeg)
        } else if ext.eq_ignore_ascii_case("bmp") {
            Ok(Self::Bmp)
        } else if ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff") {
            Ok(Self::Tiff)
        } else {
            Err(FileExtensionError::UnsupportedFileExtension(
                path.display().to_string(),
            ))
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    /// Lossy formats do not round-trip pixel values exactly.
    pub fn is_lossless(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}
