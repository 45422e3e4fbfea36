pub mod file_format;
pub mod log_setup;
pub mod test_utils;

pub use file_format::{get_file_extension, FileExtensionError, FileFormatResult, ImageFileFormat};
pub use log_setup::{setup_logging, LogOptions};
