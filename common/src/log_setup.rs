use std::path::PathBuf;

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

#[derive(Clone, Debug)]
pub struct LogOptions {
    /// Log specification, e.g. `info` or `starfield=debug`. `RUST_LOG` takes precedence.
    pub level: String,
    /// When set, logs are also written to size-rotated files in this directory.
    pub directory: Option<PathBuf>,
    pub basename: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            basename: "starfield".to_string(),
        }
    }
}

/// Starts the global logger. The returned handle must be kept alive until exit
/// so buffered file output is flushed.
pub fn setup_logging(options: &LogOptions) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&options.level)?;

    let logger = match &options.directory {
        Some(directory) => logger
            .log_to_file(
                FileSpec::default()
                    .directory(directory)
                    .basename(&options.basename),
            )
            .duplicate_to_stderr(Duplicate::Info)
            .rotate(
                Criterion::Size(1024 * 1024), //1MB
                Naming::Timestamps,
                Cleanup::KeepLogFiles(5),
            ),
        None => logger.log_to_stderr(),
    };

    logger.start()
}
