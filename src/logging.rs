use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoggingError {
    #[error("cannot create log file {path}: {source}")]
    File { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    /// The full-screen UI owns the terminal; nothing may write to it.
    Off,
}

impl LogSink {
    pub fn choose(log_file: Option<&Path>, plain: bool) -> Self {
        match (log_file, plain) {
            (Some(path), _) => LogSink::File(path.to_path_buf()),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Off,
        }
    }
}

/// Install the global logger. Call once, before the first game is built.
pub fn init(sink: &LogSink, level: LevelFilter) -> Result<(), LoggingError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    match sink {
        LogSink::File(path) => {
            let file = File::create(path)
                .map_err(|source| LoggingError::File { path: path.clone(), source })?;
            WriteLogger::init(level, config, file)?;
        }
        LogSink::Stderr => {
            TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
        }
        LogSink::Off => {}
    }
    Ok(())
}
