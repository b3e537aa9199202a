use crate::config::LogConfig;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use thiserror::Error;

/// Install a logger that writes to the file given by `config`, creating the
/// file's parent directories as needed.  Returns the path of the log file, or
/// `None` if logging is turned off.
///
/// The terminal belongs to the game while it runs, so messages never go to
/// stdout or stderr.
pub(crate) fn init(config: &LogConfig) -> Result<Option<PathBuf>, LogError> {
    if config.level == LevelFilter::Off {
        return Ok(None);
    }
    let path = config.path().ok_or(LogError::NoPath)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    let file = fs_err::File::create(&path).map_err(LogError::Create)?;
    let logcfg = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(config.level, logcfg, file)?;
    Ok(Some(path))
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to determine path to local state directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to create log file")]
    Create(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
