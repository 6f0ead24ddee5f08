//! fern logging setup.
//!
//! One line per record: `[<rfc3339> - <LEVEL>] <message>`, followed by the
//! source location except on plain stdout. `sqlx` is capped at `warn` since
//! it logs every statement at `info`.

use crate::error::{Result as ServerErrorResult, ServerError};

use ps_config::{LogLevel, LoggingConfig};

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout { colored: bool },
    /// Append-only file, never colored
    File(PathBuf),
}

impl LogSink {
    /// A relative `logging.file` resolves against the config directory.
    pub fn from_config(logging: &LoggingConfig, config_dir: &Path) -> Self {
        match logging.file {
            Some(ref file) => LogSink::File(config_dir.join(file)),
            None => LogSink::Stdout {
                colored: logging.colored,
            },
        }
    }
}

/// Install the global logger. Fails if one is already installed.
#[track_caller]
pub fn initialize(level: LogLevel, sink: &LogSink) -> ServerErrorResult<()> {
    let output = match sink {
        LogSink::File(path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level(), true))
            .chain(open_log_file(path)?),
        LogSink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()), true)
                })
                .chain(std::io::stdout())
        }
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level(), false))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level.0)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::logger(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={:?}, sink={:?}", level.0, sink);
    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
#[track_caller]
pub fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    let opened = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
    .and_then(|()| OpenOptions::new().create(true).append(true).open(path));

    match opened {
        Ok(file) => Ok(file),
        Err(e) => Err(ServerError::logger(format!(
            "Failed to open log file {}: {}",
            path.display(),
            e
        ))),
    }
}

fn write_line(
    out: FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl Display,
    with_origin: bool,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    if with_origin {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{}:{}]",
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    } else {
        out.finish(format_args!("[{date} - {level}] {message}"))
    }
}
