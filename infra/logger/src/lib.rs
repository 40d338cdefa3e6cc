//! # Logger
//!
//! Installs the process-wide `tracing` subscriber from a [`LoggingConfig`].
//!
//! * Console output on stderr in `compact`, `pretty` or `json` format.
//! * Optional rolling file output (non-blocking, plain text or JSON).
//! * `RUST_LOG` is honored unless the config carries explicit filter directives.
//!
//! ## Example
//!
//! ```rust
//! use weave_domain::config::LoggingConfig;
//! use weave_logger::Logger;
//!
//! let _logger = Logger::init("weave-doc", &LoggingConfig::default()).unwrap();
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::{fs, io};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use weave_domain::config::{LogFormat, LogRotation, LoggingConfig};

const LOG_FILE_SUFFIX: &str = "log";

/// Handle to the installed logging system.
///
/// Holds the file writer's background guard; keep it alive until shutdown so buffered
/// lines are flushed.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber described by `config`.
    ///
    /// `name` identifies the application and is used as the file prefix when
    /// `config.file_prefix` is empty.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, an unknown level, bad filter
    ///   directives, `max_files == 0`, or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber was already installed.
    pub fn init(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        validate(name, config)?;

        let filter = env_filter(config)?;
        let mut layers = Vec::new();

        if config.console {
            let console = match config.format {
                LogFormat::Compact => {
                    layer().compact().with_writer(io::stderr).with_ansi(true).boxed()
                },
                LogFormat::Pretty => layer().pretty().with_writer(io::stderr).boxed(),
                LogFormat::Json => layer().json().with_writer(io::stderr).boxed(),
            };
            layers.push(console);
        }

        let guard = if let Some(directory) = &config.directory {
            fs::create_dir_all(directory)
                .context(format!("Failed to create log directory {}", directory.display()))?;

            let prefix =
                if config.file_prefix.trim().is_empty() { name } else { &config.file_prefix };

            let appender = RollingFileAppender::builder()
                .rotation(rotation(config.rotation))
                .filename_prefix(prefix)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(config.max_files)
                .build(directory)
                .context(format!("Failed to open log files in {}", directory.display()))?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = layer().with_writer(writer).with_ansi(false);
            layers.push(if config.format == LogFormat::Json { file.json().boxed() } else { file.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        tracing::debug!(app = name, level = %config.level, "Logging initialized");
        Ok(Self { guard })
    }

    /// Returns the file writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(name: &str, config: &LoggingConfig) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if !config.console && config.directory.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging output enabled. Enable console or set a log directory.".into(),
            context: None,
        });
    }

    if config.directory.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggerError> {
    let level = config.level.parse::<LevelFilter>().map_err(|e| {
        LoggerError::InvalidConfiguration {
            message: format!("Invalid level '{}': {e}", config.level).into(),
            context: None,
        }
    })?;

    let builder = EnvFilter::builder().with_default_directive(level.into());
    config.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |directives| {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            })
        },
    )
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}
