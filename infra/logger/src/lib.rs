//! # Logger
//!
//! Installs the global `tracing` subscriber for passport processes: a compact console
//! layer and an optional rolling file layer written through a non-blocking worker.
//!
//! The default level follows the application's debug-info switch (see
//! [`LoggerBuilder::debug_info`]); `RUST_LOG` or an explicit
//! [`LoggerBuilder::env_filter`] refine it per module.
//!
//! ## Example
//!
//! ```rust
//! use passport_logger::Logger;
//!
//! let _logger = Logger::builder("passport-server").debug_info(true).init()?;
//! # Ok::<(), passport_logger::LoggerError>(())
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Level used when no filter says otherwise.
#[must_use]
pub const fn default_level(debug_info: bool) -> LevelFilter {
    if debug_info { LevelFilter::DEBUG } else { LevelFilter::INFO }
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

/// Configures and installs the global tracing subscriber.
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    config: LoggerConfig,
}

impl LoggerBuilder {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Selects `DEBUG` when debug info is enabled, `INFO` otherwise.
    pub const fn debug_info(self, enabled: bool) -> Self {
        self.level(default_level(enabled))
    }

    /// Programmatic filter directives (e.g. `passport_kernel=trace`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` into `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = Some(directory.into());
        self
    }

    /// Emits JSON lines in log files. Console output stays human-readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it stops the file
    /// writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an
    ///   unparsable filter, or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.build_env_filter()?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(directory) = &self.config.directory {
            fs::create_dir_all(directory)
                .context(format!("Failed to create log directory {}", directory.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(self.config.rotation.clone())
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(directory)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);

            layers.push(if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name, level = %self.config.level, "Logger initialized");

        Ok(Logger { guard, level: self.config.level })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        let message = if self.name.trim().is_empty() {
            "Logger name cannot be empty"
        } else if self.config.max_files == 0 {
            "max_files must be greater than zero"
        } else if !self.config.console && self.config.directory.is_none() {
            "No logging output enabled. Enable the console or set a log directory."
        } else {
            return Ok(());
        };

        Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.config.level.into());
        match &self.config.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            }),
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    level: LevelFilter,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), config: LoggerConfig::default() }
    }

    /// The default level the subscriber was installed with.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    /// File writer guard, present only when file logging is enabled.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("passport-test");
        assert!(builder.config.console);
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.max_files, DEFAULT_MAX_FILES);
        assert!(builder.config.directory.is_none());
    }

    #[test]
    fn debug_info_selects_level() {
        assert_eq!(Logger::builder("a").debug_info(true).config.level, LevelFilter::DEBUG);
        assert_eq!(Logger::builder("a").debug_info(false).config.level, LevelFilter::INFO);
        assert_eq!(default_level(true), LevelFilter::DEBUG);
    }

    #[test]
    fn builder_configuration() {
        let builder = Logger::builder("passport-test")
            .console(false)
            .directory("/tmp/passport-logs")
            .json(true)
            .max_files(3)
            .env_filter("passport_kernel=trace")
            .level(LevelFilter::WARN);

        assert!(!builder.config.console);
        assert!(builder.config.json);
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.level, LevelFilter::WARN);
        assert_eq!(builder.config.env_filter.as_deref(), Some("passport_kernel=trace"));
        assert_eq!(builder.config.directory, Some(PathBuf::from("/tmp/passport-logs")));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder("passport-test").max_files(0).init().unwrap_err();
        assert!(err.to_string().contains("max_files"));
    }

    #[test]
    fn missing_outputs_are_rejected() {
        let err = Logger::builder("passport-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = Logger::builder("passport-test").env_filter("passport=[").init().unwrap_err();
        assert!(err.to_string().contains("Invalid env filter"));
    }

    #[test]
    fn context_overrides_previous() {
        let result: Result<(), LoggerError> =
            Err(LoggerError::InvalidConfiguration { message: "bad".into(), context: None });
        let err = result.context("startup").unwrap_err();
        assert_eq!(err.to_string(), "Invalid logger configuration (startup): bad");
    }
}
