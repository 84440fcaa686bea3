//! Console and JSONL file logging for Parlor apps
//!
//! Wraps `tracing-subscriber` so every binary configures logging the same way:
//! an env filter (`RUST_LOG` wins over the configured level), a console layer
//! in either pretty or JSONL form, and an optional rolling JSONL file.
//!
//! # Quick Start
//!
//! ```ignore
//! use parlor_logging::{LogConfig, ParlorSubscriberBuilder};
//!
//! // JSONL to console
//! let _guard = ParlorSubscriberBuilder::new().init();
//!
//! // Human-readable output while developing
//! let _guard = ParlorSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LogError {
    /// Log directory or file could not be created
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed
    #[error("Subscriber already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Builder for configuring and initializing the logging subscriber
pub struct ParlorSubscriberBuilder {
    config: LogConfig,
}

impl ParlorSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty_console(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self.config.console.ansi = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally, reporting failures on stderr
    ///
    /// The returned guard flushes the file writer on drop and must be kept
    /// alive for the duration of the program.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to install the subscriber globally
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LogError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let console = &self.config.console;
        let jsonl = &self.config.jsonl;

        let pretty_console = (console.enabled && console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
        });

        let jsonl_console = (console.enabled && !console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(jsonl.include_spans)
                    .flatten_event(jsonl.flatten_events)
                    .with_file(jsonl.include_location)
                    .with_line_number(jsonl.include_location)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(jsonl_console)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }
}

impl Default for ParlorSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the file writer; truncates for `Never` rotation, appends otherwise
fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LogError> {
    fs::create_dir_all(&file_config.directory)?;

    let writer = match file_config.rotation {
        RotationStrategy::Never => {
            let path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            tracing_appender::non_blocking(File::create(path)?)
        }
        RotationStrategy::Daily => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            &file_config.directory,
            &file_config.prefix,
        )),
        RotationStrategy::Hourly => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::HOURLY,
            &file_config.directory,
            &file_config.prefix,
        )),
    };
    Ok(writer)
}

/// Initialize logging for testing (minimal output, safe to call repeatedly)
pub fn init_testing() {
    let _ = ParlorSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let builder = ParlorSubscriberBuilder::new()
            .with_level("trace")
            .with_pretty_console(true);
        assert_eq!(builder.config().default_level, "trace");
        assert!(builder.config().console.pretty);
        assert!(builder.config().console.ansi);
    }

    #[test]
    fn test_file_writer_never_rotation_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested"),
            prefix: "viewer".to_string(),
            rotation: RotationStrategy::Never,
        };

        let (_writer, _guard) = create_file_writer(&config).unwrap();
        assert!(dir.path().join("nested").join("viewer.log").exists());
    }

    #[test]
    fn test_init_testing_is_idempotent() {
        init_testing();
        init_testing();
        tracing::warn!("still logging");
    }
}
