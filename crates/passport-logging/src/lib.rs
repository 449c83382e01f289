//! Tracing subscriber setup for the passport tools
//!
//! ```ignore
//! use passport_logging::{LogConfig, SubscriberBuilder};
//!
//! let _guard = SubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init()?;
//! tracing::info!("Loaded snapshot");
//! ```

pub mod config;

pub use config::{ConsoleConfig, ConsoleFormat, FileConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Subscriber already installed: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Builder for configuring and initializing the global subscriber
pub struct SubscriberBuilder {
    config: LogConfig,
}

impl Default for SubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberBuilder {
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

    /// Set the console line format
    pub fn with_console_format(mut self, format: ConsoleFormat) -> Self {
        self.config.console.format = format;
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

    /// Install the subscriber globally.
    ///
    /// RUST_LOG takes precedence over the configured level. The returned guard
    /// flushes the file writer and must be held for the life of the program.
    pub fn init(self) -> Result<Option<WorkerGuard>, LogError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            layers.push(console_layer(&self.config.console));
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = file_writer(file_config)?;
            guard = Some(file_guard);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(writer)
                    .boxed(),
            );
        }

        Registry::default().with(layers).with(env_filter).try_init()?;
        Ok(guard)
    }
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    match config.format {
        ConsoleFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(config.ansi)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        ConsoleFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr)
            .boxed(),
        ConsoleFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .boxed(),
    }
}

/// Non-rotating files are truncated; rotating files append.
fn file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LogError> {
    fs::create_dir_all(&config.directory)?;
    let pair = match config.rotation {
        RotationStrategy::Never => {
            let path = config.directory.join(format!("{}.log", config.prefix));
            tracing_appender::non_blocking(File::create(path)?)
        }
        RotationStrategy::Daily => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            &config.directory,
            &config.prefix,
        )),
        RotationStrategy::Hourly => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::HOURLY,
            &config.directory,
            &config.prefix,
        )),
    };
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let builder = SubscriberBuilder::new()
            .with_config(LogConfig::testing())
            .with_level("trace")
            .with_console_format(ConsoleFormat::Json);
        assert_eq!(builder.config().default_level, "trace");
        assert_eq!(builder.config().console.format, ConsoleFormat::Json);
        assert!(builder.config().file.is_none());
    }

    #[test]
    fn test_builder_file_output() {
        let builder = SubscriberBuilder::new().with_file_output(FileConfig {
            directory: "logs".into(),
            prefix: "passport".into(),
            rotation: RotationStrategy::Hourly,
        });
        let file = builder.config().file.as_ref().unwrap();
        assert_eq!(file.prefix, "passport");
        assert_eq!(file.rotation, RotationStrategy::Hourly);
    }

    #[test]
    fn test_single_file_writer_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested"),
            prefix: "run".into(),
            rotation: RotationStrategy::Never,
        };
        let (_writer, _guard) = file_writer(&config).unwrap();
        assert!(dir.path().join("nested/run.log").exists());
    }
}
