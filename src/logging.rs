use std::time::Instant;
use tracing::{debug, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{TextError, TextResult};

/// Initialize logging system.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so that
/// command results on stdout stay clean.
pub fn init_logging(config: &LoggingConfig) -> TextResult<()> {
    build_subscriber(config)
        .try_init()
        .map_err(|e| TextError::config(format!("failed to install log subscriber: {}", e)))?;

    debug!("Logging system initialized, level: {}", config.level);
    Ok(())
}

/// Run `f` with a subscriber that is active only for the duration of the
/// call. Used while the configuration that drives [`init_logging`] is still
/// being loaded.
pub fn with_scoped_logging<T, F>(config: &LoggingConfig, f: F) -> T
where
    F: FnOnce() -> T,
{
    tracing::subscriber::with_default(build_subscriber(config), f)
}

fn build_subscriber(config: &LoggingConfig) -> impl Subscriber + Send + Sync + 'static {
    let console_layer = fmt::layer()
        .with_target(config.include_targets)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(console_layer)
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Times a single string operation and logs how long it took
pub struct OperationTimer {
    operation: &'static str,
    input_len: usize,
    start_time: Instant,
}

impl OperationTimer {
    pub fn new(operation: &'static str, input_len: usize) -> Self {
        Self {
            operation,
            input_len,
            start_time: Instant::now(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Log completion along with the size of the output
    pub fn finish(self, output_len: usize) {
        let elapsed = self.start_time.elapsed();
        debug!(
            operation = self.operation,
            input_len = self.input_len,
            output_len,
            duration_us = elapsed.as_micros() as u64,
            "operation completed"
        );
    }
}
