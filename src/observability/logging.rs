//! Structured logging.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Line-delimited JSON.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Env-filter directive string (e.g. `shopsight=debug`).
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shopsight=info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Builds a config from the environment, honoring `RUST_LOG` and
    /// `SHOPSIGHT_LOG_FORMAT=json`.
    #[must_use]
    pub fn from_env(verbose: bool) -> Self {
        let default_filter = if verbose {
            "shopsight=debug"
        } else {
            "shopsight=info"
        };
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
        let format = match std::env::var("SHOPSIGHT_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self { filter, format }
    }
}

/// Initializes the global tracing subscriber. Safe to call more than once;
/// only the first call takes effect.
pub fn init_logging(config: &LoggingConfig) {
    LOGGING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_new(&config.filter)
            .unwrap_or_else(|_| EnvFilter::new("shopsight=info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        let result = match config.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Text => builder.try_init(),
        };
        if let Err(err) = result {
            // A subscriber installed by a test harness or embedding
            // application wins.
            tracing::debug!("Logging already initialized: {err}");
        }
    });
}
