//! Structured logging setup.

use artisan_core::{LogFormat, LoggingConfig};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Fallback when the configured directive does not parse.
const DEFAULT_DIRECTIVE: &str = "info";

/// Build the event filter: `RUST_LOG` wins over the configured level, and
/// an unparseable level falls back to `info`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(FILTER_ENV) {
        return filter;
    }
    configured_filter(config)
}

fn configured_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case
/// the existing one is kept.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    installed(config, result.is_ok())
}

/// Install the global subscriber writing through `make_writer`, for the
/// browser where there is no system clock or terminal.
///
/// Only the configured level applies; `RUST_LOG` is not consulted.
pub fn init_writer_logging<W>(config: &LoggingConfig, make_writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(configured_filter(config))
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time();

    let result = match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    installed(config, result.is_ok())
}

fn installed(config: &LoggingConfig, ok: bool) -> bool {
    if ok {
        tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter() {
        let config = LoggingConfig {
            level: "artisan_commerce=debug,warn".to_string(),
            format: LogFormat::Human,
        };
        let filter = configured_filter(&config).to_string().to_lowercase();
        assert!(filter.contains("artisan_commerce=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "artisan=verbose".to_string(),
            format: LogFormat::Json,
        };
        assert!(configured_filter(&config).to_string().to_lowercase().contains("info"));
    }

    #[test]
    fn test_init_twice() {
        let config = LoggingConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }

    #[test]
    fn test_writer_logging_keeps_existing() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Human,
        };
        init_writer_logging(&config, std::io::sink);
        assert!(!init_writer_logging(&config, std::io::sink));
    }
}
