//! Timeout configuration for fetch operations.

use std::time::Duration;

use artisan_core::ApiConfig;

/// Timeout configuration for a fetch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Total operation timeout.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout; connecting may use a quarter of it.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Duration::from_millis(total.as_millis() as u64 / 4),
            total,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_total(ApiConfig::default().timeout())
    }
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::from_total(config.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_total() {
        let timeout = TimeoutConfig::from_total(Duration::from_secs(8));
        assert_eq!(timeout.connect, Duration::from_secs(2));
        assert_eq!(timeout.total, Duration::from_secs(8));
    }

    #[test]
    fn test_default_matches_api_config() {
        let timeout = TimeoutConfig::default();
        assert_eq!(timeout.total, Duration::from_millis(10_000));
    }
}
