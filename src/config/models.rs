// src/config/models.rs
use std::time::Duration;

use super::ConfigError;

/// Settings shared by every probe in a run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout_ms: u64,

    /// Maximum number of probes in flight. 1 keeps the run sequential.
    pub concurrency: usize,

    pub user_agent: String,
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            concurrency: 1,
            user_agent: format!("healthcheckd/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
