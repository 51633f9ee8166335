// src/health/check.rs
use reqwest::Method;
use std::time::Duration;

use super::HealthStatus;

/// One target of a run. Built from a descriptor, updated once by its probe.
#[derive(Debug, Clone)]
pub struct HealthCheck {
    pub name: String,
    pub url: String,
    pub method: Method,
    pub timeout: Duration,

    // Probe results
    pub status: Option<HealthStatus>,
    pub response_time: Duration,
}

impl HealthCheck {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        method: Method,
        timeout: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            method,
            timeout,
            status: None,
            response_time: Duration::ZERO,
        }
    }

    pub fn record(&mut self, status: HealthStatus, response_time: Duration) {
        self.status = Some(status);
        self.response_time = response_time;
    }
}
