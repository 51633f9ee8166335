// src/health/checker.rs
use crate::config::{ConfigError, ProbeConfig};
use crate::health::{HealthCheck, HealthStatus};
use crate::report::{self, Summary};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: HealthStatus,
    pub response_time: Duration,
}

/// A single attempt against one target. Failures are folded into `Down`.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, check: &HealthCheck) -> ProbeOutcome;
}

pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, check: &HealthCheck) -> ProbeOutcome {
        let start = Instant::now();

        let result = self
            .client
            .request(check.method.clone(), check.url.as_str())
            .timeout(check.timeout)
            .send()
            .await;

        let response_time = start.elapsed();

        let status = match result {
            Ok(response) => {
                let code = response.status();
                let status = HealthStatus::from_status_code(code.as_u16());
                if !status.is_up() {
                    debug!(service = %check.name, "HTTP {}", code);
                }
                status
            }
            Err(e) => {
                debug!(service = %check.name, error = %e, "request failed");
                HealthStatus::Down
            }
        };

        ProbeOutcome {
            status,
            response_time,
        }
    }
}

pub struct HealthChecker<P = HttpProbe> {
    config: ProbeConfig,
    probe: P,
}

impl HealthChecker<HttpProbe> {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        config.validate()?;
        let probe = HttpProbe::new(&config)?;
        Ok(Self { config, probe })
    }
}

impl<P: Probe> HealthChecker<P> {
    pub fn with_probe(config: ProbeConfig, probe: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, probe })
    }

    /// Probe every check once and write its line to `out` as results arrive.
    ///
    /// At most `concurrency` probes are in flight; lines always come out in
    /// input order, so a concurrency of 1 is a plain sequential run.
    pub async fn run<W: Write>(&self, checks: Vec<HealthCheck>, out: &mut W) -> Result<Summary> {
        info!(
            "Checking {} services (concurrency {}, timeout {:?})",
            checks.len(),
            self.config.concurrency,
            self.config.timeout()
        );

        let probe = &self.probe;
        let results = stream::iter(checks)
            .map(|mut check| async move {
                let outcome = probe.probe(&check).await;
                check.record(outcome.status, outcome.response_time);
                check
            })
            .buffered(self.config.concurrency);
        futures::pin_mut!(results);

        let mut summary = Summary::default();
        while let Some(check) = results.next().await {
            report::write_check_line(out, &check).context("Failed to write check result")?;
            out.flush().context("Failed to flush output")?;
            summary.record(check.status.unwrap_or(HealthStatus::Down));
        }

        info!(
            "Health check complete: {} up, {} down",
            summary.up, summary.down
        );

        Ok(summary)
    }
}
