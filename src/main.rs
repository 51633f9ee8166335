// src/main.rs
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;

use healthcheckd::{
    config::{self, ProbeConfig},
    dashboard,
    health::HealthChecker,
    report,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("healthcheckd=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        report::write_usage(&mut out)?;
        out.flush()?;
        std::process::exit(1);
    }

    let probe_config = ProbeConfig::default();
    let checks = config::parse_descriptors(&args, &probe_config);
    info!("Parsed {} of {} service descriptors", checks.len(), args.len());

    let checker = HealthChecker::new(probe_config)?;

    report::write_banner(&mut out)?;
    let summary = checker.run(checks, &mut out).await?;
    report::write_summary(&mut out, &summary)?;
    dashboard::write_dashboard(&mut out).context("Failed to write dashboard template")?;
    out.flush()?;

    Ok(())
}
