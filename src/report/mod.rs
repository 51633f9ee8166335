//! Console output for a health check run.
//!
//! Everything here writes to a caller-supplied [`Write`] so the binary can
//! stream to stdout while tests capture into a buffer.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

use crate::health::{HealthCheck, HealthStatus};

const NAME_WIDTH: usize = 20;

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub up: usize,
    pub down: usize,
}

impl Summary {
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Up => self.up += 1,
            HealthStatus::Down => self.down += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.up + self.down
    }
}

/// Microseconds below one millisecond, whole milliseconds above.
pub fn format_latency(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{}µs", d.as_micros())
    } else {
        format!("{}ms", d.as_millis())
    }
}

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "healthcheckd - Multi-Service Health Aggregator".cyan())?;
    writeln!(out)?;
    writeln!(out, "Usage: healthcheckd <service1> <service2> ...")?;
    writeln!(out, "Format: name=url[method]")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  healthcheckd api=http://localhost:8080/health")?;
    writeln!(out, "  web=http://localhost:3000[GET]")?;
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== SERVICE HEALTH CHECK ===".cyan())?;
    writeln!(out)
}

pub fn write_check_line<W: Write>(out: &mut W, check: &HealthCheck) -> io::Result<()> {
    let status = check.status.unwrap_or(HealthStatus::Down);
    writeln!(
        out,
        "{:<width$} {} ({})",
        check.name,
        status.colored(),
        format_latency(check.response_time),
        width = NAME_WIDTH
    )
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary: {} UP, {} DOWN", summary.up, summary.down)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn latency_switches_unit_at_one_millisecond() {
        assert_eq!(format_latency(Duration::ZERO), "0µs");
        assert_eq!(format_latency(Duration::from_nanos(999_999)), "999µs");
        assert_eq!(format_latency(Duration::from_millis(1)), "1ms");
        assert_eq!(format_latency(Duration::from_micros(12_345)), "12ms");
        assert_eq!(format_latency(Duration::from_secs(5)), "5000ms");
    }

    #[test]
    fn check_line_pads_name_to_twenty() {
        let mut check = HealthCheck::new(
            "api",
            "http://localhost:9/health",
            Method::GET,
            Duration::from_secs(5),
        );
        check.record(HealthStatus::Down, Duration::ZERO);

        let line = render(|out| write_check_line(out, &check));
        assert_eq!(line, "api                  DOWN (0µs)\n");

        check.record(HealthStatus::Up, Duration::from_millis(42));
        let line = render(|out| write_check_line(out, &check));
        assert_eq!(line, "api                  UP (42ms)\n");
    }

    #[test]
    fn long_names_are_not_truncated() {
        let mut check = HealthCheck::new(
            "a-service-name-longer-than-twenty",
            "http://x",
            Method::GET,
            Duration::from_secs(5),
        );
        check.record(HealthStatus::Up, Duration::ZERO);
        let line = render(|out| write_check_line(out, &check));
        assert_eq!(line, "a-service-name-longer-than-twenty UP (0µs)\n");
    }

    #[test]
    fn summary_line_follows_blank_line() {
        let mut summary = Summary::default();
        summary.record(HealthStatus::Down);
        let text = render(|out| write_summary(out, &summary));
        assert_eq!(text, "\nSummary: 0 UP, 1 DOWN\n");
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn banner_and_usage() {
        let banner = render(|out| write_banner(out));
        assert_eq!(banner, "\n=== SERVICE HEALTH CHECK ===\n\n");

        let usage = render(|out| write_usage(out));
        assert!(usage.starts_with("healthcheckd - Multi-Service Health Aggregator\n"));
        assert!(usage.contains("Usage: healthcheckd <service1> <service2> ..."));
        assert!(usage.ends_with("  web=http://localhost:3000[GET]\n"));
    }
}
