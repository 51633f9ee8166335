// src/health/mod.rs
mod check;
mod checker;
mod status;

pub use check::HealthCheck;
pub use checker::{HealthChecker, HttpProbe, Probe, ProbeOutcome};
pub use status::HealthStatus;
