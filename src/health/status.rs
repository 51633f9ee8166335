// src/health/status.rs
use colored::{ColoredString, Colorize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down,
}

impl HealthStatus {
    /// Classify an HTTP status code. Only 2xx counts as up.
    pub fn from_status_code(code: u16) -> Self {
        if (200..300).contains(&code) {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Up => "UP",
            HealthStatus::Down => "DOWN",
        }
    }

    pub fn colored(&self) -> ColoredString {
        match self {
            HealthStatus::Up => self.as_str().green(),
            HealthStatus::Down => self.as_str().red(),
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
