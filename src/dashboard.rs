// src/dashboard.rs
//
// Static Grafana dashboard template printed after every run. It does not
// depend on which services were checked.
//
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardTemplate {
    pub dashboard: Dashboard,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub expr: &'static str,
}

impl DashboardTemplate {
    /// Single stat panel over `up{job="services"}`.
    pub fn services() -> Self {
        Self {
            dashboard: Dashboard {
                title: "Service Health Dashboard",
                panels: vec![Panel {
                    title: "Service Status",
                    kind: "stat",
                    targets: vec![Target {
                        expr: r#"up{job="services"}"#,
                    }],
                }],
            },
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn write_dashboard<W: Write>(out: &mut W) -> io::Result<()> {
    let json = DashboardTemplate::services().render()?;
    writeln!(out)?;
    writeln!(out, "{}", "=== GRAFANA DASHBOARD CONFIG ===".yellow())?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r#"{
  "dashboard": {
    "title": "Service Health Dashboard",
    "panels": [
      {
        "title": "Service Status",
        "type": "stat",
        "targets": [
          {
            "expr": "up{job=\"services\"}"
          }
        ]
      }
    ]
  }
}"#;

    #[test]
    fn renders_fixed_document() {
        let json = DashboardTemplate::services().render().unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn output_is_identical_across_calls() {
        colored::control::set_override(false);
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_dashboard(&mut first).unwrap();
        write_dashboard(&mut second).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert_eq!(
            text,
            format!("\n=== GRAFANA DASHBOARD CONFIG ===\n{}\n", EXPECTED)
        );
    }
}
