//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of check reports
//! - Per-package current/latest versions with their status

use crate::domain::{CheckReport, PackageReport, Status};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Only include packages that are not up to date
    outdated_only: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(outdated_only: bool) -> Self {
        Self { outdated_only }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Where the requirements were read from
    source: String,
    /// Whether latest versions were looked up
    checked: bool,
    /// Per-package results
    packages: Vec<JsonPackage>,
    /// Failed lookups
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError>,
}

/// JSON representation of a package
#[derive(Serialize)]
struct JsonPackage {
    name: String,
    /// 1-based line in the manifest
    line: usize,
    /// Pinned version, `*` for unknown components
    current: String,
    /// Latest release string as published, `null` when not looked up
    latest: Option<String>,
    up_to_date: bool,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    released_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON representation of a failed lookup
#[derive(Serialize)]
struct JsonError {
    name: String,
    message: String,
}

impl JsonPackage {
    fn from_report(report: &PackageReport) -> Self {
        Self {
            name: report.package.name.clone(),
            line: report.package.line_number,
            current: report.package.version.to_string(),
            latest: report.latest.as_ref().map(|latest| latest.raw.clone()),
            up_to_date: report.is_up_to_date(),
            status: report.status,
            released_at: report
                .latest
                .as_ref()
                .and_then(|latest| latest.released_at)
                .map(|at| at.to_rfc3339()),
            error: report.error.clone(),
        }
    }
}

impl JsonError {
    /// One entry per failed name, however many lines declare it
    fn from_failures(report: &CheckReport) -> Vec<Self> {
        let mut seen = HashSet::new();
        report
            .failures()
            .filter(|p| seen.insert(p.package.name.as_str()))
            .filter_map(|p| {
                p.error.as_ref().map(|message| JsonError {
                    name: p.package.name.clone(),
                    message: message.clone(),
                })
            })
            .collect()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let packages: Vec<JsonPackage> = if self.outdated_only {
            report.not_up_to_date().map(JsonPackage::from_report).collect()
        } else {
            report.packages.iter().map(JsonPackage::from_report).collect()
        };

        let output = JsonOutput {
            source: report.source.clone(),
            checked: report.checked,
            packages,
            errors: JsonError::from_failures(report),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
