//! Text output formatter for human-readable display
//!
//! Unchecked reports print one `name (version)` line per package. Checked
//! reports print an aligned table followed by a summary line.

use crate::domain::{CheckReport, PackageReport, Status};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

const HEADERS: [&str; 4] = ["Package", "Current", "Latest", "Status"];

/// Placeholder for a latest version that could not be determined
const NO_LATEST: &str = "-";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Only show packages that are not up to date
    outdated_only: bool,
    /// Whether to use colors
    color: bool,
}

/// Cells of one table row
struct Row {
    name: String,
    current: String,
    latest: String,
    status: Status,
}

impl Row {
    fn from_report(report: &PackageReport) -> Self {
        Self {
            name: report.package.name.clone(),
            current: report.package.version.to_string(),
            latest: report
                .latest
                .as_ref()
                .map(|latest| latest.version.to_string())
                .unwrap_or_else(|| NO_LATEST.to_string()),
            status: report.status,
        }
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(outdated_only: bool, color: bool) -> Self {
        Self {
            outdated_only,
            color,
        }
    }

    fn visible<'a>(&self, report: &'a CheckReport) -> Vec<&'a PackageReport> {
        if self.outdated_only {
            report.not_up_to_date().collect()
        } else {
            report.packages.iter().collect()
        }
    }

    fn status_label(&self, status: Status, width: usize) -> String {
        let label = format!("{:<width$}", status.label(), width = width);
        if !self.color {
            return label;
        }
        match status {
            Status::UpToDate => label.green().to_string(),
            Status::Outdated => label.yellow().bold().to_string(),
            Status::Unknown => label.red().to_string(),
            Status::Unchecked => label.dimmed().to_string(),
        }
    }

    /// One `name (version)` line per package
    fn format_listing(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for entry in self.visible(report) {
            let package = &entry.package;
            if self.color {
                writeln!(
                    writer,
                    "{} ({})",
                    package.name.bold(),
                    package.version.to_string().dimmed()
                )?;
            } else {
                writeln!(writer, "{}", package)?;
            }
        }
        Ok(())
    }

    fn format_table(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let rows: Vec<Row> = self
            .visible(report)
            .into_iter()
            .map(Row::from_report)
            .collect();

        if rows.is_empty() {
            let message = if self.outdated_only {
                "All packages are up to date!"
            } else {
                "No packages found."
            };
            writeln!(writer, "{}", message)?;
            return self.format_summary(report, writer);
        }

        let name_w = column_width(HEADERS[0], rows.iter().map(|r| r.name.as_str()));
        let current_w = column_width(HEADERS[1], rows.iter().map(|r| r.current.as_str()));
        let latest_w = column_width(HEADERS[2], rows.iter().map(|r| r.latest.as_str()));
        let status_w = HEADERS[3].len().max(Status::UpToDate.label().len());

        let header = format!(
            "{:<name_w$}  {:<current_w$}  {:<latest_w$}  {:<status_w$}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
        );
        if self.color {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }
        writeln!(
            writer,
            "{}",
            "-".repeat(name_w + current_w + latest_w + status_w + 6)
        )?;

        for row in &rows {
            writeln!(
                writer,
                "{:<name_w$}  {:<current_w$}  {:<latest_w$}  {}",
                row.name,
                row.current,
                row.latest,
                self.status_label(row.status, status_w)
            )?;
        }

        writeln!(writer)?;
        self.format_summary(report, writer)
    }

    fn format_summary(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let total = report.packages.len();
        let up_to_date = report.count(Status::UpToDate);
        let outdated = report.count(Status::Outdated);
        let unknown = report.count(Status::Unknown);

        if self.color {
            writeln!(
                writer,
                "{} {}: {} up to date, {} outdated, {} unknown",
                total.to_string().bold(),
                if total == 1 { "package" } else { "packages" },
                up_to_date.to_string().green(),
                outdated.to_string().yellow(),
                unknown.to_string().red()
            )
        } else {
            writeln!(
                writer,
                "{} {}: {} up to date, {} outdated, {} unknown",
                total,
                if total == 1 { "package" } else { "packages" },
                up_to_date,
                outdated,
                unknown
            )
        }
    }
}

/// Widest cell in a column, header included
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.checked {
            self.format_table(report, writer)
        } else {
            self.format_listing(report, writer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatestRelease, Package, Version};

    fn render(formatter: &TextFormatter, report: &CheckReport) -> String {
        let mut buffer = Vec::new();
        formatter.format(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn checked_report() -> CheckReport {
        let mut report = CheckReport::new("requirements.txt", true);
        report.add(PackageReport::checked(
            Package::new("pytest", Version::new(8, 3, 2), 1),
            LatestRelease::parse("8.3.2").unwrap(),
        ));
        report.add(PackageReport::checked(
            Package::new("httpx", Version::from_operand("0.26"), 2),
            LatestRelease::parse("0.27.0").unwrap(),
        ));
        report.add(PackageReport::failed(
            Package::new("private-lib", Version::unknown(), 3),
            "package 'private-lib' not found in PyPI registry",
        ));
        report
    }

    #[test]
    fn test_listing() {
        let mut report = CheckReport::new("requirements.txt", false);
        report.add(PackageReport::unchecked(Package::new(
            "pytest",
            Version::from_operand("1.20"),
            1,
        )));
        report.add(PackageReport::unchecked(Package::new(
            "flask",
            Version::unknown(),
            2,
        )));

        let output = render(&TextFormatter::new(false, false), &report);
        assert_eq!(output, "pytest (1.20.*)\nflask (*.*.*)\n");
    }

    #[test]
    fn test_table() {
        let output = render(&TextFormatter::new(false, false), &checked_report());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Package"));
        assert!(lines[0].contains("Current"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("pytest"));
        assert!(lines[2].contains("8.3.2"));
        assert!(lines[2].contains("up to date"));
        assert!(lines[3].contains("0.26.*"));
        assert!(lines[3].contains("0.27.0"));
        assert!(lines[3].contains("outdated"));
        assert!(lines[4].contains("*.*.*"));
        assert!(lines[4].contains("unknown"));
        assert_eq!(
            lines.last().copied(),
            Some("3 packages: 1 up to date, 1 outdated, 1 unknown")
        );
    }

    #[test]
    fn test_table_columns_aligned() {
        let output = render(&TextFormatter::new(false, false), &checked_report());
        let lines: Vec<&str> = output.lines().collect();
        let column = lines[0].find("Current").unwrap();
        assert_eq!(lines[2].find("8.3.2"), Some(column));
        assert_eq!(lines[3].find("0.26.*"), Some(column));
    }

    #[test]
    fn test_outdated_only() {
        let output = render(&TextFormatter::new(true, false), &checked_report());
        assert!(!output.contains("pytest"));
        assert!(output.contains("httpx"));
        assert!(output.contains("private-lib"));
    }

    #[test]
    fn test_outdated_only_all_current() {
        let mut report = CheckReport::new("requirements.txt", true);
        report.add(PackageReport::checked(
            Package::new("pytest", Version::new(8, 3, 2), 1),
            LatestRelease::parse("8.3.2").unwrap(),
        ));
        let output = render(&TextFormatter::new(true, false), &report);
        assert!(output.starts_with("All packages are up to date!"));
    }

    #[test]
    fn test_color_output_contains_names() {
        let output = render(&TextFormatter::new(false, true), &checked_report());
        assert!(output.contains("pytest"));
        assert!(output.contains("outdated"));
    }
}
