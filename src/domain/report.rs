//! Check result types
//!
//! Provides per-package results and the report for a whole manifest.

use super::{LatestRelease, Package};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing a pinned version with the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Pinned version is the latest (or newer)
    UpToDate,
    /// A newer release exists
    Outdated,
    /// Versions could not be compared or the lookup failed
    Unknown,
    /// No registry lookup was requested
    Unchecked,
}

impl Status {
    /// Judge a pinned version against the latest release
    pub fn judge(package: &Package, latest: &LatestRelease) -> Self {
        match package.version.compare(&latest.version) {
            Some(Ordering::Equal | Ordering::Greater) => Status::UpToDate,
            Some(Ordering::Less) => Status::Outdated,
            None => Status::Unknown,
        }
    }

    /// Plain label
    pub fn label(&self) -> &'static str {
        match self {
            Status::UpToDate => "up to date",
            Status::Outdated => "outdated",
            Status::Unknown => "unknown",
            Status::Unchecked => "unchecked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result for a single package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    pub package: Package,
    /// Latest release, when the lookup succeeded
    pub latest: Option<LatestRelease>,
    pub status: Status,
    /// Lookup failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PackageReport {
    /// A package that was not looked up
    pub fn unchecked(package: Package) -> Self {
        Self {
            package,
            latest: None,
            status: Status::Unchecked,
            error: None,
        }
    }

    /// A package whose latest release is known
    pub fn checked(package: Package, latest: LatestRelease) -> Self {
        let status = Status::judge(&package, &latest);
        Self {
            package,
            latest: Some(latest),
            status,
            error: None,
        }
    }

    /// A package whose lookup failed
    pub fn failed(package: Package, error: impl Into<String>) -> Self {
        Self {
            package,
            latest: None,
            status: Status::Unknown,
            error: Some(error.into()),
        }
    }

    /// Only a successful comparison can make a package up to date
    pub fn is_up_to_date(&self) -> bool {
        self.status == Status::UpToDate
    }
}

/// Report for a whole manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Where the manifest was read from
    pub source: String,
    /// Whether registry lookups were performed
    pub checked: bool,
    /// Per-package results in manifest order
    pub packages: Vec<PackageReport>,
}

impl CheckReport {
    /// Creates an empty report
    pub fn new(source: impl Into<String>, checked: bool) -> Self {
        Self {
            source: source.into(),
            checked,
            packages: Vec::new(),
        }
    }

    /// Adds a package result
    pub fn add(&mut self, report: PackageReport) {
        self.packages.push(report);
    }

    /// Number of packages with the given status
    pub fn count(&self, status: Status) -> usize {
        self.packages.iter().filter(|p| p.status == status).count()
    }

    /// Packages that are not up to date
    pub fn not_up_to_date(&self) -> impl Iterator<Item = &PackageReport> {
        self.packages.iter().filter(|p| !p.is_up_to_date())
    }

    /// Packages whose lookup failed
    pub fn failures(&self) -> impl Iterator<Item = &PackageReport> {
        self.packages.iter().filter(|p| p.error.is_some())
    }

    /// Returns true if any lookup failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
