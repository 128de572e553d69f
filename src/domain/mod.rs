//! Core domain models for reqcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Version triples with unknown components
//! - Version-specifier operators and clauses
//! - Packages resolved from manifest lines
//! - Latest release information and check reports

mod clause;
mod package;
mod release;
mod report;
mod version;

pub use clause::{Clause, Operator};
pub use package::Package;
pub use release::LatestRelease;
pub use report::{CheckReport, PackageReport, Status};
pub use version::{Version, UNKNOWN_GLYPH};
