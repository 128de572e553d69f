//! Requirements manifest reading and parsing
//!
//! This module provides functionality to:
//! - Select and validate the manifest source (file or stdin)
//! - Resolve every line into packages, keeping line numbers

mod source;

pub use source::{ManifestSource, STDIN_ARG};

use crate::domain::Package;
use crate::parser::resolve_line;

/// Result of parsing a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Resolved packages in line order
    pub packages: Vec<Package>,
    /// Number of lines read
    pub lines: usize,
}

impl ParsedManifest {
    /// Number of lines that did not produce a package
    pub fn skipped(&self) -> usize {
        self.lines - self.packages.len()
    }

    /// Number of packages with an exact-version pin
    pub fn pinned(&self) -> usize {
        self.packages.iter().filter(|p| p.is_pinned()).count()
    }
}

/// Parse manifest content line by line
pub fn parse_manifest(content: &str) -> ParsedManifest {
    let mut parsed = ParsedManifest::default();

    for (idx, line) in content.lines().enumerate() {
        parsed.lines += 1;
        if let Some((name, version)) = resolve_line(line) {
            // Line numbers are 1-indexed
            parsed.packages.push(Package::new(name, version, idx + 1));
        }
    }

    parsed
}
