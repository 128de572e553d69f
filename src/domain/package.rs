//! Packages declared in a requirements manifest

use super::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declaration resolved from one manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name, lower-cased with extras removed
    pub name: String,
    /// Version pinned with `==`, all unknown when there is no pin
    pub version: Version,
    /// Line number in the manifest (1-indexed)
    pub line_number: usize,
}

impl Package {
    /// Creates a new package
    pub fn new(name: impl Into<String>, version: Version, line_number: usize) -> Self {
        Self {
            name: name.into(),
            version,
            line_number,
        }
    }

    /// Returns true if the manifest pins at least a major version
    pub fn is_pinned(&self) -> bool {
        !self.version.is_unknown()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}
