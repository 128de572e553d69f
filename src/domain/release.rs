//! Latest release information returned by a registry

use super::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The newest release a registry knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestRelease {
    /// Version string exactly as published
    pub raw: String,
    /// Parsed version
    pub version: Version,
    /// Earliest upload time of the release files, when the registry reports one
    pub released_at: Option<DateTime<Utc>>,
}

impl LatestRelease {
    /// Creates release information from a published version string.
    ///
    /// Returns `None` when the string does not start with an integer major.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let version = Version::from_release(&raw)?;
        Some(Self {
            raw,
            version,
            released_at: None,
        })
    }

    /// Sets the release date (builder pattern)
    pub fn with_released_at(mut self, released_at: DateTime<Utc>) -> Self {
        self.released_at = Some(released_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_latest_release_parse() {
        let release = LatestRelease::parse("8.3.2").unwrap();
        assert_eq!(release.raw, "8.3.2");
        assert_eq!(release.version, Version::new(8, 3, 2));
        assert!(release.released_at.is_none());
    }

    #[test]
    fn test_latest_release_parse_invalid() {
        assert!(LatestRelease::parse("nightly").is_none());
    }

    #[test]
    fn test_latest_release_with_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let release = LatestRelease::parse("1.0").unwrap().with_released_at(date);
        assert_eq!(release.released_at, Some(date));
    }
}
