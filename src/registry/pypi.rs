//! PyPI JSON API adapter
//!
//! Fetches the latest release of a package from PyPI.
//! API endpoint: https://pypi.org/pypi/{package}/json

use super::names::{is_valid_name, normalize_name};
use crate::domain::LatestRelease;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// PyPI API base URL
pub const PYPI_API_URL: &str = "https://pypi.org/pypi";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPIResponse {
    info: PackageInfo,
    /// Files of the latest release
    #[serde(default)]
    urls: Vec<ReleaseFile>,
}

#[derive(Debug, Deserialize)]
struct PackageInfo {
    version: String,
}

/// Release file information
#[derive(Debug, Deserialize)]
struct ReleaseFile {
    /// Upload time for the release file
    upload_time_iso_8601: Option<String>,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter for the public index
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_API_URL)
    }

    /// Create an adapter for a PyPI-compatible JSON API
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/json", self.base_url, normalize_name(package))
    }

    /// Earliest upload time among the release files
    fn earliest_upload(files: &[ReleaseFile]) -> Option<DateTime<Utc>> {
        files
            .iter()
            .filter_map(|file| file.upload_time_iso_8601.as_deref())
            .filter_map(|time| time.parse::<DateTime<Utc>>().ok())
            .min()
    }
}

#[async_trait]
impl RegistryAdapter for PyPIAdapter {
    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_latest(&self, package: &str) -> Result<LatestRelease, RegistryError> {
        if !is_valid_name(package) {
            return Err(RegistryError::InvalidPackageName {
                package: package.to_string(),
            });
        }

        let url = self.build_url(package);
        let response: PyPIResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        let release = LatestRelease::parse(response.info.version.as_str()).ok_or_else(|| {
            RegistryError::invalid_response(
                package,
                self.registry_name(),
                format!("unrecognized version '{}'", response.info.version),
            )
        })?;

        Ok(match Self::earliest_upload(&response.urls) {
            Some(released_at) => release.with_released_at(released_at),
            None => release,
        })
    }
}
