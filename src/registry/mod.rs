//! Registry adapters for fetching the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - PyPI JSON API adapter
//! - Distribution name validation and normalization

mod client;
mod names;
mod pypi;

pub use client::HttpClient;
pub use names::{is_valid_name, normalize_name};
pub use pypi::{PyPIAdapter, PYPI_API_URL};

use crate::domain::LatestRelease;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest release of a package
    async fn fetch_latest(&self, package: &str) -> Result<LatestRelease, RegistryError>;
}
