//! Check orchestration
//!
//! This module coordinates the check workflow:
//! - Without a registry every package is reported unchecked
//! - With a registry each distinct name is looked up once, concurrently,
//!   bounded by a semaphore
//! - A failed lookup only marks the packages it concerns; the rest continue
//!
//! Reports always keep manifest order.

use crate::cli::{CliArgs, DEFAULT_CONCURRENCY};
use crate::domain::{CheckReport, LatestRelease, Package, PackageReport};
use crate::error::AppError;
use crate::progress::CheckProgress;
use crate::registry::{HttpClient, PyPIAdapter, RegistryAdapter};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Lookup outcome per package name
type LookupResults = HashMap<String, Result<LatestRelease, String>>;

/// Runs registry lookups for parsed packages
pub struct Checker {
    /// Registry to query, `None` for a listing without lookups
    registry: Option<Arc<dyn RegistryAdapter>>,
    /// Maximum number of lookups in flight
    concurrency: usize,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl Checker {
    /// A checker that performs no lookups
    pub fn offline() -> Self {
        Self {
            registry: None,
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }

    /// A checker that queries the given registry
    pub fn with_registry(registry: Arc<dyn RegistryAdapter>, concurrency: usize) -> Self {
        Self {
            registry: Some(registry),
            concurrency: concurrency.max(1),
            show_progress: false,
        }
    }

    /// Build a checker from validated CLI arguments
    pub fn from_args(args: &CliArgs) -> Result<Self, AppError> {
        args.validate()?;

        let checker = if args.check {
            let client = HttpClient::new()?;
            let adapter = PyPIAdapter::with_base_url(client, &args.index_url);
            Self::with_registry(Arc::new(adapter), args.concurrency)
        } else {
            Self::offline()
        };

        Ok(checker.with_progress(args.show_progress()))
    }

    /// Enable or disable the progress bar (builder pattern)
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Returns true if lookups will be performed
    pub fn is_online(&self) -> bool {
        self.registry.is_some()
    }

    /// Check every package and build the report
    pub async fn run(&self, source: impl Into<String>, packages: Vec<Package>) -> CheckReport {
        let Some(registry) = &self.registry else {
            let mut report = CheckReport::new(source, false);
            for package in packages {
                report.add(PackageReport::unchecked(package));
            }
            return report;
        };

        let mut report = CheckReport::new(source, true);
        let results = self.fetch_all(registry, &packages).await;

        for package in packages {
            let result = match results.get(&package.name) {
                Some(Ok(latest)) => PackageReport::checked(package, latest.clone()),
                Some(Err(message)) => PackageReport::failed(package, message.clone()),
                None => PackageReport::failed(package, "lookup did not complete"),
            };
            report.add(result);
        }

        report
    }

    /// Look up every distinct name once
    async fn fetch_all(
        &self,
        registry: &Arc<dyn RegistryAdapter>,
        packages: &[Package],
    ) -> LookupResults {
        // manifest entries per distinct name
        let mut entries: BTreeMap<&str, u64> = BTreeMap::new();
        for package in packages {
            *entries.entry(package.name.as_str()).or_default() += 1;
        }

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for &name in entries.keys() {
            let registry = Arc::clone(registry);
            let semaphore = Arc::clone(&semaphore);
            let name = name.to_string();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let result = registry
                    .fetch_latest(&name)
                    .await
                    .map_err(|e| e.to_string());
                (name, result)
            });
        }

        let progress = CheckProgress::lookups(packages, self.show_progress);

        let mut results = LookupResults::new();
        while let Some(joined) = tasks.join_next().await {
            // a panicked task leaves its name out; run() reports it as failed
            if let Ok((name, result)) = joined {
                let declared = entries.get(name.as_str()).copied().unwrap_or(1);
                progress.record(&name, declared, &result);
                results.insert(name, result);
            }
        }
        progress.finish();

        results
    }
}
