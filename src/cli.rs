//! CLI argument parsing module for reqcheck

use crate::error::ConfigError;
use crate::manifest::STDIN_ARG;
use crate::registry::PYPI_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// Default number of concurrent registry lookups
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Report pinned versions in a requirements file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "reqcheck",
    version,
    about = "Report pinned requirements.txt versions and compare them with PyPI",
    after_help = "Only exact pins (`==`) define the current version. Packages declared with \
                  other specifiers are reported with an unknown version."
)]
pub struct CliArgs {
    /// Requirements file (`-` reads standard input)
    #[arg(default_value = STDIN_ARG)]
    pub file: PathBuf,

    /// Look up the latest version of every package on the index
    #[arg(short, long)]
    pub check: bool,

    /// Show only packages that are not up to date (requires --check)
    #[arg(long)]
    pub outdated: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Base URL of a PyPI-compatible JSON API
    #[arg(long, default_value = PYPI_API_URL)]
    pub index_url: String,

    /// Maximum number of concurrent lookups
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Reject option combinations that cannot be honored
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::conflicting(
                "--quiet and --verbose cannot be used together",
            ));
        }
        if self.outdated && !self.check {
            return Err(ConfigError::conflicting("--outdated requires --check"));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: self.concurrency,
            });
        }
        if !(self.index_url.starts_with("http://") || self.index_url.starts_with("https://")) {
            return Err(ConfigError::InvalidIndexUrl {
                value: self.index_url.clone(),
            });
        }
        Ok(())
    }

    /// Whether an interactive progress display should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
