//! Where a requirements manifest is read from

use crate::error::ManifestError;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that selects standard input
pub const STDIN_ARG: &str = "-";

/// Required extension for manifest files
const MANIFEST_EXTENSION: &str = "txt";

/// A requirements manifest source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl ManifestSource {
    /// Build a source from a command line path, `-` meaning stdin
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_ARG {
            ManifestSource::Stdin
        } else {
            ManifestSource::File(path.to_path_buf())
        }
    }

    /// Check that a file source exists, is a regular file and ends in `.txt`
    pub fn validate(&self) -> Result<(), ManifestError> {
        let ManifestSource::File(path) = self else {
            return Ok(());
        };

        if !path.exists() {
            return Err(ManifestError::not_found(path));
        }
        if !path.is_file() {
            return Err(ManifestError::NotAFile { path: path.clone() });
        }

        let has_txt_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
            .unwrap_or(false);
        if !has_txt_extension {
            return Err(ManifestError::UnsupportedExtension { path: path.clone() });
        }

        Ok(())
    }

    /// Read the whole manifest as UTF-8, dropping a leading byte order mark
    pub fn read(&self) -> Result<String, ManifestError> {
        let content = match self {
            ManifestSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ManifestError::read_error(STDIN_ARG, e))?;
                buffer
            }
            ManifestSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?
            }
        };

        Ok(match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Stdin => write!(f, "<stdin>"),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
