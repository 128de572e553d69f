//! Distribution name validation and normalization

use regex::Regex;
use std::sync::LazyLock;

// PEP 508 distribution names
static VALID_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-z0-9]|[a-z0-9][a-z0-9._-]*[a-z0-9])$").unwrap());

// PEP 503 separator runs
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.]+").unwrap());

/// Returns true if `name` is a valid distribution name
pub fn is_valid_name(name: &str) -> bool {
    VALID_NAME_RE.is_match(name)
}

/// Normalizes a name for index URLs: runs of `-`, `_` and `.` become `-`
pub fn normalize_name(name: &str) -> String {
    SEPARATOR_RE.replace_all(name, "-").to_lowercase()
}
