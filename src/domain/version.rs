//! Three-slot version numbers with unknown components
//!
//! A `Version` is what the resolver extracts from an `==` clause and what the
//! registry reports as the latest release. Components that could not be
//! determined are `None`; once a slot is unknown every later slot is unknown.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Glyph printed in place of an unknown component
pub const UNKNOWN_GLYPH: &str = "*";

/// A (major, minor, patch) triple where each slot may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Version {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

impl Version {
    /// Creates a fully known version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
        }
    }

    /// A version with every component unknown
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Builds a version from leading parts, stopping at the first part that
    /// is not a non-negative integer.
    ///
    /// Trailing spaces and commas are trimmed from each part before parsing.
    /// No partial parsing is attempted: `300rc1` is unknown, not `300`.
    /// Components too large for a `u64` are unknown as well.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut slots = [None; 3];

        for (slot, part) in slots.iter_mut().zip(parts) {
            match part.trim_end_matches([' ', ',']).parse::<u64>() {
                Ok(value) => *slot = Some(value),
                Err(_) => break,
            }
        }

        Self {
            major: slots[0],
            minor: slots[1],
            patch: slots[2],
        }
    }

    /// Parses the operand of an exact-version clause.
    ///
    /// The operand is split on `.` into at most three parts, so anything past
    /// the second dot stays attached to the patch slot.
    pub fn from_operand(operand: &str) -> Self {
        Self::from_parts(operand.splitn(3, '.'))
    }

    /// Parses a version string published by a registry.
    ///
    /// Components beyond the third are discarded. Returns `None` when the
    /// major component is not an integer.
    pub fn from_release(raw: &str) -> Option<Self> {
        let version = Self::from_parts(raw.trim().split('.').take(3));
        version.major.map(|_| version)
    }

    /// Components in order
    pub fn components(&self) -> [Option<u64>; 3] {
        [self.major, self.minor, self.patch]
    }

    /// True when no component is known
    pub fn is_unknown(&self) -> bool {
        self.major.is_none()
    }

    /// Lexicographic comparison over the triple.
    ///
    /// Returns `None` as soon as a position that has to be compared is
    /// unknown on either side.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        for (ours, theirs) in self.components().into_iter().zip(other.components()) {
            match ours?.cmp(&theirs?) {
                Ordering::Equal => continue,
                ordering => return Some(ordering),
            }
        }
        Some(Ordering::Equal)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |slot: Option<u64>| match slot {
            Some(value) => value.to_string(),
            None => UNKNOWN_GLYPH.to_string(),
        };
        write!(
            f,
            "{}.{}.{}",
            render(self.major),
            render(self.minor),
            render(self.patch)
        )
    }
}
