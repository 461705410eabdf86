// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Metadata Record
//!
//! Version and timestamp bookkeeping attached to every catalog entity.
//! Time is always passed in explicitly; domain logic never reads the
//! clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource metadata
///
/// The version starts at zero and increases by one on every modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource version, bumped on every modification
    pub version: u32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last modification
    pub last_modified_at: DateTime<Utc>,
}

impl Metadata {
    /// Create metadata for a freshly created resource
    pub fn created_at(now: DateTime<Utc>) -> Self {
        Self {
            version: 0,
            created_at: now,
            last_modified_at: now,
        }
    }

    /// Record a modification, bumping the version
    pub fn last_modified(self, now: DateTime<Utc>) -> Self {
        Self {
            version: self.version + 1,
            last_modified_at: now,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    #[test]
    fn test_created_at_starts_at_version_zero() {
        let now = timestamp("2024-05-22T17:20:38Z");
        let metadata = Metadata::created_at(now);
        assert_eq!(metadata.version, 0);
        assert_eq!(metadata.created_at, now);
        assert_eq!(metadata.last_modified_at, now);
    }

    #[test]
    fn test_last_modified_bumps_the_version() {
        let created = timestamp("2024-05-22T17:20:38Z");
        let modified = timestamp("2024-06-01T09:00:00Z");

        let metadata = Metadata::created_at(created).last_modified(modified);
        assert_eq!(metadata.version, 1);
        assert_eq!(metadata.created_at, created);
        assert_eq!(metadata.last_modified_at, modified);
    }
}
