// SPDX-License-Identifier: MPL-2.0
//! Recorded clip records.
//!
//! Assets are immutable once listed. The ordered list itself lives in
//! [`crate::session::catalog`]; this module only defines the entries.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Stable, unique identifier for a recorded clip.
///
/// Identifiers are issued by the capture pipeline and are opaque to this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to the underlying recording, consumable by the
/// rendering collaborator. This crate never opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource(PathBuf);

impl AssetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// A recorded depth-video clip as listed in the review session.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    id: AssetId,
    created_at: DateTime<Utc>,
    duration: Duration,
    source: AssetSource,
}

impl Asset {
    /// Creates a new immutable asset record.
    pub fn new(
        id: AssetId,
        created_at: DateTime<Utc>,
        duration: Duration,
        source: AssetSource,
    ) -> Self {
        Self {
            id,
            created_at,
            duration,
            source,
        }
    }

    #[must_use]
    pub fn id(&self) -> &AssetId {
        &self.id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn source(&self) -> &AssetSource {
        &self.source
    }
}
