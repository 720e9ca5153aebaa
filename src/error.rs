// SPDX-License-Identifier: MPL-2.0
//! Error types for the review session.
//!
//! Per-asset failures stay local to the asset they describe; session-level
//! failures are carried in state (toasts, export status) rather than thrown
//! across the command interface. The crate-level [`Error`] only appears at
//! the configuration I/O boundary.

use crate::domain::asset::AssetId;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error used at the configuration boundary.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// An asset identifier was selected that is not in the current list.
///
/// Selection is rejected and state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    /// The identifier that was not found.
    pub asset_id: AssetId,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown asset: {}", self.asset_id)
    }
}

impl std::error::Error for SelectionError {}

/// A page fetch failed. The list is left unchanged and the failure is
/// surfaced as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreFailure(pub String);

impl fmt::Display for LoadMoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load more clips: {}", self.0)
    }
}

impl std::error::Error for LoadMoreFailure {}

/// Specific failure categories for clip load/decode problems.
///
/// Used to surface a per-item failure without affecting other assets or
/// session-level state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackFailure {
    /// The clip format is not supported by the renderer.
    UnsupportedFormat,

    /// Decoding failed during load or playback.
    DecodingFailed(String),

    /// I/O error (missing file, permission denied, etc.).
    IoError(String),

    /// Generic failure with a raw message.
    Other(String),
}

impl PlaybackFailure {
    /// Attempts to categorize a raw message from the rendering collaborator
    /// into a specific failure type.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return PlaybackFailure::IoError(msg.to_string());
        }

        if msg_lower.contains("unsupported") || msg_lower.contains("unknown format") {
            return PlaybackFailure::UnsupportedFormat;
        }

        if msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("invalid data")
        {
            return PlaybackFailure::DecodingFailed(msg.to_string());
        }

        PlaybackFailure::Other(msg.to_string())
    }
}

impl fmt::Display for PlaybackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackFailure::UnsupportedFormat => write!(f, "Unsupported clip format"),
            PlaybackFailure::DecodingFailed(msg) => write!(f, "Decoding failed: {msg}"),
            PlaybackFailure::IoError(msg) => write!(f, "I/O error: {msg}"),
            PlaybackFailure::Other(msg) => write!(f, "Playback failed: {msg}"),
        }
    }
}

impl std::error::Error for PlaybackFailure {}

/// Opaque diagnostic carried by a failed export.
///
/// Surfaced as a blocking notification until acknowledged, since the user
/// must decide whether to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure(pub String);

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Export failed: {}", self.0)
    }
}

impl std::error::Error for ExportFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_categorizes_io_errors() {
        assert!(matches!(
            PlaybackFailure::from_message("No such file or directory"),
            PlaybackFailure::IoError(_)
        ));
        assert!(matches!(
            PlaybackFailure::from_message("Permission denied"),
            PlaybackFailure::IoError(_)
        ));
    }

    #[test]
    fn from_message_categorizes_unsupported_format() {
        assert_eq!(
            PlaybackFailure::from_message("unsupported pixel layout"),
            PlaybackFailure::UnsupportedFormat
        );
    }

    #[test]
    fn from_message_categorizes_decode_failures() {
        assert!(matches!(
            PlaybackFailure::from_message("failed to decode depth track"),
            PlaybackFailure::DecodingFailed(_)
        ));
    }

    #[test]
    fn from_message_falls_back_to_other() {
        assert!(matches!(
            PlaybackFailure::from_message("something odd"),
            PlaybackFailure::Other(_)
        ));
    }

    #[test]
    fn selection_error_names_the_asset() {
        let err = SelectionError {
            asset_id: AssetId::new("clip-9"),
        };
        assert_eq!(err.to_string(), "Unknown asset: clip-9");
    }

    #[test]
    fn export_failure_display_carries_diagnostic() {
        let err = ExportFailure("disk full".to_string());
        assert_eq!(err.to_string(), "Export failed: disk full");
    }
}
