// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for review clips.
//!
//! Status values are reported by the rendering collaborator; this crate
//! records them per asset and only derives, never fabricates, transitions.

/// Current playback status of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// The clip has been released and must be reloaded before playing.
    Unloaded,
    /// The clip has not reported any state yet (registry default).
    #[default]
    Waiting,
    /// The clip is currently playing.
    Playing,
    /// The clip is paused at its current position.
    Paused,
    /// Playback reached the end of the clip.
    Ended,
    /// The clip failed to load or decode.
    Failed,
}

impl PlaybackStatus {
    /// Returns true if the clip is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the clip is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the clip failed to load or decode.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns true if the clip holds a resumable position (playing or
    /// paused).
    #[must_use]
    pub fn is_resumable(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Render mode requested from the collaborator when arming a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Composite portrait rendering with background blur applied.
    #[default]
    PortraitMode,
    /// Raw depth-map visualization.
    Depth,
}

impl PreviewMode {
    /// Derives the mode from the session's depth-preview flag.
    #[must_use]
    pub fn from_depth_flag(depth_preview: bool) -> Self {
        if depth_preview {
            Self::Depth
        } else {
            Self::PortraitMode
        }
    }

    /// Returns true for the raw depth visualization mode.
    #[must_use]
    pub fn is_depth(self) -> bool {
        matches!(self, Self::Depth)
    }
}
