// SPDX-License-Identifier: MPL-2.0
//! Per-asset playback status registry.
//!
//! The registry is an auxiliary index over asset identifiers: assets are
//! immutable entries in the catalog's ordered arena, and their mutable
//! playback status lives here, never inside any rendering instance. A
//! reselected-but-not-yet-unmounted item's status therefore survives
//! scroll recycling.
//!
//! The registry does not validate transition legality; legality is a
//! caller contract enforced by the session root.

use crate::domain::asset::AssetId;
use crate::domain::playback::PlaybackStatus;
use crate::error::PlaybackFailure;
use std::collections::HashMap;

/// Mapping of asset identifiers to playback status.
#[derive(Debug, Default)]
pub struct PlaybackRegistry {
    statuses: HashMap<AssetId, PlaybackStatus>,
    failures: HashMap<AssetId, PlaybackFailure>,
}

impl PlaybackRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status for `id`, defaulting to
    /// [`PlaybackStatus::Waiting`] for unknown identifiers. Never fails.
    #[must_use]
    pub fn get(&self, id: &AssetId) -> PlaybackStatus {
        self.statuses.get(id).copied().unwrap_or_default()
    }

    /// Replaces the prior status for `id`. A non-failed status clears any
    /// recorded failure reason.
    pub fn set(&mut self, id: &AssetId, status: PlaybackStatus) {
        if !status.is_failed() {
            self.failures.remove(id);
        }
        self.statuses.insert(id.clone(), status);
    }

    /// Records a per-item failure with its diagnostic.
    pub fn set_failed(&mut self, id: &AssetId, failure: PlaybackFailure) {
        self.statuses.insert(id.clone(), PlaybackStatus::Failed);
        self.failures.insert(id.clone(), failure);
    }

    /// Returns the failure reason for `id`, if it is in the failed state.
    #[must_use]
    pub fn failure(&self, id: &AssetId) -> Option<&PlaybackFailure> {
        self.failures.get(id)
    }

    /// Demotes every asset except the new hot one.
    ///
    /// Invoked on selection change. The previously hot clip (the only one
    /// that can be `Playing`) is paused so its position stays resumable for
    /// a grace period; clips already paused from an earlier selection
    /// change are lazily unloaded.
    pub fn reset_all_except(&mut self, hot: &AssetId) {
        for (id, status) in self.statuses.iter_mut() {
            if id == hot {
                continue;
            }
            match *status {
                PlaybackStatus::Playing => *status = PlaybackStatus::Paused,
                PlaybackStatus::Paused => *status = PlaybackStatus::Unloaded,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AssetId {
        AssetId::new(s)
    }

    #[test]
    fn unknown_assets_read_as_waiting() {
        let registry = PlaybackRegistry::new();
        assert_eq!(registry.get(&id("never-seen")), PlaybackStatus::Waiting);
    }

    #[test]
    fn set_replaces_prior_status() {
        let mut registry = PlaybackRegistry::new();
        registry.set(&id("a"), PlaybackStatus::Playing);
        registry.set(&id("a"), PlaybackStatus::Ended);
        assert_eq!(registry.get(&id("a")), PlaybackStatus::Ended);
    }

    #[test]
    fn reset_pauses_previously_hot_playing_clip() {
        let mut registry = PlaybackRegistry::new();
        registry.set(&id("a"), PlaybackStatus::Playing);
        registry.reset_all_except(&id("b"));
        assert_eq!(registry.get(&id("a")), PlaybackStatus::Paused);
        assert_eq!(registry.get(&id("b")), PlaybackStatus::Waiting);
    }

    #[test]
    fn reset_lazily_unloads_on_the_following_selection_change() {
        let mut registry = PlaybackRegistry::new();
        registry.set(&id("a"), PlaybackStatus::Playing);
        registry.reset_all_except(&id("b"));
        registry.reset_all_except(&id("c"));
        assert_eq!(registry.get(&id("a")), PlaybackStatus::Unloaded);
    }

    #[test]
    fn reset_leaves_the_hot_asset_untouched() {
        let mut registry = PlaybackRegistry::new();
        registry.set(&id("a"), PlaybackStatus::Playing);
        registry.reset_all_except(&id("a"));
        assert_eq!(registry.get(&id("a")), PlaybackStatus::Playing);
    }

    #[test]
    fn reset_does_not_disturb_failed_or_ended_clips() {
        let mut registry = PlaybackRegistry::new();
        registry.set_failed(&id("a"), PlaybackFailure::UnsupportedFormat);
        registry.set(&id("b"), PlaybackStatus::Ended);
        registry.reset_all_except(&id("c"));
        assert_eq!(registry.get(&id("a")), PlaybackStatus::Failed);
        assert_eq!(registry.get(&id("b")), PlaybackStatus::Ended);
    }

    #[test]
    fn failures_carry_their_diagnostic_and_clear_on_recovery() {
        let mut registry = PlaybackRegistry::new();
        registry.set_failed(&id("a"), PlaybackFailure::from_message("failed to decode"));
        assert!(registry.failure(&id("a")).is_some());

        registry.set(&id("a"), PlaybackStatus::Waiting);
        assert!(registry.failure(&id("a")).is_none());
    }
}
