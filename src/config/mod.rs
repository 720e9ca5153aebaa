// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving host preferences to a `review.toml` file.
//!
//! All fields are optional in the file; resolved accessors fall back to the
//! constants in [`defaults`] and clamp out-of-range values rather than
//! rejecting them.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "review.toml";
const APP_NAME: &str = "DepthReview";

/// Host-tunable settings for a review session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReviewConfig {
    /// Vertical drag magnitude that commits a dismissal on release.
    #[serde(default)]
    pub dismiss_threshold: Option<f32>,

    /// Throttle window for playback-progress callbacks, in milliseconds.
    #[serde(default)]
    pub progress_throttle_ms: Option<u64>,

    /// Number of assets requested per page load.
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ReviewConfig {
    /// Resolved dismiss threshold. Non-finite or non-positive values fall
    /// back to the default.
    #[must_use]
    pub fn dismiss_threshold(&self) -> f32 {
        match self.dismiss_threshold {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => DEFAULT_DISMISS_THRESHOLD,
        }
    }

    /// Resolved throttle window for playback-progress callbacks.
    #[must_use]
    pub fn progress_throttle(&self) -> Duration {
        Duration::from_millis(
            self.progress_throttle_ms
                .unwrap_or(DEFAULT_PROGRESS_THROTTLE_MS),
        )
    }

    /// Resolved page size, clamped to the allowed range.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ReviewConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ReviewConfig::default())
}

pub fn save(config: &ReviewConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ReviewConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ReviewConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| crate::error::Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = ReviewConfig {
            dismiss_threshold: Some(150.0),
            progress_throttle_ms: Some(50),
            page_size: Some(10),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("review.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.dismiss_threshold, config.dismiss_threshold);
        assert_eq!(loaded.progress_throttle_ms, config.progress_throttle_ms);
        assert_eq!(loaded.page_size, config.page_size);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("review.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.dismiss_threshold.is_none());
    }

    #[test]
    fn resolved_accessors_fall_back_to_defaults() {
        let config = ReviewConfig::default();
        assert_eq!(config.dismiss_threshold(), DEFAULT_DISMISS_THRESHOLD);
        assert_eq!(
            config.progress_throttle(),
            Duration::from_millis(DEFAULT_PROGRESS_THROTTLE_MS)
        );
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn resolved_accessors_reject_degenerate_values() {
        let config = ReviewConfig {
            dismiss_threshold: Some(-10.0),
            progress_throttle_ms: None,
            page_size: Some(10_000),
        };
        assert_eq!(config.dismiss_threshold(), DEFAULT_DISMISS_THRESHOLD);
        assert_eq!(config.page_size(), MAX_PAGE_SIZE);
    }
}
