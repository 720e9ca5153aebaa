// SPDX-License-Identifier: MPL-2.0
//! Blur aperture domain type for depth preview.
//!
//! This module provides a type-safe wrapper for the portrait blur aperture
//! setting applied to the hot clip.

use crate::config::{DEFAULT_BLUR_APERTURE, MAX_BLUR_APERTURE, MIN_BLUR_APERTURE};

/// Blur aperture for portrait rendering.
///
/// This newtype enforces validity at construction, ensuring the value is
/// always within the configured range. Out-of-range input is clamped,
/// never rejected.
///
/// # Example
///
/// ```
/// use depth_review::domain::BlurAperture;
/// use depth_review::config::MAX_BLUR_APERTURE;
///
/// let aperture = BlurAperture::new(4.0);
/// assert_eq!(aperture.value(), 4.0);
///
/// // Values outside range are clamped
/// let too_high = BlurAperture::new(100.0);
/// assert_eq!(too_high.value(), MAX_BLUR_APERTURE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurAperture(f32);

impl BlurAperture {
    /// Creates a new aperture value, clamping to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_BLUR_APERTURE, MAX_BLUR_APERTURE))
        } else {
            Self(DEFAULT_BLUR_APERTURE)
        }
    }

    /// Returns the aperture as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BlurAperture {
    fn default() -> Self {
        Self(DEFAULT_BLUR_APERTURE)
    }
}
