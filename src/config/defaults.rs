// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: swipe-to-dismiss threshold and fade distances
//! - **Blur**: blur aperture bounds for depth preview
//! - **Playback**: progress throttling
//! - **Paging**: asset list page sizes

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default vertical drag magnitude that commits a dismissal on release.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 300.0;

/// Drag distance over which the review background fades to transparent.
pub const BACKGROUND_FADE_DISTANCE: f32 = 600.0;

/// Drag distance over which floating toolbars fade to transparent.
pub const TOOLBAR_FADE_DISTANCE: f32 = 100.0;

// ==========================================================================
// Blur Aperture Defaults
// ==========================================================================

/// Minimum blur aperture (strongest background blur).
pub const MIN_BLUR_APERTURE: f32 = 1.4;

/// Maximum blur aperture (weakest background blur).
pub const MAX_BLUR_APERTURE: f32 = 16.0;

/// Default blur aperture applied before a clip reports its own value.
pub const DEFAULT_BLUR_APERTURE: f32 = 2.8;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default window for throttling playback-progress callbacks (milliseconds).
pub const DEFAULT_PROGRESS_THROTTLE_MS: u64 = 100;

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Default number of assets requested per page load.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Minimum allowed page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: usize = 100;
