// SPDX-License-Identifier: MPL-2.0
//! Domain types for the review session.
//!
//! These types carry no behavior beyond validation and predicates; all
//! mediation between them happens in [`crate::session`].

pub mod asset;
pub mod blur;
pub mod playback;

pub use asset::{Asset, AssetId, AssetSource};
pub use blur::BlurAperture;
pub use playback::{PlaybackStatus, PreviewMode};
