// SPDX-License-Identifier: MPL-2.0
//! `depth_review` is the session controller behind a depth-video review
//! surface.
//!
//! It owns selection state, per-clip playback state, swipe-gesture
//! tracking, and the export lifecycle, and keeps them consistent while
//! the user scrolls, taps, swipes, and waits on asynchronous native
//! work. The presentation shell feeds [`session::Message`] values in and
//! executes the [`session::Event`] values that come back; rendering,
//! decoding, and widget concerns stay outside this crate.

pub mod config;
pub mod domain;
pub mod error;
pub mod session;

#[cfg(test)]
pub(crate) mod test_utils;
