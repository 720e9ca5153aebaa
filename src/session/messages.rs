// SPDX-License-Identifier: MPL-2.0
//! Session message/event types re-exported by the facade.
//!
//! Inbound [`Message`]s carry user intents and collaborator callbacks;
//! outbound [`Event`]s carry the side effects the shell must execute.
//! Collaborator callbacks are tagged with their asset identifier so the
//! session can discard stale arrivals after a selection change, instead of
//! per-item callbacks closing over shared state.

use crate::domain::asset::{Asset, AssetId};
use crate::domain::playback::{PlaybackStatus, PreviewMode};
use crate::error::{ExportFailure, LoadMoreFailure, PlaybackFailure};
use std::time::Instant;

/// Metadata reported by the rendering collaborator once a clip loads.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionMetadata {
    /// Intrinsic blur aperture recorded with the clip, if any.
    pub blur_aperture: Option<f32>,
}

/// Callback from one rendering instance.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionEvent {
    /// Playback progress, 0.0 to 1.0.
    ProgressChanged(f32),
    /// The instance entered a new playback state.
    StatusChanged(PlaybackStatus),
    /// Load finished and metadata is available.
    MetadataLoaded(CompositionMetadata),
    /// The clip failed to load or decode.
    Failed(PlaybackFailure),
}

/// Messages consumed by [`crate::session::ReviewSession::update`].
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════
    // SWIPE GESTURE
    // ═══════════════════════════════════════════════════════════════════
    /// A downward swipe began.
    GestureStarted,
    /// Signed vertical drag delta (positive = downward).
    GestureMoved(f32),
    /// The finger lifted.
    GestureReleased,

    // ═══════════════════════════════════════════════════════════════════
    // SELECTION & LIST
    // ═══════════════════════════════════════════════════════════════════
    /// Select a clip from the list.
    AssetSelected(AssetId),
    /// A list item was tapped (toggles full-screen, may restart playback).
    ItemTapped(AssetId),
    /// Ask the shell to position the viewport at a clip.
    ScrollToRequested(AssetId),
    /// The list scrolled near its end; fetch the next page.
    LoadMoreRequested,
    /// Result of an asynchronous page fetch.
    PageLoaded(Result<Vec<Asset>, LoadMoreFailure>),

    // ═══════════════════════════════════════════════════════════════════
    // PLAYBACK CONTROL
    // ═══════════════════════════════════════════════════════════════════
    /// Play the selected clip. No-op without a selection.
    PlayPressed,
    /// Pause the selected clip.
    PausePressed,
    /// Seek the selected clip to a progress in [0.0, 1.0].
    SeekToProgress(f32),

    // ═══════════════════════════════════════════════════════════════════
    // VIEW & PREVIEW SETTINGS
    // ═══════════════════════════════════════════════════════════════════
    /// Toggle between browsing and full-screen.
    FullScreenToggled,
    /// Toggle the raw depth visualization.
    DepthPreviewToggled,
    /// Set the blur aperture (clamped, never rejected).
    BlurApertureChanged(f32),

    // ═══════════════════════════════════════════════════════════════════
    // EXPORT
    // ═══════════════════════════════════════════════════════════════════
    /// Export the selected clip's composition. No-op while one is in flight.
    ExportPressed,
    /// Progress report from the export task (0.0 - 1.0).
    ExportProgressed(f32),
    /// Result of the export task.
    ExportFinished(Result<(), ExportFailure>),

    // ═══════════════════════════════════════════════════════════════════
    // OVERLAYS
    // ═══════════════════════════════════════════════════════════════════
    /// Open the asset-picker modal.
    PickerOpened,
    /// Close the asset-picker modal without selecting.
    PickerClosed,
    /// A clip was picked in the modal.
    PickerAssetSelected(AssetId),
    /// The visible toast was dismissed.
    ToastDismissed,

    // ═══════════════════════════════════════════════════════════════════
    // COLLABORATOR CALLBACKS
    // ═══════════════════════════════════════════════════════════════════
    /// Tagged callback from a rendering instance.
    Composition {
        asset_id: AssetId,
        event: CompositionEvent,
    },
    /// Periodic tick driving throttle flushes and toast expiry.
    Tick(Instant),
}

/// Command for the rendering collaborator, addressed to the hot clip.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionCommand {
    /// Arm a clip for rendering in the given mode.
    Load { asset_id: AssetId, mode: PreviewMode },
    Play,
    Pause,
    /// Seek to a progress in [0.0, 1.0].
    Seek(f32),
}

/// Parameters for an asynchronous page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of assets already listed; the source appends after this.
    pub offset: usize,
    /// Maximum number of assets to return.
    pub limit: usize,
}

/// Side effects for the shell to execute, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Forward a command to the rendering collaborator.
    Composition(CompositionCommand),
    /// Fetch the next page of assets.
    FetchPage(PageRequest),
    /// Start exporting the given clip's composition.
    StartExport(AssetId),
    /// Position the list viewport at the given clip.
    ScrollTo(AssetId),
    /// Unmount and close the review surface. Terminal for the session.
    RequestDismiss,
}
