// SPDX-License-Identifier: MPL-2.0
//! The review session controller.
//!
//! This module follows a "state down, messages up" pattern: the shell
//! feeds [`Message`]s into [`ReviewSession::update`] and executes the
//! [`Event`]s that come back. No component holds a reference to another's
//! internals; every cross-component rule is mediated here, and each rule
//! completes its full set of state writes before the next message is
//! processed.

pub mod catalog;
pub mod export;
pub mod gesture;
mod handlers;
mod messages;
pub mod overlay;
pub mod registry;
pub mod throttle;
pub mod view_mode;

pub use catalog::{AssetCatalog, SelectionState};
pub use export::{ExportController, ExportState};
pub use gesture::{GestureOutcome, SwipeGesture};
pub use messages::{
    CompositionCommand, CompositionEvent, CompositionMetadata, Event, Message, PageRequest,
};
pub use overlay::{OverlayState, Severity, Toast};
pub use registry::PlaybackRegistry;
pub use throttle::TrailingThrottle;
pub use view_mode::ViewMode;

use crate::config::{ReviewConfig, BACKGROUND_FADE_DISTANCE, TOOLBAR_FADE_DISTANCE};
use crate::domain::asset::{Asset, AssetId};
use crate::domain::playback::{PlaybackStatus, PreviewMode};
use crate::error::PlaybackFailure;
use std::time::Instant;

/// Root controller for one review surface.
///
/// Owns the ordered asset catalog, the per-asset playback registry, the
/// swipe gesture tracker, the export lifecycle, the view mode, and the
/// overlay flags, and keeps them consistent under interleaved user input
/// and collaborator callbacks.
#[derive(Debug)]
pub struct ReviewSession {
    catalog: AssetCatalog,
    registry: PlaybackRegistry,
    gesture: SwipeGesture,
    export: ExportController,
    view_mode: ViewMode,
    overlay: OverlayState,
    throttle: TrailingThrottle,
    page_size: usize,
    fetch_in_flight: bool,
    // Shell time, advanced by `Message::Tick`. Throttle offers and toast
    // stamps read this instead of sampling a second clock.
    clock: Instant,
}

impl ReviewSession {
    /// Creates an empty session with the given configuration.
    #[must_use]
    pub fn new(config: &ReviewConfig) -> Self {
        Self {
            catalog: AssetCatalog::new(),
            registry: PlaybackRegistry::new(),
            gesture: SwipeGesture::new(config.dismiss_threshold()),
            export: ExportController::new(),
            view_mode: ViewMode::default(),
            overlay: OverlayState::new(),
            throttle: TrailingThrottle::new(config.progress_throttle()),
            page_size: config.page_size(),
            fetch_in_flight: false,
            clock: Instant::now(),
        }
    }

    /// Creates a session seeded with an initial page of assets.
    #[must_use]
    pub fn with_assets(config: &ReviewConfig, assets: Vec<Asset>) -> Self {
        let mut session = Self::new(config);
        session.catalog.append_page(assets);
        session
    }

    /// Updates the session and returns the side effects for the shell to
    /// execute, in order.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::GestureStarted => self.handle_gesture_started(),
            Message::GestureMoved(delta) => self.handle_gesture_moved(delta),
            Message::GestureReleased => self.handle_gesture_released(),

            Message::AssetSelected(id) => self.select_asset(&id),
            Message::ItemTapped(id) => self.handle_item_tapped(&id),
            Message::ScrollToRequested(id) => self.handle_scroll_to(&id),
            Message::LoadMoreRequested => self.handle_load_more(),
            Message::PageLoaded(result) => self.handle_page_loaded(result),

            Message::PlayPressed => self.handle_play(),
            Message::PausePressed => self.handle_pause(),
            Message::SeekToProgress(progress) => self.handle_seek(progress),

            Message::FullScreenToggled => self.handle_full_screen_toggled(),
            Message::DepthPreviewToggled => self.handle_depth_toggled(),
            Message::BlurApertureChanged(value) => self.handle_blur_changed(value),

            Message::ExportPressed => self.handle_export_pressed(),
            Message::ExportProgressed(progress) => self.handle_export_progressed(progress),
            Message::ExportFinished(result) => self.handle_export_finished(result),

            Message::PickerOpened => self.handle_picker_opened(),
            Message::PickerClosed => self.handle_picker_closed(),
            Message::PickerAssetSelected(id) => self.handle_picker_asset_selected(&id),
            Message::ToastDismissed => self.handle_toast_dismissed(),

            Message::Composition { asset_id, event } => self.handle_composition(&asset_id, event),
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    // ───────────────────────────────────────────────────────────────────
    // Read-only snapshot for the presentation layer
    // ───────────────────────────────────────────────────────────────────

    /// The ordered asset list and selection state.
    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Shorthand for the selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.catalog.selection()
    }

    /// The currently selected asset record, if any.
    #[must_use]
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.catalog
            .selection()
            .selected()
            .and_then(|id| self.catalog.get(id))
    }

    /// Playback status lookup; unknown identifiers read as `Waiting`.
    #[must_use]
    pub fn playback_status(&self, id: &AssetId) -> PlaybackStatus {
        self.registry.get(id)
    }

    /// Per-item failure diagnostic, if the clip is failed.
    #[must_use]
    pub fn playback_failure(&self, id: &AssetId) -> Option<&PlaybackFailure> {
        self.registry.failure(id)
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn export_state(&self) -> &ExportState {
        self.export.state()
    }

    #[must_use]
    pub fn gesture(&self) -> &SwipeGesture {
        &self.gesture
    }

    /// Whether swipe-to-dismiss currently acts on gestures.
    #[must_use]
    pub fn is_swipe_enabled(&self) -> bool {
        self.view_mode.allows_swipe_dismiss()
    }

    /// Opacity of the review background, derived from gesture progress.
    #[must_use]
    pub fn background_opacity(&self) -> f32 {
        self.gesture.fade_opacity(BACKGROUND_FADE_DISTANCE)
    }

    /// Opacity of the floating toolbars, derived from gesture progress.
    #[must_use]
    pub fn toolbar_opacity(&self) -> f32 {
        self.gesture.fade_opacity(TOOLBAR_FADE_DISTANCE)
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.overlay.toast()
    }

    #[must_use]
    pub fn is_picker_visible(&self) -> bool {
        self.overlay.is_picker_visible()
    }

    /// Render mode derived from the depth-preview flag.
    #[must_use]
    pub fn preview_mode(&self) -> PreviewMode {
        PreviewMode::from_depth_flag(self.catalog.selection().depth_preview())
    }
}
