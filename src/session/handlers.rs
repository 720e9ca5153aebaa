// SPDX-License-Identifier: MPL-2.0
//! Message handlers that keep the session facade slim.
//!
//! Each handler applies one mediation rule completely before returning, so
//! no message ever observes a half-applied state change.

use crate::domain::asset::{Asset, AssetId};
use crate::domain::blur::BlurAperture;
use crate::error::{ExportFailure, LoadMoreFailure};
use crate::session::gesture::GestureOutcome;
use crate::session::messages::{CompositionCommand, CompositionEvent, Event, PageRequest};
use crate::session::overlay::{Severity, Toast};
use crate::session::view_mode::ViewMode;
use crate::session::ReviewSession;
use std::time::Instant;

impl ReviewSession {
    // ───────────────────────────────────────────────────────────────────
    // Gesture
    // ───────────────────────────────────────────────────────────────────

    pub(crate) fn handle_gesture_started(&mut self) -> Vec<Event> {
        if self.view_mode.allows_swipe_dismiss() {
            self.gesture.start();
        }
        Vec::new()
    }

    pub(crate) fn handle_gesture_moved(&mut self, delta: f32) -> Vec<Event> {
        if self.view_mode.allows_swipe_dismiss() {
            self.gesture.move_by(delta);
        }
        Vec::new()
    }

    pub(crate) fn handle_gesture_released(&mut self) -> Vec<Event> {
        if !self.view_mode.allows_swipe_dismiss() {
            return Vec::new();
        }
        match self.gesture.release() {
            Some(GestureOutcome::Dismissed) => vec![Event::RequestDismiss],
            _ => Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────────
    // Selection & list
    // ───────────────────────────────────────────────────────────────────

    /// Commits a selection and arms the clip for loading.
    ///
    /// Selecting an absent identifier leaves all state unchanged. The
    /// previously hot clip is demoted by the registry so it is never left
    /// `Playing` while another clip is hot.
    pub(crate) fn select_asset(&mut self, id: &AssetId) -> Vec<Event> {
        let was_selected = self.catalog.selection().selected() == Some(id);
        if self.catalog.select(id).is_err() {
            return Vec::new();
        }
        if !was_selected {
            self.registry.reset_all_except(id);
            self.throttle.reset();
        }
        vec![Event::Composition(CompositionCommand::Load {
            asset_id: id.clone(),
            mode: self.preview_mode(),
        })]
    }

    pub(crate) fn handle_item_tapped(&mut self, id: &AssetId) -> Vec<Event> {
        if !self.catalog.contains(id) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if self.catalog.selection().selected() != Some(id) {
            events.extend(self.select_asset(id));
        }
        self.set_view_mode(self.view_mode.toggled());
        // Tap-to-open starts from the beginning unless already mid-play.
        if !self.registry.get(id).is_playing() {
            self.catalog.set_progress(0.0);
            events.push(Event::Composition(CompositionCommand::Seek(0.0)));
            events.push(Event::Composition(CompositionCommand::Play));
        }
        events
    }

    pub(crate) fn handle_scroll_to(&mut self, id: &AssetId) -> Vec<Event> {
        if self.catalog.contains(id) {
            vec![Event::ScrollTo(id.clone())]
        } else {
            Vec::new()
        }
    }

    pub(crate) fn handle_load_more(&mut self) -> Vec<Event> {
        if self.fetch_in_flight {
            return Vec::new();
        }
        self.fetch_in_flight = true;
        vec![Event::FetchPage(PageRequest {
            offset: self.catalog.len(),
            limit: self.page_size,
        })]
    }

    pub(crate) fn handle_page_loaded(
        &mut self,
        result: Result<Vec<Asset>, LoadMoreFailure>,
    ) -> Vec<Event> {
        self.fetch_in_flight = false;
        match result {
            Ok(assets) => {
                self.catalog.append_page(assets);
            }
            Err(failure) => {
                self.overlay.show_toast(Toast::new(
                    Severity::Warning,
                    "Couldn't load more clips",
                    failure.to_string(),
                    self.clock,
                ));
            }
        }
        Vec::new()
    }

    // ───────────────────────────────────────────────────────────────────
    // Playback control
    // ───────────────────────────────────────────────────────────────────

    pub(crate) fn handle_play(&mut self) -> Vec<Event> {
        if self.catalog.selection().selected().is_some() {
            vec![Event::Composition(CompositionCommand::Play)]
        } else {
            Vec::new()
        }
    }

    pub(crate) fn handle_pause(&mut self) -> Vec<Event> {
        if self.catalog.selection().selected().is_some() {
            vec![Event::Composition(CompositionCommand::Pause)]
        } else {
            Vec::new()
        }
    }

    pub(crate) fn handle_seek(&mut self, progress: f32) -> Vec<Event> {
        if self.catalog.selection().selected().is_none() || !progress.is_finite() {
            return Vec::new();
        }
        let progress = progress.clamp(0.0, 1.0);
        self.catalog.set_progress(progress);
        vec![Event::Composition(CompositionCommand::Seek(progress))]
    }

    // ───────────────────────────────────────────────────────────────────
    // View & preview settings
    // ───────────────────────────────────────────────────────────────────

    fn set_view_mode(&mut self, mode: ViewMode) {
        // Entering full-screen cancels any swipe in progress; the gesture
        // would otherwise be stranded with no release handler acting on it.
        if mode.is_full_screen() && self.gesture.is_in_progress() {
            self.gesture.cancel();
        }
        self.view_mode = mode;
    }

    pub(crate) fn handle_full_screen_toggled(&mut self) -> Vec<Event> {
        self.set_view_mode(self.view_mode.toggled());
        Vec::new()
    }

    pub(crate) fn handle_depth_toggled(&mut self) -> Vec<Event> {
        self.catalog.toggle_depth_preview();
        // Re-arm the hot clip so the collaborator re-renders in the new mode.
        match self.catalog.selection().selected() {
            Some(id) => vec![Event::Composition(CompositionCommand::Load {
                asset_id: id.clone(),
                mode: self.preview_mode(),
            })],
            None => Vec::new(),
        }
    }

    pub(crate) fn handle_blur_changed(&mut self, value: f32) -> Vec<Event> {
        self.catalog.set_blur_aperture(BlurAperture::new(value));
        Vec::new()
    }

    // ───────────────────────────────────────────────────────────────────
    // Export
    // ───────────────────────────────────────────────────────────────────

    pub(crate) fn handle_export_pressed(&mut self) -> Vec<Event> {
        let Some(id) = self.catalog.selection().selected().cloned() else {
            return Vec::new();
        };
        if self.export.begin() {
            vec![Event::StartExport(id)]
        } else {
            Vec::new()
        }
    }

    pub(crate) fn handle_export_progressed(&mut self, progress: f32) -> Vec<Event> {
        self.export.record_progress(progress);
        Vec::new()
    }

    pub(crate) fn handle_export_finished(
        &mut self,
        result: Result<(), ExportFailure>,
    ) -> Vec<Event> {
        match result {
            Ok(()) => {
                self.export.complete();
                self.overlay.show_toast(
                    Toast::new(
                        Severity::Success,
                        "Clip saved",
                        "The composition was exported to your library.",
                        self.clock,
                    )
                    .sticky(),
                );
            }
            Err(failure) => {
                self.export.fail(failure.0.clone());
                // Sticky marks the toast as carrying an export result;
                // dismissing it is the acknowledgement, so it must hold the
                // slot until then.
                self.overlay.show_toast(
                    Toast::new(Severity::Error, "Export failed", failure.0, self.clock).sticky(),
                );
            }
        }
        Vec::new()
    }

    // ───────────────────────────────────────────────────────────────────
    // Overlays
    // ───────────────────────────────────────────────────────────────────

    pub(crate) fn handle_picker_opened(&mut self) -> Vec<Event> {
        self.overlay.show_picker();
        Vec::new()
    }

    pub(crate) fn handle_picker_closed(&mut self) -> Vec<Event> {
        self.overlay.hide_picker();
        Vec::new()
    }

    /// Picker selection: select, scroll to the clip, then close the modal.
    pub(crate) fn handle_picker_asset_selected(&mut self, id: &AssetId) -> Vec<Event> {
        let mut events = self.select_asset(id);
        if self.catalog.contains(id) {
            events.push(Event::ScrollTo(id.clone()));
        }
        self.overlay.hide_picker();
        events
    }

    pub(crate) fn handle_toast_dismissed(&mut self) -> Vec<Event> {
        self.overlay.hide_toast();
        // Export toasts are the only sticky ones; dismissing one while a
        // result is pending acknowledgement is that acknowledgement.
        if self.export.is_terminal() {
            self.export.acknowledge();
        }
        Vec::new()
    }

    // ───────────────────────────────────────────────────────────────────
    // Collaborator callbacks
    // ───────────────────────────────────────────────────────────────────

    pub(crate) fn handle_composition(
        &mut self,
        asset_id: &AssetId,
        event: CompositionEvent,
    ) -> Vec<Event> {
        let is_selected = self.catalog.selection().selected() == Some(asset_id);
        match event {
            // Status is keyed per asset and recorded in emission order,
            // even for clips that are no longer hot.
            CompositionEvent::StatusChanged(status) => {
                self.registry.set(asset_id, status);
            }
            CompositionEvent::Failed(failure) => {
                self.registry.set_failed(asset_id, failure);
            }
            // Progress and metadata are selection-scoped: a callback that
            // arrives after the selection moved on is discarded.
            CompositionEvent::ProgressChanged(progress) => {
                if is_selected {
                    if let Some(value) = self.throttle.offer(progress, self.clock) {
                        self.catalog.set_progress(value);
                    }
                }
            }
            CompositionEvent::MetadataLoaded(metadata) => {
                if is_selected {
                    if let Some(blur) = metadata.blur_aperture {
                        self.catalog.set_blur_aperture(BlurAperture::new(blur));
                    }
                }
            }
        }
        Vec::new()
    }

    pub(crate) fn handle_tick(&mut self, now: Instant) -> Vec<Event> {
        self.clock = now;
        if let Some(value) = self.throttle.flush(now) {
            self.catalog.set_progress(value);
        }
        self.overlay.prune(now);
        Vec::new()
    }
}
