// SPDX-License-Identifier: MPL-2.0
//! Ordered asset arena, selection state, and pagination bookkeeping.
//!
//! List order is source-provided and never re-sorted client-side. New pages
//! are appended, never prepended, so in-flight scroll offsets stay valid.

use crate::domain::asset::{Asset, AssetId};
use crate::domain::blur::BlurAperture;
use crate::error::SelectionError;
use std::collections::HashMap;

/// Selection-scoped state: the selected clip plus the settings that follow
/// it (playback progress, blur aperture, depth preview).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<AssetId>,
    progress: f32,
    blur_aperture: BlurAperture,
    depth_preview: bool,
}

impl SelectionState {
    /// Identifier of the currently selected clip, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&AssetId> {
        self.selected.as_ref()
    }

    /// Displayed playback progress, 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current blur aperture.
    #[must_use]
    pub fn blur_aperture(&self) -> BlurAperture {
        self.blur_aperture
    }

    /// Whether the raw depth visualization is enabled.
    #[must_use]
    pub fn depth_preview(&self) -> bool {
        self.depth_preview
    }
}

/// Append-only ordered list of assets with the current selection.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    index: HashMap<AssetId, usize>,
    selection: SelectionState,
}

impl AssetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with an initial page of assets.
    #[must_use]
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let mut catalog = Self::new();
        catalog.append_page(assets);
        catalog
    }

    /// All listed assets in source order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up an asset by identifier.
    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    /// Position of an asset in the list, for viewport scrolling.
    #[must_use]
    pub fn position(&self, id: &AssetId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Read-only view of the selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Appends a page of assets, preserving existing order and dropping
    /// duplicates by identifier. Returns how many assets were appended.
    pub fn append_page(&mut self, page: Vec<Asset>) -> usize {
        let mut appended = 0;
        for asset in page {
            if self.index.contains_key(asset.id()) {
                continue;
            }
            self.index.insert(asset.id().clone(), self.assets.len());
            self.assets.push(asset);
            appended += 1;
        }
        appended
    }

    /// Selects an asset that is present in the list.
    ///
    /// Resets playback progress to zero. Does not start playback.
    pub fn select(&mut self, id: &AssetId) -> Result<(), SelectionError> {
        if !self.contains(id) {
            return Err(SelectionError {
                asset_id: id.clone(),
            });
        }
        self.selection.selected = Some(id.clone());
        self.selection.progress = 0.0;
        Ok(())
    }

    /// Stores displayed playback progress, clamped to [0.0, 1.0].
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_finite() {
            self.selection.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Stores the blur aperture (already clamped by its type).
    pub fn set_blur_aperture(&mut self, aperture: BlurAperture) {
        self.selection.blur_aperture = aperture;
    }

    /// Flips the depth-preview flag and returns the new value.
    pub fn toggle_depth_preview(&mut self) -> bool {
        self.selection.depth_preview = !self.selection.depth_preview;
        self.selection.depth_preview
    }
}
