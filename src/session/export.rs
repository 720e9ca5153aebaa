// SPDX-License-Identifier: MPL-2.0
//! Export lifecycle state machine.
//!
//! At most one export is in flight per session. Starting an export while
//! one is in flight is a no-op, not a queue. Terminal states persist until
//! explicitly acknowledged so the result stays observable.

/// Lifecycle of the composition export task.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportState {
    /// No export running and no unacknowledged result.
    #[default]
    Idle,
    /// Export running, with displayed progress in [0.0, 1.0].
    Exporting(f32),
    /// Export finished successfully; awaiting acknowledgement.
    Succeeded,
    /// Export failed with an opaque diagnostic; awaiting acknowledgement.
    Failed(String),
}

/// Owns the export state and enforces its legal transitions.
#[derive(Debug, Default)]
pub struct ExportController {
    state: ExportState,
}

impl ExportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ExportState {
        &self.state
    }

    /// Whether an export is currently in flight.
    #[must_use]
    pub fn is_exporting(&self) -> bool {
        matches!(self.state, ExportState::Exporting(_))
    }

    /// Whether the state is a terminal result awaiting acknowledgement.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, ExportState::Succeeded | ExportState::Failed(_))
    }

    /// Attempts to start an export.
    ///
    /// Returns `true` and transitions to `Exporting(0.0)` only from `Idle`.
    /// While exporting, or while a result awaits acknowledgement, the call
    /// is a no-op and returns `false`.
    pub fn begin(&mut self) -> bool {
        if self.state == ExportState::Idle {
            self.state = ExportState::Exporting(0.0);
            true
        } else {
            false
        }
    }

    /// Applies a progress report from the export task.
    ///
    /// Reports are clamped into [0.0, 1.0]; a report lower than the last
    /// displayed value is ignored so displayed progress stays monotonic
    /// even when the underlying signal is not. Ignored outside `Exporting`.
    pub fn record_progress(&mut self, progress: f32) {
        if let ExportState::Exporting(current) = self.state {
            if !progress.is_finite() {
                return;
            }
            let clamped = progress.clamp(0.0, 1.0);
            if clamped > current {
                self.state = ExportState::Exporting(clamped);
            }
        }
    }

    /// Displayed progress while exporting.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        match self.state {
            ExportState::Exporting(p) => Some(p),
            _ => None,
        }
    }

    /// Marks the in-flight export as succeeded. Ignored outside `Exporting`.
    pub fn complete(&mut self) {
        if self.is_exporting() {
            self.state = ExportState::Succeeded;
        }
    }

    /// Marks the in-flight export as failed. Ignored outside `Exporting`.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.is_exporting() {
            self.state = ExportState::Failed(reason.into());
        }
    }

    /// Acknowledges a terminal result, returning to `Idle`. Ignored in
    /// `Idle` and while exporting.
    pub fn acknowledge(&mut self) {
        if self.is_terminal() {
            self.state = ExportState::Idle;
        }
    }
}
