// SPDX-License-Identifier: MPL-2.0
//! Transient overlay state: the toast slot and the asset-picker modal.
//!
//! Overlays are not part of the playback/gesture state machine, but they
//! are mediated by the session root so that opening the picker always uses
//! the currently committed selection, and so that dismissing an export
//! toast doubles as the export acknowledgement.

use std::time::{Duration, Instant};

/// Severity level determines auto-dismiss behavior and shell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s duration unless sticky).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Warning that doesn't block operation (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast shown over the review surface.
#[derive(Debug, Clone)]
pub struct Toast {
    severity: Severity,
    title: String,
    body: String,
    created_at: Instant,
    sticky: bool,
}

impl Toast {
    /// Creates a toast stamped with the shell-provided time, with the
    /// severity's default dismiss behavior.
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Instant,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
            created_at: now,
            sticky: false,
        }
    }

    /// Marks the toast as requiring manual dismissal regardless of severity.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Whether the toast requires manual dismissal.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the toast should auto-dismiss at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        if self.sticky {
            return false;
        }
        match self.severity.auto_dismiss_duration() {
            Some(duration) => now.duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

/// Toast slot and modal visibility, owned by the session root.
#[derive(Debug, Default)]
pub struct OverlayState {
    toast: Option<Toast>,
    picker_visible: bool,
}

impl OverlayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently visible toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Shows a toast, replacing any prior one (single slot).
    ///
    /// A sticky toast carries a result the user must see; a transient toast
    /// never displaces it and is dropped instead.
    pub fn show_toast(&mut self, toast: Toast) {
        if self.toast.as_ref().is_some_and(Toast::is_sticky) && !toast.is_sticky() {
            return;
        }
        self.toast = Some(toast);
    }

    pub fn hide_toast(&mut self) {
        self.toast = None;
    }

    /// Hides the toast if its auto-dismiss window has elapsed.
    pub fn prune(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    #[must_use]
    pub fn is_picker_visible(&self) -> bool {
        self.picker_visible
    }

    pub fn show_picker(&mut self) {
        self.picker_visible = true;
    }

    pub fn hide_picker(&mut self) {
        self.picker_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toasts_never_auto_dismiss() {
        let now = Instant::now();
        let toast = Toast::new(Severity::Error, "Export failed", "disk full", now);
        assert!(!toast.is_expired(now + Duration::from_secs(600)));
    }

    #[test]
    fn warning_toasts_expire_after_their_window() {
        let now = Instant::now();
        let toast = Toast::new(Severity::Warning, "Couldn't load more clips", "", now);
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + Duration::from_secs(6)));
    }

    #[test]
    fn sticky_overrides_auto_dismiss() {
        let now = Instant::now();
        let toast = Toast::new(Severity::Success, "Saved", "", now).sticky();
        assert!(!toast.is_expired(now + Duration::from_secs(600)));
    }

    #[test]
    fn show_toast_replaces_the_slot() {
        let now = Instant::now();
        let mut overlay = OverlayState::new();
        overlay.show_toast(Toast::new(Severity::Info, "first", "", now));
        overlay.show_toast(Toast::new(Severity::Info, "second", "", now));
        assert_eq!(overlay.toast().map(Toast::title), Some("second"));
    }

    #[test]
    fn transient_toast_never_displaces_a_sticky_one() {
        let now = Instant::now();
        let mut overlay = OverlayState::new();
        overlay.show_toast(Toast::new(Severity::Error, "Export failed", "", now).sticky());
        overlay.show_toast(Toast::new(Severity::Warning, "Couldn't load more clips", "", now));
        assert_eq!(overlay.toast().map(Toast::title), Some("Export failed"));

        // A later sticky result may take the slot.
        overlay.show_toast(Toast::new(Severity::Success, "Clip saved", "", now).sticky());
        assert_eq!(overlay.toast().map(Toast::title), Some("Clip saved"));
    }

    #[test]
    fn prune_only_hides_expired_toasts() {
        let mut overlay = OverlayState::new();
        let now = Instant::now();
        overlay.show_toast(Toast::new(Severity::Info, "hello", "", now));

        overlay.prune(now);
        assert!(overlay.toast().is_some());

        overlay.prune(now + Duration::from_secs(4));
        assert!(overlay.toast().is_none());
    }

    #[test]
    fn picker_visibility_toggles() {
        let mut overlay = OverlayState::new();
        assert!(!overlay.is_picker_visible());
        overlay.show_picker();
        assert!(overlay.is_picker_visible());
        overlay.hide_picker();
        assert!(!overlay.is_picker_visible());
    }
}
