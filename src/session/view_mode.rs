// SPDX-License-Identifier: MPL-2.0
//! Composite view mode for the review surface.
//!
//! The session root is the only writer of this value. Dismissal is not a
//! state here: it unmounts the whole surface, so it travels outward as
//! [`crate::session::Event::RequestDismiss`] instead of a self-transition.

/// Current presentation mode of the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Scrollable clip list with toolbars.
    #[default]
    Browsing,
    /// Single clip rendered full-screen with the playback toolbar.
    FullScreen,
}

impl ViewMode {
    /// Returns the other mode. Toggling is always legal.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Browsing => Self::FullScreen,
            Self::FullScreen => Self::Browsing,
        }
    }

    #[must_use]
    pub fn is_full_screen(self) -> bool {
        matches!(self, Self::FullScreen)
    }

    /// Whether swipe-to-dismiss may act in this mode.
    ///
    /// Full-screen suppresses the gesture so the user cannot accidentally
    /// lose their place mid-playback.
    #[must_use]
    pub fn allows_swipe_dismiss(self) -> bool {
        matches!(self, Self::Browsing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_browsing() {
        assert_eq!(ViewMode::default(), ViewMode::Browsing);
    }

    #[test]
    fn toggle_alternates_between_modes() {
        assert_eq!(ViewMode::Browsing.toggled(), ViewMode::FullScreen);
        assert_eq!(ViewMode::FullScreen.toggled(), ViewMode::Browsing);
    }

    #[test]
    fn full_screen_suppresses_swipe_dismiss() {
        assert!(ViewMode::Browsing.allows_swipe_dismiss());
        assert!(!ViewMode::FullScreen.allows_swipe_dismiss());
    }
}
