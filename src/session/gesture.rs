// SPDX-License-Identifier: MPL-2.0
//! Swipe-down gesture tracking.
//!
//! Converts raw vertical drag samples into a normalized progress value and
//! discrete outcomes. Threshold crossing is latched during the gesture but
//! only actioned on release, so a fast transient swipe that reverses before
//! release does not dismiss.
//!
//! The tracker is presentation-agnostic: the numeric progress value is
//! authoritative, and any opacity/translation animation is a pure projection
//! of it (see [`SwipeGesture::fade_opacity`]).

/// Discrete result of releasing a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The drag magnitude reached the threshold at some point during the
    /// gesture; the surface should be dismissed.
    Dismissed,
    /// The threshold was never reached; progress snaps back to zero.
    Cancelled,
}

/// Tracks one vertical swipe gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    threshold: f32,
    progress: f32,
    in_progress: bool,
    threshold_reached: bool,
}

impl SwipeGesture {
    /// Creates a tracker with the given dismiss threshold (drag magnitude).
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            progress: 0.0,
            in_progress: false,
            threshold_reached: false,
        }
    }

    /// Starts a gesture, resetting progress to zero.
    pub fn start(&mut self) {
        self.progress = 0.0;
        self.threshold_reached = false;
        self.in_progress = true;
    }

    /// Accumulates a signed vertical drag delta (positive = downward).
    ///
    /// No-op when no gesture is in progress. Crossing the threshold is
    /// latched but not actioned here.
    pub fn move_by(&mut self, delta: f32) {
        if !self.in_progress {
            return;
        }
        self.progress += delta;
        if self.progress.abs() >= self.threshold {
            self.threshold_reached = true;
        }
    }

    /// Ends the gesture and reports its outcome.
    ///
    /// Returns `None` when no gesture was in progress. On cancellation the
    /// progress value snaps back to zero; on dismissal it is left for the
    /// presentation layer to animate out from.
    pub fn release(&mut self) -> Option<GestureOutcome> {
        if !self.in_progress {
            return None;
        }
        self.in_progress = false;
        if self.threshold_reached {
            Some(GestureOutcome::Dismissed)
        } else {
            self.progress = 0.0;
            Some(GestureOutcome::Cancelled)
        }
    }

    /// Explicitly cancels any gesture in progress, resetting progress.
    pub fn cancel(&mut self) {
        self.in_progress = false;
        self.threshold_reached = false;
        self.progress = 0.0;
    }

    /// Current signed progress value.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Pure projection of progress onto an opacity value.
    ///
    /// Fades from 1.0 at rest to 0.0 once the drag magnitude reaches
    /// `fade_distance`, in either direction.
    #[must_use]
    pub fn fade_opacity(&self, fade_distance: f32) -> f32 {
        if fade_distance <= 0.0 {
            return 1.0;
        }
        (1.0 - self.progress.abs() / fade_distance).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn start_resets_progress_and_marks_in_progress() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(40.0);
        gesture.start();
        assert_eq!(gesture.progress(), 0.0);
        assert!(gesture.is_in_progress());
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.move_by(50.0);
        assert_eq!(gesture.progress(), 0.0);
        assert!(gesture.release().is_none());
    }

    #[test]
    fn release_below_threshold_cancels_and_snaps_back() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(50.0);
        gesture.move_by(40.0);
        assert_eq!(gesture.release(), Some(GestureOutcome::Cancelled));
        assert_eq!(gesture.progress(), 0.0);
        assert!(!gesture.is_in_progress());
    }

    #[test]
    fn release_after_crossing_threshold_dismisses() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(70.0);
        gesture.move_by(40.0);
        assert_eq!(gesture.release(), Some(GestureOutcome::Dismissed));
    }

    #[test]
    fn threshold_crossing_is_latched_even_if_reversed() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(120.0);
        gesture.move_by(-80.0);
        assert_eq!(gesture.release(), Some(GestureOutcome::Dismissed));
    }

    #[test]
    fn upward_swipes_count_toward_the_threshold() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(-110.0);
        assert_eq!(gesture.release(), Some(GestureOutcome::Dismissed));
    }

    #[test]
    fn cancel_resets_everything() {
        let mut gesture = SwipeGesture::new(100.0);
        gesture.start();
        gesture.move_by(130.0);
        gesture.cancel();
        assert!(!gesture.is_in_progress());
        assert_eq!(gesture.progress(), 0.0);
        assert!(gesture.release().is_none());
    }

    #[test]
    fn fade_opacity_interpolates_and_clamps() {
        let mut gesture = SwipeGesture::new(300.0);
        gesture.start();
        assert_abs_diff_eq!(gesture.fade_opacity(600.0), 1.0, epsilon = F32_EPSILON);

        gesture.move_by(300.0);
        assert_abs_diff_eq!(gesture.fade_opacity(600.0), 0.5, epsilon = F32_EPSILON);

        gesture.move_by(600.0);
        assert_abs_diff_eq!(gesture.fade_opacity(600.0), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fade_opacity_is_symmetric_for_upward_drags() {
        let mut gesture = SwipeGesture::new(300.0);
        gesture.start();
        gesture.move_by(-300.0);
        assert_abs_diff_eq!(gesture.fade_opacity(600.0), 0.5, epsilon = F32_EPSILON);
    }
}
