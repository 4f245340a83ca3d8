//! Copy control feedback timing
//!
//! A copy control shows "Copied!" or "Failed" for a fixed period after the
//! clipboard write finishes, then returns to its idle label.

use std::time::{Duration, Instant};

/// How long the copied/failed state stays visible
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Length of the card entrance animation
pub const CARD_ANIMATION_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    /// Clipboard write in flight; the control still shows its idle label
    Pending,
    Copied,
    Failed,
}

/// Feedback state of one copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub request_id: u64,
    pub status: CopyStatus,
    /// When the current status was entered
    pub since: Instant,
}

impl CopyFeedback {
    /// Pending writes never expire; finished ones expire after the feedback period
    pub fn is_expired(&self, now: Instant) -> bool {
        self.status != CopyStatus::Pending
            && now.saturating_duration_since(self.since) >= COPY_FEEDBACK_DURATION
    }
}

/// Label of a copy control for a given feedback status
pub fn copy_control_label(status: Option<CopyStatus>) -> &'static str {
    match status {
        None | Some(CopyStatus::Pending) => "Copy",
        Some(CopyStatus::Copied) => "✓ Copied!",
        Some(CopyStatus::Failed) => "Failed",
    }
}

pub fn should_dismiss_toast(shown_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(shown_at) >= TOAST_DURATION
}

pub fn is_animating(started_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(started_at) < CARD_ANIMATION_DURATION
}
