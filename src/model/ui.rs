//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, field focus, copy control feedback and transient visuals.

use std::collections::HashMap;
use std::time::Instant;

use crate::logic::feedback::{self, CopyFeedback, CopyStatus};

/// UI preferences and transient visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // FOCUS & CONTROLS
    // ============================================
    /// Position of the focused field among the actionable catalog fields
    pub field_focus: usize,

    /// Feedback per copy control, keyed by the field's source name
    pub copy_feedback: HashMap<&'static str, CopyFeedback>,

    /// Last issued copy request id
    pub last_copy_request: u64,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// When the card entrance animation last started
    pub card_shown_at: Instant,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            field_focus: 0,
            copy_feedback: HashMap::new(),
            last_copy_request: 0,
            card_shown_at: Instant::now(),
            toast_message: None,
            should_quit: false,
        }
    }

    /// Start a copy on a control.
    ///
    /// Any feedback already showing on that control is replaced, so its old
    /// deadline no longer applies. Returns the id the completion must carry.
    pub fn begin_copy(&mut self, control: &'static str, now: Instant) -> u64 {
        self.last_copy_request += 1;
        let request_id = self.last_copy_request;
        self.copy_feedback.insert(
            control,
            CopyFeedback {
                request_id,
                status: CopyStatus::Pending,
                since: now,
            },
        );
        request_id
    }

    /// Record the outcome of a clipboard write.
    ///
    /// Completions for superseded requests are ignored. Returns whether the
    /// control's state changed.
    pub fn finish_copy(
        &mut self,
        control: &'static str,
        request_id: u64,
        succeeded: bool,
        now: Instant,
    ) -> bool {
        match self.copy_feedback.get_mut(control) {
            Some(entry) if entry.request_id == request_id => {
                entry.status = if succeeded {
                    CopyStatus::Copied
                } else {
                    CopyStatus::Failed
                };
                entry.since = now;
                true
            }
            _ => false,
        }
    }

    /// Current status of a copy control (`None` = idle)
    pub fn copy_status(&self, control: &str) -> Option<CopyStatus> {
        self.copy_feedback.get(control).map(|entry| entry.status)
    }

    /// Return controls whose feedback period is over to their idle state
    pub fn expire_copy_feedback(&mut self, now: Instant) {
        self.copy_feedback.retain(|_, entry| !entry.is_expired(now));
    }

    /// Drop all copy feedback; controls of a newly shown card start idle and
    /// completions of earlier requests no longer match anything
    pub fn clear_copy_feedback(&mut self) {
        self.copy_feedback.clear();
    }

    pub fn restart_card_animation(&mut self, now: Instant) {
        self.card_shown_at = now;
    }

    pub fn card_animating(&self, now: Instant) -> bool {
        feedback::is_animating(self.card_shown_at, now)
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        self.toast_message
            .as_ref()
            .is_some_and(|(_, shown_at)| feedback::should_dismiss_toast(*shown_at, now))
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::feedback::COPY_FEEDBACK_DURATION;
    use std::time::Duration;

    #[test]
    fn test_copy_success_then_revert() {
        let mut ui = UiModel::new(false);
        let start = Instant::now();

        let id = ui.begin_copy("phone", start);
        assert_eq!(ui.copy_status("phone"), Some(CopyStatus::Pending));

        assert!(ui.finish_copy("phone", id, true, start));
        assert_eq!(ui.copy_status("phone"), Some(CopyStatus::Copied));

        ui.expire_copy_feedback(start + Duration::from_millis(1500));
        assert_eq!(ui.copy_status("phone"), Some(CopyStatus::Copied));

        ui.expire_copy_feedback(start + COPY_FEEDBACK_DURATION);
        assert_eq!(ui.copy_status("phone"), None);
    }

    #[test]
    fn test_copy_failure_then_revert() {
        let mut ui = UiModel::new(false);
        let start = Instant::now();

        let id = ui.begin_copy("address", start);
        ui.finish_copy("address", id, false, start);
        assert_eq!(ui.copy_status("address"), Some(CopyStatus::Failed));

        ui.expire_copy_feedback(start + COPY_FEEDBACK_DURATION);
        assert_eq!(ui.copy_status("address"), None);
    }

    #[test]
    fn test_recopy_replaces_pending_deadline() {
        let mut ui = UiModel::new(false);
        let start = Instant::now();

        let first = ui.begin_copy("title", start);
        ui.finish_copy("title", first, true, start);

        // Second copy 1.5s later: the first deadline (2.0s) must not revert it
        let later = start + Duration::from_millis(1500);
        let second = ui.begin_copy("title", later);
        ui.finish_copy("title", second, true, later);

        ui.expire_copy_feedback(start + COPY_FEEDBACK_DURATION);
        assert_eq!(ui.copy_status("title"), Some(CopyStatus::Copied));

        ui.expire_copy_feedback(later + COPY_FEEDBACK_DURATION);
        assert_eq!(ui.copy_status("title"), None);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut ui = UiModel::new(false);
        let start = Instant::now();

        let first = ui.begin_copy("title", start);
        let second = ui.begin_copy("title", start);
        assert!(!ui.finish_copy("title", first, false, start));
        assert_eq!(ui.copy_status("title"), Some(CopyStatus::Pending));
        assert!(ui.finish_copy("title", second, true, start));
        assert_eq!(ui.copy_status("title"), Some(CopyStatus::Copied));
    }

    #[test]
    fn test_controls_are_independent() {
        let mut ui = UiModel::new(false);
        let start = Instant::now();

        let phone = ui.begin_copy("phone", start);
        let later = start + Duration::from_millis(1000);
        let website = ui.begin_copy("website", later);
        ui.finish_copy("phone", phone, true, start);
        ui.finish_copy("website", website, false, later);

        ui.expire_copy_feedback(start + COPY_FEEDBACK_DURATION);
        assert_eq!(ui.copy_status("phone"), None);
        assert_eq!(ui.copy_status("website"), Some(CopyStatus::Failed));
    }

    #[test]
    fn test_toast() {
        let mut ui = UiModel::new(false);
        assert!(!ui.should_dismiss_toast(Instant::now()));

        ui.show_toast("Opened link".to_string());
        let shown_at = ui.toast_message.as_ref().unwrap().1;
        assert!(!ui.should_dismiss_toast(shown_at));
        assert!(ui.should_dismiss_toast(shown_at + Duration::from_secs(2)));

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }
}
