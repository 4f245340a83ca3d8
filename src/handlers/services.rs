//! Service Event Handler
//!
//! Applies results from background services (load, clipboard writes) to the model.

use std::time::Instant;

use leadview::messages::ServiceEvent;

use crate::App;

pub fn handle_service_event(app: &mut App, event: ServiceEvent) {
    let now = Instant::now();

    match event {
        ServiceEvent::Loaded(Ok(store)) => {
            tracing::info!(records = store.len(), "leads loaded");
            app.model.set_store(store, now);
        }
        ServiceEvent::Loaded(Err(e)) => {
            tracing::error!(error = %e, "failed to load leads");
            app.model.set_load_failed(e.to_string());
        }
        ServiceEvent::CopyFinished {
            control,
            request_id,
            result,
        } => {
            if !app
                .model
                .ui
                .finish_copy(control, request_id, result.is_ok(), now)
            {
                tracing::debug!(control, request_id, "ignoring superseded copy result");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use leadview::model::{LeadRecord, LoadPhase, RecordStore};
    use leadview::services::{Clipboard, LoadError};
    use std::sync::Arc;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn write_text(&self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    fn new_app() -> App {
        App::new(false, Arc::new(NullClipboard), None)
    }

    #[test]
    fn test_loaded_records_show_first_lead() {
        let mut app = new_app();
        let store = RecordStore::new(vec![LeadRecord::default(), LeadRecord::default()]).unwrap();
        handle_service_event(&mut app, ServiceEvent::Loaded(Ok(store)));
        assert_eq!(app.model.phase, LoadPhase::Ready);
        assert_eq!(app.model.position_text(), "Lead 1 of 2");
    }

    #[test]
    fn test_load_failure_shows_error_view() {
        let mut app = new_app();
        handle_service_event(&mut app, ServiceEvent::Loaded(Err(LoadError::Empty)));
        assert_eq!(
            app.model.phase,
            LoadPhase::Failed("No leads found in the source files.".to_string())
        );
        assert_eq!(app.model.position_text(), "Error");
    }

    #[test]
    fn test_superseded_copy_result_is_ignored() {
        let mut app = new_app();
        let now = Instant::now();
        let first = app.model.ui.begin_copy("title", now);
        let _second = app.model.ui.begin_copy("title", now);

        handle_service_event(
            &mut app,
            ServiceEvent::CopyFinished {
                control: "title",
                request_id: first,
                result: Err("denied".to_string()),
            },
        );
        assert_eq!(
            app.model.ui.copy_status("title"),
            Some(leadview::logic::feedback::CopyStatus::Pending)
        );
    }
}
