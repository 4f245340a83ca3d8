//! Per-field actions: copy to clipboard, open link

use std::sync::Arc;
use std::time::Instant;

use leadview::logic::{card, errors};
use leadview::logic::card::FieldView;
use leadview::services::{clipboard, launcher};

use crate::App;

impl App {
    /// View of the focused field on the current record
    fn focused_field_view(&self) -> Option<FieldView> {
        let field = self.model.focused_field()?;
        let record = self.model.current_record()?;
        Some(card::build_field(field, record))
    }

    /// Copy the focused field's value. Missing values have no copy action.
    pub(crate) fn copy_focused_field(&mut self) {
        let Some(view) = self.focused_field_view() else {
            return;
        };
        let Some(text) = view.copy else {
            tracing::debug!(control = view.source, "nothing to copy");
            return;
        };

        let request_id = self.model.ui.begin_copy(view.source, Instant::now());
        clipboard::spawn_copy(
            Arc::clone(&self.clipboard),
            view.source,
            request_id,
            text,
            self.service_tx.clone(),
        );
    }

    /// Open the focused field's link, if it has one
    pub(crate) fn open_focused_link(&mut self) {
        let Some(url) = self.focused_field_view().and_then(|view| view.link) else {
            return;
        };

        match launcher::open_link(self.open_command.as_deref(), &url) {
            Ok(()) => self.model.ui.show_toast(format!("Opened: {}", url)),
            Err(e) => {
                tracing::error!(error = %errors::format_error_chain(&e), url = %url, "failed to open link");
                self.model
                    .ui
                    .show_toast(format!("Error: {}", errors::format_error_message(&e)));
            }
        }
    }
}
