//! Pure Application Model
//!
//! This module defines the state the viewer renders from. One `Model` owns
//! everything: the record store once loaded, the load phase and the UI
//! sub-model. It is handed by `&mut` to navigation and copy routines.
//!
//! - **record**: Lead records and the record store (records + cursor)
//! - **types**: Load phase
//! - **ui**: Focus, copy feedback, animation and toast state

pub mod record;
pub mod types;
pub mod ui;

use std::time::Instant;

pub use record::{FieldValue, LeadRecord, RecordStore, NOT_AVAILABLE};
pub use types::LoadPhase;
pub use ui::UiModel;

use crate::logic::card::{self, CardView};
use crate::logic::catalog::{self, DisplayField};
use crate::logic::navigation::{self, Direction, NavControls};

/// Root application model
#[derive(Clone, Debug)]
pub struct Model {
    /// Startup load state
    pub phase: LoadPhase,

    /// Merged records; `Some` once the load succeeded
    pub store: Option<RecordStore>,

    /// UI preferences and transient visual state
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            phase: LoadPhase::Loading,
            store: None,
            ui: UiModel::new(vim_mode),
        }
    }

    /// Install the loaded records and show the first one
    pub fn set_store(&mut self, store: RecordStore, now: Instant) {
        self.store = Some(store);
        self.phase = LoadPhase::Ready;
        self.ui.restart_card_animation(now);
    }

    /// Switch to the error view; no records are shown afterwards
    pub fn set_load_failed(&mut self, message: String) {
        self.store = None;
        self.phase = LoadPhase::Failed(message);
    }

    pub fn current_record(&self) -> Option<&LeadRecord> {
        self.store.as_ref().map(RecordStore::current)
    }

    /// Card view of the current record
    pub fn current_card(&self) -> Option<CardView> {
        self.current_record().map(card::build_card)
    }

    /// Move the cursor one step. A successful move restarts the card
    /// animation and resets every copy control; a move at a boundary changes
    /// nothing.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> bool {
        let Some(store) = self.store.as_mut() else {
            return false;
        };
        let moved = store.step(direction);
        if moved {
            self.ui.clear_copy_feedback();
            self.ui.restart_card_animation(now);
        }
        moved
    }

    pub fn nav_controls(&self) -> Option<NavControls> {
        self.store
            .as_ref()
            .map(|store| NavControls::for_position(store.index(), store.len()))
    }

    /// Text for the position indicator in every phase
    pub fn position_text(&self) -> String {
        match (&self.phase, &self.store) {
            (LoadPhase::Failed(_), _) => "Error".to_string(),
            (_, Some(store)) => navigation::position_text(store.index(), store.len()),
            _ => "Loading…".to_string(),
        }
    }

    /// The catalog field that currently has keyboard focus
    pub fn focused_field(&self) -> Option<&'static DisplayField> {
        catalog::actionable_fields().nth(self.ui.field_focus)
    }

    pub fn move_field_focus(&mut self, direction: Direction) {
        let count = catalog::actionable_fields().count();
        self.ui.field_focus = navigation::step_focus(self.ui.field_focus, count, direction);
    }
}
