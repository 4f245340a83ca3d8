//! Card view model
//!
//! Turns the current record into per-field view data: display text, link
//! target and copy payload. Drawing happens in `ui::card`.

use super::catalog::{DisplayField, DISPLAY_FIELDS};
use crate::model::record::LeadRecord;

/// One rendered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    /// Identity of the field's copy control
    pub source: &'static str,
    /// Value text, or the "Not available" placeholder
    pub text: String,
    pub available: bool,
    pub is_title: bool,
    /// Link target; only set for available link fields
    pub link: Option<String>,
    /// Literal text handed to the clipboard; only set for available copyable fields
    pub copy: Option<String>,
}

/// A record split into its main and grid groups, each in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardView {
    pub main: Vec<FieldView>,
    pub grid: Vec<FieldView>,
}

pub fn build_field(field: &DisplayField, record: &LeadRecord) -> FieldView {
    let value = record.field(field.source);
    let available = value.is_available();
    let text = value.display().to_string();

    FieldView {
        label: field.label,
        source: field.source,
        link: (field.is_link && available).then(|| text.clone()),
        copy: (field.copyable && available).then(|| text.clone()),
        text,
        available,
        is_title: field.is_title,
    }
}

/// Build the card for a record using the standard catalog
pub fn build_card(record: &LeadRecord) -> CardView {
    build_card_with(DISPLAY_FIELDS, record)
}

pub fn build_card_with(fields: &[DisplayField], record: &LeadRecord) -> CardView {
    let mut card = CardView::default();
    for field in fields {
        let view = build_field(field, record);
        if field.is_grid {
            card.grid.push(view);
        } else {
            card.main.push(view);
        }
    }
    card
}
