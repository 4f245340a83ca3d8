//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - card: Builds the per-field view of a record (placeholders, links, copy payloads)
//! - catalog: Static display field catalog
//! - errors: User-facing error formatting
//! - feedback: Copy feedback, toast and animation timing
//! - navigation: Cursor movement and navigation control state
//! - platform: Default external commands per platform

pub mod card;
pub mod catalog;
pub mod errors;
pub mod feedback;
pub mod navigation;
pub mod platform;
