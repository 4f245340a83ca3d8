//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in leadview::model)
//! - Services (clipboard, launcher)
//! - Logic (pure business logic in leadview::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod actions;
pub(crate) mod navigation;
