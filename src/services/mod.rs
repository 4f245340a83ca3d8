//! External Services
//!
//! This module contains services that interact with external systems:
//! - loader: Fetches and merges the lead source files
//! - clipboard: Writes copied values to the system clipboard
//! - launcher: Opens links with an external command

pub mod clipboard;
pub mod launcher;
pub mod loader;

// Re-export commonly used types for convenience
pub use clipboard::{Clipboard, CommandClipboard};
pub use loader::{DataSource, LoadError, Location};
