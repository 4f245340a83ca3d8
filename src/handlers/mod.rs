//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - services: Results from background services (load, clipboard)

pub mod keyboard;
pub mod services;

// Re-export for convenience
pub use keyboard::handle_key;
pub use services::handle_service_event;
