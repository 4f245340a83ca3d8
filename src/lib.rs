//! Lead Viewer Library
//!
//! Exposes modules for testing

pub mod config;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod ui;
