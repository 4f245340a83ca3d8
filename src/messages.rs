//! Messages from background services to the UI loop
//!
//! Background tasks (the startup load, clipboard writes) never touch the
//! model directly. They send a `ServiceEvent` over an unbounded channel and
//! the UI loop applies it between frames.

use crate::model::RecordStore;
use crate::services::loader::LoadError;

#[derive(Debug)]
pub enum ServiceEvent {
    /// Startup load finished
    Loaded(Result<RecordStore, LoadError>),

    /// A clipboard write finished
    CopyFinished {
        /// Source name of the field whose control started the copy
        control: &'static str,
        request_id: u64,
        /// Error text on failure
        result: Result<(), String>,
    },
}
