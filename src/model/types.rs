//! Shared model types

/// Where the startup load stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Sources are still being fetched
    Loading,
    /// Records are available in the store
    Ready,
    /// Loading failed; the message is shown in the error view
    Failed(String),
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}
