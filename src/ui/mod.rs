// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (card, controls, legend)
// - render: Main orchestration function that coordinates all rendering
// - card: Renders the lead card (main fields + grid block, copy controls)
// - controls: Renders previous/next controls and the position indicator
// - states: Renders the loading and error views
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod card;
pub mod controls;
pub mod layout;
pub mod legend;
pub mod render;
pub mod states;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
