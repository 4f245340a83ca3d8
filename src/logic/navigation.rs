//! Navigation logic
//!
//! Pure functions for moving the record cursor and deriving the state of the
//! previous/next controls. Movement is clamped: there is no wraparound.

/// Direction of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Calculate the index after one step, or `None` if the step would leave
/// `[0, len - 1]`
///
/// # Examples
/// ```
/// use leadview::logic::navigation::{step_index, Direction};
///
/// assert_eq!(step_index(0, 3, Direction::Next), Some(1));
/// assert_eq!(step_index(2, 3, Direction::Next), None);
/// assert_eq!(step_index(0, 3, Direction::Prev), None);
/// assert_eq!(step_index(0, 0, Direction::Next), None);
/// ```
pub fn step_index(index: usize, len: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next if index + 1 < len => Some(index + 1),
        Direction::Prev if index > 0 && index < len => Some(index - 1),
        _ => None,
    }
}

/// Position indicator text, e.g. "Lead 3 of 12"
pub fn position_text(index: usize, len: usize) -> String {
    format!("Lead {} of {}", index + 1, len)
}

/// State of the previous/next controls and the position indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub position: String,
}

impl NavControls {
    pub fn for_position(index: usize, len: usize) -> Self {
        Self {
            prev_enabled: index > 0,
            next_enabled: index + 1 < len,
            position: position_text(index, len),
        }
    }
}

/// Move field focus among `count` actionable fields, clamped at both ends
pub fn step_focus(focus: usize, count: usize, direction: Direction) -> usize {
    if count == 0 {
        return 0;
    }
    match direction {
        Direction::Next => (focus + 1).min(count - 1),
        Direction::Prev => focus.saturating_sub(1).min(count - 1),
    }
}
