use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Card, loading view or error view
    pub body_area: Rect,
    /// Previous/next controls and position indicator
    pub controls_area: Rect,
    /// Hotkey legend (one line)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Card
            Constraint::Length(3), // Controls (top border, text, bottom border)
            Constraint::Length(1), // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        body_area: chunks[0],
        controls_area: chunks[1],
        legend_area: chunks[2],
    }
}

/// Columns in the grid group
pub const GRID_COLUMNS: usize = 2;

/// Rows each field takes: label, value, spacer
pub const FIELD_HEIGHT: u16 = 3;

/// Heights of the main group and the bordered grid group
pub fn card_heights(main_fields: usize, grid_fields: usize) -> (u16, u16) {
    let main_height = main_fields as u16 * FIELD_HEIGHT;
    let grid_height = if grid_fields == 0 {
        0
    } else {
        let rows = grid_fields.div_ceil(GRID_COLUMNS) as u16;
        rows * FIELD_HEIGHT + 2
    };
    (main_height, grid_height)
}

/// Split the grid block's inner area into equal columns
pub fn grid_columns(inner: Rect) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner)
        .to_vec()
}
