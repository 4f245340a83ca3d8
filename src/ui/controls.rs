use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::navigation::NavControls;

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Previous/next control spans (extracted for testability)
pub(crate) fn control_spans(controls: Option<&NavControls>) -> (Span<'static>, Span<'static>) {
    let (prev_enabled, next_enabled) = controls
        .map(|c| (c.prev_enabled, c.next_enabled))
        .unwrap_or((false, false));
    (
        Span::styled("◀ Prev", control_style(prev_enabled)),
        Span::styled("Next ▶", control_style(next_enabled)),
    )
}

/// Render the navigation bar: previous control, position indicator, next control
pub fn render_controls(f: &mut Frame, area: Rect, controls: Option<&NavControls>, position: &str) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(10),
        ])
        .split(inner);

    let (prev, next) = control_spans(controls);
    f.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), prev])), columns[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            position.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        columns[1],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![next, Span::raw(" ")])).alignment(Alignment::Right),
        columns[2],
    );
}
