use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, can_copy: bool, can_open: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![Span::raw(" ")];

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("h/l", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Field  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Field  "),
        ]);
    }

    if can_copy {
        hotkey_spans.extend(vec![
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::raw(":Copy  "),
        ]);
    }

    if can_open {
        hotkey_spans.extend(vec![
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(":Open link  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend line
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, can_copy: bool, can_open: bool) {
    let spans = build_hotkey_spans(vim_mode, can_copy, can_open);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
