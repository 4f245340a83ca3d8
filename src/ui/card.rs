use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout;
use crate::logic::card::{CardView, FieldView};
use crate::logic::feedback::{copy_control_label, CopyStatus};
use crate::model::UiModel;

fn copy_control_style(status: Option<CopyStatus>) -> Style {
    match status {
        Some(CopyStatus::Copied) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(CopyStatus::Failed) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None | Some(CopyStatus::Pending) => Style::default().fg(Color::Cyan),
    }
}

fn value_style(field: &FieldView) -> Style {
    if !field.available {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else if field.is_title {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if field.link.is_some() {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    }
}

/// Lines for one field: label (with copy control), value, spacer.
/// Extracted for testability.
pub(crate) fn field_lines(
    field: &FieldView,
    focused: bool,
    status: Option<CopyStatus>,
) -> Vec<Line<'static>> {
    let (marker, label_style) = if focused {
        (
            "▸ ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
    };

    let mut header = vec![
        Span::styled(marker, label_style),
        Span::styled(field.label, label_style),
    ];
    if field.copy.is_some() {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!("[{}]", copy_control_label(status)),
            copy_control_style(status),
        ));
    }

    vec![
        Line::from(header),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(field.text.clone(), value_style(field)),
        ]),
        Line::default(),
    ]
}

fn group_lines(fields: &[&FieldView], focused: Option<&str>, ui: &UiModel) -> Vec<Line<'static>> {
    fields
        .iter()
        .flat_map(|field| {
            field_lines(
                field,
                focused == Some(field.source),
                ui.copy_status(field.source),
            )
        })
        .collect()
}

/// Render the lead card: main fields first, then the grid block
pub fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &CardView,
    focused: Option<&str>,
    ui: &UiModel,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lead Viewer ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (main_height, grid_height) = layout::card_heights(card.main.len(), card.grid.len());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(main_height),
            Constraint::Length(grid_height),
            Constraint::Min(0),
        ])
        .split(inner);

    let main: Vec<&FieldView> = card.main.iter().collect();
    let main_paragraph =
        Paragraph::new(group_lines(&main, focused, ui)).wrap(Wrap { trim: false });
    f.render_widget(main_paragraph, chunks[0]);

    if card.grid.is_empty() {
        return;
    }

    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(Style::default().fg(Color::DarkGray));
    let grid_inner = grid_block.inner(chunks[1]);
    f.render_widget(grid_block, chunks[1]);

    // Row-major: field i goes to column i % GRID_COLUMNS
    for (column, column_area) in layout::grid_columns(grid_inner).into_iter().enumerate() {
        let fields: Vec<&FieldView> = card
            .grid
            .iter()
            .skip(column)
            .step_by(layout::GRID_COLUMNS)
            .collect();
        f.render_widget(Paragraph::new(group_lines(&fields, focused, ui)), column_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::card::build_card;
    use crate::model::LeadRecord;
    use serde_json::json;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn phone_field() -> FieldView {
        let record = LeadRecord::from_value(json!({ "phone": "+1 555-0100" }));
        build_card(&record)
            .main
            .into_iter()
            .find(|f| f.source == "phone")
            .unwrap()
    }

    #[test]
    fn test_copy_control_states() {
        let field = phone_field();
        let idle = field_lines(&field, false, None);
        assert_eq!(line_text(&idle[0]), "  Phone Number  [Copy]");
        assert_eq!(line_text(&idle[1]), "  +1 555-0100");

        let copied = field_lines(&field, false, Some(CopyStatus::Copied));
        assert_eq!(line_text(&copied[0]), "  Phone Number  [✓ Copied!]");

        let failed = field_lines(&field, false, Some(CopyStatus::Failed));
        assert_eq!(line_text(&failed[0]), "  Phone Number  [Failed]");
    }

    #[test]
    fn test_missing_field_has_no_copy_control() {
        let card = build_card(&LeadRecord::default());
        let phone = card.main.iter().find(|f| f.source == "phone").unwrap();
        let lines = field_lines(phone, true, None);
        assert_eq!(line_text(&lines[0]), "▸ Phone Number");
        assert_eq!(line_text(&lines[1]), "  Not available");
    }

    #[test]
    fn test_link_value_is_underlined() {
        let record = LeadRecord::from_value(json!({ "website": "https://a.example" }));
        let card = build_card(&record);
        let website = card.main.iter().find(|f| f.source == "website").unwrap();
        let lines = field_lines(website, false, None);
        assert!(lines[1].spans[1]
            .style
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_title_value_is_bold() {
        let record = LeadRecord::from_value(json!({ "title": "Acme" }));
        let card = build_card(&record);
        let lines = field_lines(&card.main[0], false, None);
        assert!(lines[1].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
