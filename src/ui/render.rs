use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    Frame,
};

use super::{card, controls, layout, legend, states, toast};
use crate::model::{LoadPhase, Model};

/// Main render function - orchestrates all UI rendering.
///
/// The whole screen is redrawn from the model every frame.
pub fn render(f: &mut Frame, model: &Model, now: Instant) {
    let layout_info = layout::calculate_layout(f.area());
    let focused = model.focused_field().map(|field| field.source);
    let mut can_copy = false;
    let mut can_open = false;

    match &model.phase {
        LoadPhase::Loading => states::render_loading(f, layout_info.body_area),
        LoadPhase::Failed(message) => states::render_error(f, layout_info.body_area, message),
        LoadPhase::Ready => {
            if let Some(card_view) = model.current_card() {
                if let Some(field) = card_view
                    .main
                    .iter()
                    .chain(card_view.grid.iter())
                    .find(|field| Some(field.source) == focused)
                {
                    can_copy = field.copy.is_some();
                    can_open = field.link.is_some();
                }

                card::render_card(f, layout_info.body_area, &card_view, focused, &model.ui);

                // Entrance animation: the card fades in from dim
                if model.ui.card_animating(now) {
                    f.buffer_mut().set_style(
                        layout_info.body_area,
                        Style::default().add_modifier(Modifier::DIM),
                    );
                }
            }
        }
    }

    controls::render_controls(
        f,
        layout_info.controls_area,
        model.nav_controls().as_ref(),
        &model.position_text(),
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        can_copy,
        can_open,
    );

    if let Some((message, _)) = &model.ui.toast_message {
        let area = f.area();
        toast::render_toast(f, area, message);
    }
}
