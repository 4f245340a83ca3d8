//! Keyboard Input Handler
//!
//! Maps key presses to viewer actions. Bindings stay active for the whole
//! session; after a failed load, only quitting does anything.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use leadview::logic::navigation::Direction;

use crate::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Navigate(Direction),
    Focus(Direction),
    Copy,
    OpenLink,
    Quit,
}

/// Translate a key event into an action (extracted for testability)
pub(crate) fn key_action(key: KeyEvent, vim_mode: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('p') => Some(Action::Navigate(Direction::Prev)),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::Navigate(Direction::Next)),
        KeyCode::Up => Some(Action::Focus(Direction::Prev)),
        KeyCode::Down => Some(Action::Focus(Direction::Next)),
        KeyCode::Char('h') if vim_mode => Some(Action::Navigate(Direction::Prev)),
        KeyCode::Char('l') if vim_mode => Some(Action::Navigate(Direction::Next)),
        KeyCode::Char('k') if vim_mode => Some(Action::Focus(Direction::Prev)),
        KeyCode::Char('j') if vim_mode => Some(Action::Focus(Direction::Next)),
        KeyCode::Char('c') | KeyCode::Enter => Some(Action::Copy),
        KeyCode::Char('o') => Some(Action::OpenLink),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = key_action(key, app.model.ui.vim_mode) else {
        return;
    };

    match action {
        Action::Navigate(direction) => app.navigate(direction),
        Action::Focus(direction) => app.move_field_focus(direction),
        Action::Copy => app.copy_focused_field(),
        Action::OpenLink => app.open_focused_link(),
        Action::Quit => app.model.ui.should_quit = true,
    }
}
