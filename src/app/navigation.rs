//! Record navigation and field focus

use std::time::Instant;

use leadview::logic::navigation::Direction;

use crate::App;

impl App {
    /// Step to the previous/next record. At a boundary nothing changes and
    /// the card is not re-animated.
    pub(crate) fn navigate(&mut self, direction: Direction) {
        if self.model.navigate(direction, Instant::now()) {
            if let Some(store) = &self.model.store {
                tracing::debug!(index = store.index(), len = store.len(), "navigated");
            }
        }
    }

    pub(crate) fn move_field_focus(&mut self, direction: Direction) {
        self.model.move_field_focus(direction);
    }
}
