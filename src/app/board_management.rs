//! Card and subtask editing. Every call goes through `with_board`, so a
//! successful change schedules a debounced save.

use super::Stickyboard;
use crate::board::{BoardResult, EditOutcome};
use crate::subtasks::Progress;
use crate::types::{Item, ItemId, Point, SubItemId};
use std::time::Instant;

impl Stickyboard {
    /// Create a card at a canvas position, as the Create tool does on click.
    pub fn create_item(&mut self, at: Point, now: Instant) -> BoardResult<ItemId> {
        self.with_board(now, |board| board.create_item(at))
    }

    pub fn edit_text(&mut self, id: &str, text: &str, now: Instant) -> BoardResult<()> {
        self.with_board(now, |board| board.update_text(id, text))
    }

    /// Leave edit mode. Empty text deletes the card.
    pub fn finish_editing(&mut self, id: &str, text: &str, now: Instant) -> BoardResult<EditOutcome> {
        self.with_board(now, |board| board.finish_editing(id, text))
    }

    pub fn focus_item(&mut self, id: &str, now: Instant) -> BoardResult<()> {
        self.with_board(now, |board| board.focus(id))
    }

    pub fn toggle_completed(&mut self, id: &str, now: Instant) -> BoardResult<bool> {
        self.with_board(now, |board| board.toggle_completed(id))
    }

    pub fn delete_item(&mut self, id: &str, now: Instant) -> BoardResult<Item> {
        self.with_board(now, |board| board.delete_item(id))
    }

    pub fn select_items(&mut self, ids: &[ItemId], now: Instant) {
        self.with_board(now, |board| board.select_multiple(ids));
    }

    pub fn clear_selection(&mut self, now: Instant) {
        self.with_board(now, |board| board.clear_selection());
    }

    // ==================== Subtasks ====================

    pub fn add_subtask(
        &mut self,
        id: &str,
        after: Option<usize>,
        level: u8,
        text: &str,
        now: Instant,
    ) -> BoardResult<SubItemId> {
        self.with_board(now, |board| board.add_subtask(id, after, level, text))
    }

    pub fn edit_subtask(&mut self, id: &str, subtask: &str, text: &str, now: Instant) -> BoardResult<()> {
        self.with_board(now, |board| board.update_subtask_text(id, subtask, text))
    }

    pub fn toggle_subtask(&mut self, id: &str, subtask: &str, now: Instant) -> BoardResult<bool> {
        self.with_board(now, |board| board.toggle_subtask(id, subtask))
    }

    pub fn remove_subtask(&mut self, id: &str, subtask: &str, now: Instant) -> BoardResult<()> {
        self.with_board(now, |board| board.remove_subtask(id, subtask))
    }

    pub fn indent_subtask(&mut self, id: &str, subtask: &str, now: Instant) -> BoardResult<bool> {
        self.with_board(now, |board| board.indent_subtask(id, subtask))
    }

    pub fn outdent_subtask(&mut self, id: &str, subtask: &str, now: Instant) -> BoardResult<bool> {
        self.with_board(now, |board| board.outdent_subtask(id, subtask))
    }

    pub fn progress(&self, id: &str) -> BoardResult<Progress> {
        self.canvas.board.progress(id)
    }
}
