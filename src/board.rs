//! The item store.
//!
//! `Board` owns the committed card list, the selection and the pan offset.
//! Every mutation goes through a method here and bumps `revision`, which is
//! what the autosaver watches. Drag previews never touch this type; they
//! live in [`crate::input::PositionReconciler`] until commit.

use crate::constants::{MAX_ITEMS, MAX_TEXT_LEN};
use crate::persistence::BoardSnapshot;
use crate::selection::Selection;
use crate::subtasks::{self, Progress};
use crate::types::{Item, ItemId, Point, Position, SubItemId};
use crate::validation::normalize_text;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from store mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("unknown subtask {subtask} on item {item}")]
    UnknownSubtask { item: ItemId, subtask: SubItemId },

    #[error("too many items (max {max})")]
    TooManyItems { max: usize },

    #[error("position is not a finite coordinate")]
    InvalidPosition,
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Size limits applied by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLimits {
    pub max_items: usize,
    pub max_text_len: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

/// What finishing an edit did to the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    /// The text was empty after normalization, so the card was removed
    Deleted,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    items: Vec<Item>,
    selection: Selection,
    pan_offset: Point,
    limits: BoardLimits,
    revision: u64,
}

impl Board {
    pub fn new(limits: BoardLimits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    /// Rebuild a board from a (validated) snapshot.
    pub fn from_snapshot(snapshot: BoardSnapshot, limits: BoardLimits) -> Self {
        let mut board = Self::new(limits);
        board.items = snapshot.items;
        board.items.truncate(limits.max_items);
        board.selection.select_multiple(snapshot.selected_ids);
        if board.selection.is_empty() {
            if let Some(ref id) = snapshot.focused_id {
                board.selection.focus(id);
            }
        }
        let items = &board.items;
        board
            .selection
            .retain(|id| items.iter().any(|item| item.id == id));
        board
    }

    /// Capture the persistable part of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.items.clone(),
            self.selection.selected_ids(),
            self.selection.focused().map(str::to_string),
        )
    }

    // ==================== Queries ====================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_item(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index in paint order (later = on top).
    pub fn z_index(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Committed positions of `ids`; unknown ids are skipped.
    pub fn positions_of(&self, ids: &[ItemId]) -> HashMap<ItemId, Position> {
        ids.iter()
            .filter_map(|id| self.get_item(id).map(|item| (id.clone(), item.position)))
            .collect()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pan_offset(&self) -> Point {
        self.pan_offset
    }

    pub fn limits(&self) -> BoardLimits {
        self.limits
    }

    /// Monotonic counter bumped by every persisted-state mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn progress(&self, id: &str) -> BoardResult<Progress> {
        Ok(subtasks::progress(&self.item(id)?.subtasks))
    }

    // ==================== Cards ====================

    /// Create an empty card at `position` (rounded) and focus it.
    pub fn create_item(&mut self, position: Point) -> BoardResult<ItemId> {
        if !position.is_finite() {
            return Err(BoardError::InvalidPosition);
        }
        if self.items.len() >= self.limits.max_items {
            return Err(BoardError::TooManyItems {
                max: self.limits.max_items,
            });
        }
        let item = Item::new(position.round());
        let id = item.id.clone();
        info!(id = %id, x = item.position.x, y = item.position.y, "Created item");
        self.items.push(item);
        self.selection.focus(&id);
        self.touch();
        Ok(id)
    }

    pub fn update_text(&mut self, id: &str, text: &str) -> BoardResult<()> {
        let max = self.limits.max_text_len;
        self.item_mut(id)?.text = normalize_text(text, max);
        self.touch();
        Ok(())
    }

    /// Save edited text; an empty result deletes the card.
    pub fn finish_editing(&mut self, id: &str, text: &str) -> BoardResult<EditOutcome> {
        let normalized = normalize_text(text, self.limits.max_text_len);
        if normalized.is_empty() {
            self.delete_item(id)?;
            return Ok(EditOutcome::Deleted);
        }
        self.item_mut(id)?.text = normalized;
        self.selection.blur();
        self.touch();
        Ok(EditOutcome::Saved)
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> BoardResult<()> {
        self.item_mut(id)?.completed = completed;
        self.touch();
        Ok(())
    }

    pub fn toggle_completed(&mut self, id: &str) -> BoardResult<bool> {
        let item = self.item_mut(id)?;
        item.completed = !item.completed;
        let completed = item.completed;
        self.touch();
        Ok(completed)
    }

    pub fn delete_item(&mut self, id: &str) -> BoardResult<Item> {
        let index = self
            .z_index(id)
            .ok_or_else(|| BoardError::UnknownItem(id.to_string()))?;
        let item = self.items.remove(index);
        self.selection.remove(id);
        info!(id = %id, "Deleted item");
        self.touch();
        Ok(item)
    }

    /// Apply a batch of final positions in one step. Unknown ids are skipped.
    /// Returns the number of cards moved.
    pub fn commit_positions(&mut self, positions: &BTreeMap<ItemId, Position>) -> usize {
        let mut applied = 0;
        for item in self.items.iter_mut() {
            if let Some(position) = positions.get(&item.id) {
                item.position = *position;
                applied += 1;
            }
        }
        if applied != positions.len() {
            debug!(
                requested = positions.len(),
                applied, "Commit skipped items that no longer exist"
            );
        }
        if applied > 0 {
            self.touch();
        }
        applied
    }

    // ==================== Selection ====================

    /// Toggle selection of an existing card. Returns false for unknown ids.
    pub fn toggle_selection(&mut self, id: &str, multi: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selection.toggle(id, multi);
        self.touch();
        true
    }

    pub fn select_multiple(&mut self, ids: &[ItemId]) {
        let known: Vec<ItemId> = ids.iter().filter(|id| self.contains(id)).cloned().collect();
        self.selection.select_multiple(known);
        self.touch();
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.touch();
        }
    }

    pub fn focus(&mut self, id: &str) -> BoardResult<()> {
        if !self.contains(id) {
            return Err(BoardError::UnknownItem(id.to_string()));
        }
        self.selection.focus(id);
        self.touch();
        Ok(())
    }

    pub fn blur(&mut self) {
        if self.selection.focused().is_some() {
            self.selection.blur();
            self.touch();
        }
    }

    // ==================== Canvas ====================

    /// Shift the view. Not persisted, so it does not bump the revision.
    pub fn pan_by(&mut self, delta: Point) {
        if delta.is_finite() {
            self.pan_offset = self.pan_offset + delta;
        }
    }

    pub fn set_pan_offset(&mut self, offset: Point) {
        if offset.is_finite() {
            self.pan_offset = offset;
        }
    }

    // ==================== Subtasks ====================

    /// Insert a subtask after index `after` (append when `None`).
    pub fn add_subtask(
        &mut self,
        id: &str,
        after: Option<usize>,
        level: u8,
        text: &str,
    ) -> BoardResult<SubItemId> {
        let text = normalize_text(text, self.limits.max_text_len);
        let item = self.item_mut(id)?;
        let subtask_id = subtasks::insert_after(&mut item.subtasks, after, level, text);
        self.touch();
        Ok(subtask_id)
    }

    pub fn update_subtask_text(&mut self, id: &str, subtask: &str, text: &str) -> BoardResult<()> {
        let text = normalize_text(text, self.limits.max_text_len);
        self.subtask_mut(id, subtask)?.text = text;
        self.touch();
        Ok(())
    }

    pub fn toggle_subtask(&mut self, id: &str, subtask: &str) -> BoardResult<bool> {
        let entry = self.subtask_mut(id, subtask)?;
        entry.completed = !entry.completed;
        let completed = entry.completed;
        self.touch();
        Ok(completed)
    }

    pub fn remove_subtask(&mut self, id: &str, subtask: &str) -> BoardResult<()> {
        if !subtasks::remove(&mut self.item_mut(id)?.subtasks, subtask) {
            return Err(unknown_subtask(id, subtask));
        }
        self.touch();
        Ok(())
    }

    /// Returns whether the level changed.
    pub fn indent_subtask(&mut self, id: &str, subtask: &str) -> BoardResult<bool> {
        let item = self.item_mut(id)?;
        if item.subtask(subtask).is_none() {
            return Err(unknown_subtask(id, subtask));
        }
        let changed = subtasks::indent(&mut item.subtasks, subtask);
        if changed {
            self.touch();
        }
        Ok(changed)
    }

    /// Returns whether the level changed.
    pub fn outdent_subtask(&mut self, id: &str, subtask: &str) -> BoardResult<bool> {
        let item = self.item_mut(id)?;
        if item.subtask(subtask).is_none() {
            return Err(unknown_subtask(id, subtask));
        }
        let changed = subtasks::outdent(&mut item.subtasks, subtask);
        if changed {
            self.touch();
        }
        Ok(changed)
    }

    // ==================== Internals ====================

    fn item(&self, id: &str) -> BoardResult<&Item> {
        self.get_item(id)
            .ok_or_else(|| BoardError::UnknownItem(id.to_string()))
    }

    fn item_mut(&mut self, id: &str) -> BoardResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| BoardError::UnknownItem(id.to_string()))
    }

    fn subtask_mut(&mut self, id: &str, subtask: &str) -> BoardResult<&mut crate::types::SubItem> {
        self.item_mut(id)?
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask)
            .ok_or_else(|| unknown_subtask(id, subtask))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

fn unknown_subtask(item: &str, subtask: &str) -> BoardError {
    BoardError::UnknownSubtask {
        item: item.to_string(),
        subtask: subtask.to_string(),
    }
}
