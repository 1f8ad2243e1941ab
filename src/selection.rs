//! Selection and focus.
//!
//! A board has either a set of selected cards or a single focused card being
//! edited, never both. Every operation here keeps that exclusion.

use crate::types::ItemId;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<ItemId>,
    focused: Option<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `id`. With `multi` the set gains or loses `id`; without it the
    /// selection collapses to exactly `id`.
    pub fn toggle(&mut self, id: &str, multi: bool) {
        if multi {
            if !self.selected.remove(id) {
                self.selected.insert(id.to_string());
            }
        } else {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }
        if !self.selected.is_empty() {
            self.focused = None;
        }
    }

    pub fn select_multiple<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.selected = ids.into_iter().collect();
        if !self.selected.is_empty() {
            self.focused = None;
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Focus a single card for editing; drops any selection.
    pub fn focus(&mut self, id: &str) {
        self.selected.clear();
        self.focused = Some(id.to_string());
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Forget `id` everywhere (used when a card is deleted).
    pub fn remove(&mut self, id: &str) {
        self.selected.remove(id);
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
    }

    /// Keep only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.selected.retain(|id| keep(id));
        if let Some(ref id) = self.focused {
            if !keep(id) {
                self.focused = None;
            }
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected(&self) -> &BTreeSet<ItemId> {
        &self.selected
    }

    /// Selected ids in stable (sorted) order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}
