//! Subtask list operations.
//!
//! Subtasks are a flat, ordered list where `level` encodes nesting. A subtask
//! may sit at most one level deeper than the entry above it.

use crate::constants::MAX_SUBTASK_LEVEL;
use crate::types::{SubItem, SubItemId};
use serde::Serialize;

/// Completion summary for a card's subtasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u8,
}

/// Insert a new subtask right after `after` (or at the end when `after` is
/// `None` or out of range). Returns the new subtask's id.
pub fn insert_after(
    subtasks: &mut Vec<SubItem>,
    after: Option<usize>,
    level: u8,
    text: String,
) -> SubItemId {
    let at = match after {
        Some(index) if index < subtasks.len() => index + 1,
        _ => subtasks.len(),
    };
    let ceiling = if at == 0 {
        0
    } else {
        subtasks[at - 1].level.saturating_add(1)
    };
    let subtask = SubItem::new(text, level.min(ceiling).min(MAX_SUBTASK_LEVEL));
    let id = subtask.id.clone();
    subtasks.insert(at, subtask);
    id
}

pub fn position_of(subtasks: &[SubItem], id: &str) -> Option<usize> {
    subtasks.iter().position(|s| s.id == id)
}

/// Remove a subtask. Returns false if it did not exist.
pub fn remove(subtasks: &mut Vec<SubItem>, id: &str) -> bool {
    let before = subtasks.len();
    subtasks.retain(|s| s.id != id);
    subtasks.len() != before
}

/// Nest a subtask one level deeper. The first entry can't be indented, and an
/// entry can't end up more than one level below its predecessor: an entry
/// already deeper than the one above it is refused, even if it sits only one
/// level below.
pub fn indent(subtasks: &mut [SubItem], id: &str) -> bool {
    let Some(index) = position_of(subtasks, id) else {
        return false;
    };
    if index == 0 {
        return false;
    }
    let previous = subtasks[index - 1].level;
    let current = &mut subtasks[index];
    if current.level > previous || current.level >= MAX_SUBTASK_LEVEL {
        return false;
    }
    current.level += 1;
    true
}

/// Move a subtask one level up; no-op at level 0.
pub fn outdent(subtasks: &mut [SubItem], id: &str) -> bool {
    match subtasks.iter_mut().find(|s| s.id == id) {
        Some(subtask) if subtask.level > 0 => {
            subtask.level -= 1;
            true
        }
        _ => false,
    }
}

pub fn progress(subtasks: &[SubItem]) -> Progress {
    let total = subtasks.len();
    if total == 0 {
        return Progress::default();
    }
    let completed = subtasks.iter().filter(|s| s.completed).count();
    let percentage = ((completed as f64 / total as f64) * 100.0).round() as u8;
    Progress {
        completed,
        total,
        percentage,
    }
}
