//! Persisted blob format and tolerant decoding.
//!
//! Writing is strict (`BoardSnapshot` serializes as-is). Reading is lenient:
//! the blob is parsed as a JSON value first and each card is validated on
//! its own, so one corrupt card costs only that card.

use super::error::{StorageError, StorageResult};
use crate::constants::{MAX_COORDINATE, SCHEMA_VERSION};
use crate::types::{Item, ItemId, Point, SubItem};
use crate::validation::{clamp_level, is_valid_id, normalize_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Everything that survives a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub version: u32,
    pub items: Vec<Item>,
    pub selected_ids: Vec<ItemId>,
    pub focused_id: Option<ItemId>,
    /// Unix time in milliseconds, stamped at write time
    pub saved_at_ms: u64,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), None)
    }
}

impl BoardSnapshot {
    pub fn new(items: Vec<Item>, selected_ids: Vec<ItemId>, focused_id: Option<ItemId>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            items,
            selected_ids,
            focused_id,
            saved_at_ms: 0,
        }
    }

    /// Serialize with a fresh `saved_at_ms` stamp.
    pub fn encode(&self) -> StorageResult<String> {
        let mut stamped = self.clone();
        stamped.saved_at_ms = now_ms();
        Ok(serde_json::to_string(&stamped)?)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Result of decoding a stored blob.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decoded {
    pub snapshot: BoardSnapshot,
    /// Cards discarded because they were malformed, duplicated or over the limit
    pub dropped: usize,
    /// The blob carried a different (or no) schema version
    pub migrated: bool,
}

/// Lenient card shape: positions may be fractional, most fields optional.
#[derive(Deserialize)]
struct StoredItem {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    completed: bool,
    position: Point,
    #[serde(default)]
    subtasks: Vec<Value>,
}

#[derive(Deserialize)]
struct StoredSubItem {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    level: i64,
}

/// Decode a stored blob. Fails only if the blob is not a JSON object;
/// malformed cards are dropped and counted instead.
pub fn decode(raw: &str, max_items: usize, max_text_len: usize) -> StorageResult<Decoded> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = value else {
        return Err(StorageError::InvalidFormat(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    let version = map.get("version").and_then(Value::as_u64);
    let migrated = version != Some(SCHEMA_VERSION as u64);
    if migrated {
        info!(
            from = ?version,
            to = SCHEMA_VERSION,
            "Migrating stored board; selection and focus reset"
        );
    }

    let raw_items: &[Value] = match map.get("items") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            warn!("Stored `items` is not an array; starting empty");
            &[]
        }
        None => &[],
    };

    let mut dropped = 0;
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(raw_items.len().min(max_items));
    for raw_item in raw_items {
        match decode_item(raw_item, max_text_len) {
            Some(item) if items.len() < max_items && seen.insert(item.id.clone()) => {
                items.push(item)
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, kept = items.len(), "Dropped malformed stored items");
    }

    let (selected_ids, focused_id) = if migrated {
        (Vec::new(), None)
    } else {
        let selected = map
            .get("selected_ids")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .filter(|id| seen.contains(*id))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let focused = map
            .get("focused_id")
            .and_then(Value::as_str)
            .filter(|id| seen.contains(*id))
            .map(str::to_string);
        (selected, focused)
    };

    Ok(Decoded {
        snapshot: BoardSnapshot {
            version: SCHEMA_VERSION,
            items,
            selected_ids,
            focused_id,
            saved_at_ms: map.get("saved_at_ms").and_then(Value::as_u64).unwrap_or(0),
        },
        dropped,
        migrated,
    })
}

fn decode_item(value: &Value, max_text_len: usize) -> Option<Item> {
    let stored = StoredItem::deserialize(value).ok()?;
    let in_range = |v: f64| v.is_finite() && v.abs() <= MAX_COORDINATE;
    if !is_valid_id(&stored.id) || !in_range(stored.position.x) || !in_range(stored.position.y) {
        return None;
    }
    let subtasks = stored
        .subtasks
        .iter()
        .filter_map(|raw| StoredSubItem::deserialize(raw).ok())
        .filter(|s| is_valid_id(&s.id))
        .map(|s| SubItem {
            id: s.id,
            text: normalize_text(&s.text, max_text_len),
            completed: s.completed,
            level: clamp_level(s.level),
        })
        .collect();
    Some(Item {
        id: stored.id,
        text: normalize_text(&stored.text, max_text_len),
        completed: stored.completed,
        position: stored.position.round(),
        subtasks,
    })
}
