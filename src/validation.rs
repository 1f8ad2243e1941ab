//! Input normalization shared by the store and the loader.

use crate::constants::{MAX_ID_LEN, MAX_SUBTASK_LEVEL};

/// Normalize user-entered card text: drop control characters (newlines and
/// tabs survive), trim, and cap at `max_len` characters.
pub fn normalize_text(text: &str, max_len: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    let trimmed = cleaned.trim();
    match trimmed.char_indices().nth(max_len) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Accepts UUIDs and the older base-36 timestamp ids alike.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn clamp_level(level: i64) -> u8 {
    level.clamp(0, MAX_SUBTASK_LEVEL as i64) as u8
}
