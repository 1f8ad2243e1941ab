//! User-tunable settings.
//!
//! Stored as `settings.json` under `<config dir>/stickyboard`. Every field has
//! a default, so a partial or older file still loads. `Settings::load()`
//! never fails: a missing or broken file yields the defaults.

use crate::board::BoardLimits;
use crate::constants::{
    DEFAULT_STORAGE_KEY, DRAG_THRESHOLD_PX, MAX_ITEMS, MAX_TEXT_LEN, SAVE_DEBOUNCE_MS,
};
use crate::types::Tool;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the board blob is stored under
    pub storage_key: String,
    pub save_debounce_ms: u64,
    /// Pointer travel (per axis) that turns a click into a drag
    pub drag_threshold_px: f64,
    pub max_items: usize,
    pub max_text_len: usize,
    pub default_tool: Tool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            save_debounce_ms: SAVE_DEBOUNCE_MS,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            max_items: MAX_ITEMS,
            max_text_len: MAX_TEXT_LEN,
            default_tool: Tool::default(),
        }
    }
}

/// `<config dir>/stickyboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stickyboard").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Replace values that would break the board with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.storage_key.trim().is_empty() {
            self.storage_key = defaults.storage_key;
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            self.drag_threshold_px = defaults.drag_threshold_px;
        }
        if self.max_items == 0 {
            self.max_items = defaults.max_items;
        }
        if self.max_text_len == 0 {
            self.max_text_len = defaults.max_text_len;
        }
        self
    }

    pub fn limits(&self) -> BoardLimits {
        BoardLimits {
            max_items: self.max_items,
            max_text_len: self.max_text_len,
        }
    }

    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}
