//! Layer data structure.

use crate::constants::{KEY_COUNT, NONE_GLYPH};

/// A single keymap layer: a full assignment of display tokens to all
/// physical key positions.
///
/// # Invariant
///
/// After [`Layer::pad_to_key_count`] the `keys` vec always holds exactly
/// [`KEY_COUNT`] entries (36 main-grid keys + 8 thumb keys). The diagram
/// renderer indexes into the vec on that assumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Source block name (e.g., "`default_osx_layer`")
    pub name: String,
    /// Human-readable label from the block's `label` property
    pub label: String,
    /// Translated display tokens, one per key position
    pub keys: Vec<String>,
}

impl Layer {
    /// Creates a new Layer with the given block name, label, and translated keys.
    pub fn new(name: impl Into<String>, label: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            keys,
        }
    }

    /// Pads the key list with the `✗` placeholder up to the full key count.
    ///
    /// Lists already at (or beyond) the full count are left untouched.
    pub fn pad_to_key_count(&mut self) {
        while self.keys.len() < KEY_COUNT {
            self.keys.push(NONE_GLYPH.to_string());
        }
    }

    /// Gets the display token at a physical key position, if present.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.keys.get(position).map(String::as_str)
    }
}
