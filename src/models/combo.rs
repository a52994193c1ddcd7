//! Combo data structure.

use crate::models::Layer;

/// A simultaneous-press trigger over several key positions producing a
/// single output, independent of the active layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    /// Combo name from the source block (without the `combo_` prefix)
    pub name: String,
    /// Physical key positions that trigger the combo
    pub positions: Vec<usize>,
    /// Translated display token for the combo output
    pub output: String,
    /// Human-readable trigger key names (e.g., "Q + W")
    pub keys: String,
}

impl Combo {
    /// Creates a new Combo, deriving the trigger key names from the
    /// default layer's translated tokens.
    ///
    /// For each position, the default layer's display token is used; a
    /// homerow-mod compound (`CT+A`) shows only its base key. Positions
    /// outside the layer fall back to `posN`. When no default layer is
    /// available at all, every position falls back to `posN`.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<usize>,
        output: impl Into<String>,
        default_layer: Option<&Layer>,
    ) -> Self {
        let keys = describe_positions(&positions, default_layer);
        Self {
            name: name.into(),
            positions,
            output: output.into(),
            keys,
        }
    }
}

/// Maps combo trigger positions to display key names joined with " + ".
fn describe_positions(positions: &[usize], default_layer: Option<&Layer>) -> String {
    positions
        .iter()
        .map(|&pos| {
            default_layer
                .and_then(|layer| layer.key_at(pos))
                .map_or_else(
                    || format!("pos{pos}"),
                    |key| {
                        // Homerow mods show only the base key
                        key.rsplit('+').next().unwrap_or(key).to_string()
                    },
                )
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
