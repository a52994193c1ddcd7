//! Layer diagram renderer.
//!
//! Generates the fixed-geometry split-keyboard diagram for one layer
//! using Unicode box-drawing characters: two independently bordered
//! halves with 3 rows of 6 keys each, plus a 2×2 thumb cluster per half.
//! Cell content is width-normalized to 5 characters; longer tokens are
//! abbreviated by a per-shape heuristic before hard truncation.

use crate::constants::{KEY_COUNT, ROW_COUNT, ROW_WIDTH, THUMB_COUNT};
use crate::models::Layer;
use regex::Regex;
use std::fmt::Write as _;

/// Fixed cell content width in characters.
const CELL_WIDTH: usize = 5;

/// Renders a layer as a fenced split-keyboard diagram.
///
/// Assumes the layer holds exactly [`KEY_COUNT`] keys (the parser pads
/// short layers); any extra keys are ignored.
///
/// # Example
///
/// ```text
/// ╭───────────────────────────────────────────────╮    ╭─── ...
/// │                   LEFT HALF                   │    │    ...
/// ├───────┬───────┬───────┬───────┬───────┬───────┤    ├─── ...
/// │   ⇥   │   Q   │   W   │   E   │   R   │   T   │    │    ...
/// ```
#[must_use]
pub fn render_layer_diagram(layer: &Layer) -> String {
    debug_assert!(layer.keys.len() >= KEY_COUNT);

    let keys = &layer.keys;
    let rows: Vec<&[String]> = (0..ROW_COUNT)
        .map(|r| &keys[r * ROW_WIDTH..(r + 1) * ROW_WIDTH])
        .collect();
    let thumbs = &keys[ROW_COUNT * ROW_WIDTH..KEY_COUNT];
    let (left_thumbs, right_thumbs) = thumbs.split_at(THUMB_COUNT / 2);

    let mut out = String::new();
    out.push_str("```\n");
    out.push_str("╭───────────────────────────────────────────────╮    ╭───────────────────────────────────────────────╮\n");
    out.push_str("│                   LEFT HALF                   │    │                   RIGHT HALF                  │\n");
    out.push_str("├───────┬───────┬───────┬───────┬───────┬───────┤    ├───────┬───────┬───────┬───────┬───────┬───────┤\n");

    for (i, row) in rows.iter().enumerate() {
        let (left, right) = row.split_at(ROW_WIDTH / 2);
        let _ = writeln!(out, "│{}│    │{}│", format_cells(left), format_cells(right));
        if i + 1 < rows.len() {
            out.push_str("├───────┼───────┼───────┼───────┼───────┼───────┤    ├───────┼───────┼───────┼───────┼───────┼───────┤\n");
        }
    }

    out.push_str("╰───────┴───────┴───────┼───────┼───────┼───────╯    ╰───────┼───────┼───────┼───────┴───────┴───────╯\n");

    // The right half's displayed thumb order mirrors its storage order so
    // the diagram matches the physical thumb-key adjacency.
    let _ = writeln!(
        out,
        "                        │ {:^5} │ {:^5} │                        │ {:^5} │ {:^5} │",
        format_key(&left_thumbs[0]),
        format_key(&left_thumbs[1]),
        format_key(&right_thumbs[2]),
        format_key(&right_thumbs[3]),
    );
    out.push_str("                        ├───────┼───────┤                        ├───────┼───────┤\n");
    let _ = writeln!(
        out,
        "                        │ {:^5} │ {:^5} │                        │ {:^5} │ {:^5} │",
        format_key(&left_thumbs[2]),
        format_key(&left_thumbs[3]),
        format_key(&right_thumbs[0]),
        format_key(&right_thumbs[1]),
    );
    out.push_str("                        ╰───────┴───────╯                        ╰───────┴───────╯\n");
    out.push_str("```");

    out
}

/// Formats one half-row of 6 keys as centered, bordered cells.
fn format_cells(keys: &[String]) -> String {
    keys.iter()
        .map(|key| format!(" {:^5} ", format_key(key)))
        .collect::<Vec<_>>()
        .join("│")
}

/// Abbreviates a display token to fit the fixed cell width.
///
/// Tokens at or under the width pass through. Longer tokens are reduced
/// per shape:
/// - `LT(NAV,⏎)` → `N:⏎` (first letter of the layer)
/// - `MO(FW)` → `MO(F)` when it fits, else `M:F`
/// - `CT+C_BRI_DN` → `CT+C_` (keep the modifier, truncate the key)
///
/// Anything still too long is hard-truncated.
fn format_key(key: &str) -> String {
    if key.chars().count() <= CELL_WIDTH {
        return key.to_string();
    }

    if key.contains("LT(") {
        let lt_re = Regex::new(r"^LT\((\w+),(.+?)\)").expect("valid regex");
        if let Some(caps) = lt_re.captures(key) {
            let layer_abbr = caps[1].chars().next().unwrap_or('L');
            let result = format!("{}:{}", layer_abbr, &caps[2]);
            return truncate(&result, CELL_WIDTH);
        }
        return truncate(key, CELL_WIDTH);
    }

    if key.contains("MO(") {
        let mo_re = Regex::new(r"^MO\((\w+)\)").expect("valid regex");
        if let Some(caps) = mo_re.captures(key) {
            let layer = &caps[1];
            let short: String = layer.chars().take(2).collect();
            let result = format!("MO({short})");
            if result.chars().count() <= CELL_WIDTH {
                return result;
            }
            let initial = layer.chars().next().unwrap_or('?');
            return format!("M:{initial}");
        }
        return truncate(key, CELL_WIDTH);
    }

    if key.starts_with("CT+") || key.starts_with("AT+") || key.starts_with("GM+") {
        if let Some((modifier, key_part)) = key.split_once('+') {
            let remaining = CELL_WIDTH - modifier.chars().count() - 1;
            return format!("{}+{}", modifier, truncate(key_part, remaining));
        }
    }

    truncate(key, CELL_WIDTH)
}

/// Truncates a string to at most `max` characters.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NONE_GLYPH;

    fn test_layer(keys: Vec<&str>) -> Layer {
        let mut layer = Layer::new(
            "default_osx_layer",
            "OSX",
            keys.into_iter().map(String::from).collect(),
        );
        layer.pad_to_key_count();
        layer
    }

    #[test]
    fn test_format_key_short_passthrough() {
        assert_eq!(format_key("Q"), "Q");
        assert_eq!(format_key("⇥"), "⇥");
        assert_eq!(format_key("BTCLR"), "BTCLR");
    }

    #[test]
    fn test_format_key_layer_tap() {
        assert_eq!(format_key("LT(NAV,⏎)"), "N:⏎");
        assert_eq!(format_key("LT(NUM,␣)"), "N:␣");
    }

    #[test]
    fn test_format_key_momentary() {
        assert_eq!(format_key("MO(ADJ)"), "M:A");
        assert_eq!(format_key("MO(FW)"), "M:F");
        assert_eq!(format_key("MO(X)"), "MO(X)");
    }

    #[test]
    fn test_format_key_homerow_mod() {
        assert_eq!(format_key("CT+A"), "CT+A");
        assert_eq!(format_key("CT+C_BRI_DN"), "CT+C_");
        assert_eq!(format_key("GM+LOCK"), "GM+LO");
    }

    #[test]
    fn test_format_key_hard_truncation() {
        assert_eq!(format_key("VERYLONGKEY"), "VERYL");
    }

    #[test]
    fn test_diagram_is_fenced() {
        let diagram = render_layer_diagram(&test_layer(vec!["⇥", "Q", "W"]));

        assert!(diagram.starts_with("```\n"));
        assert!(diagram.ends_with("```"));
    }

    #[test]
    fn test_diagram_contains_keys_and_placeholder() {
        let diagram = render_layer_diagram(&test_layer(vec!["⇥", "Q", "W"]));

        assert!(diagram.contains(" Q "));
        assert!(diagram.contains(NONE_GLYPH));
    }

    #[test]
    fn test_diagram_line_widths_are_stable() {
        let diagram = render_layer_diagram(&test_layer(vec!["⇥", "Q", "LT(NAV,⏎)"]));

        let lines: Vec<&str> = diagram
            .lines()
            .filter(|l| l.starts_with('│') || l.starts_with('├') || l.starts_with('╭'))
            .collect();
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();

        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_thumb_cluster_mirroring() {
        // 36 main keys then 8 thumbs labeled T0..T7
        let mut keys: Vec<String> = (0..36).map(|_| "✗".to_string()).collect();
        keys.extend((0..8).map(|i| format!("T{i}")));
        let layer = Layer::new("default_osx_layer", "OSX", keys);

        let diagram = render_layer_diagram(&layer);
        let thumb_rows: Vec<&str> = diagram
            .lines()
            .filter(|l| l.starts_with(' ') && l.trim_start().starts_with('│'))
            .collect();

        // First thumb row: left T0 T1, right mirrored T6 T7
        assert!(thumb_rows[0].contains("T0") && thumb_rows[0].contains("T1"));
        assert!(thumb_rows[0].contains("T6") && thumb_rows[0].contains("T7"));
        // Second thumb row: left T2 T3, right mirrored T4 T5
        assert!(thumb_rows[1].contains("T2") && thumb_rows[1].contains("T3"));
        assert!(thumb_rows[1].contains("T4") && thumb_rows[1].contains("T5"));
    }
}
