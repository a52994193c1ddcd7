//! ZMK keymap file parsing.
//!
//! Extracts layer and combo definitions from the devicetree-style keymap
//! source. Blocks are located with an explicit `ident {` scanner and
//! brace-depth matching rather than a single regex over the whole file,
//! so nested blocks and stray delimiters inside strings don't cause
//! silent mis-extraction. Blocks that don't carry the expected fields are
//! silently skipped; that tolerance is intentional.

use crate::constants::DEFAULT_LAYER_NAME;
use crate::keycode_db::{display, KeycodeDb};
use crate::models::{Combo, Layer};
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::path::Path;

/// Parsed keymap: layers in source order plus combo definitions.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// Layers in the order they appear in the keymap file
    pub layers: Vec<Layer>,
    /// Combo definitions in source order
    pub combos: Vec<Combo>,
}

impl Keymap {
    /// Finds a layer by its source block name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// A raw block found in the source: its name and brace-delimited body.
#[derive(Debug)]
struct Block<'a> {
    name: &'a str,
    body: &'a str,
}

/// Parses a keymap file into layers and combos.
///
/// # Errors
///
/// Fails if the file cannot be read, or if a combo block carries a
/// malformed key position (non-numeric positions are fatal). Layer or
/// combo blocks missing their expected fields are skipped, not errors.
pub fn parse_keymap(path: &Path, db: &KeycodeDb) -> Result<Keymap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    parse_keymap_str(&content, db)
        .with_context(|| format!("Failed to parse keymap file: {}", path.display()))
}

/// Parses keymap source text into layers and combos.
pub fn parse_keymap_str(content: &str, db: &KeycodeDb) -> Result<Keymap> {
    let macros = parse_macros(content);
    let blocks = scan_blocks(content);

    let label_re = Regex::new(r#"label\s*=\s*"([^"]*)""#).expect("valid regex");
    let bindings_re = Regex::new(r"bindings\s*=\s*<([^>]*)>").expect("valid regex");
    let positions_re = Regex::new(r"key-positions\s*=\s*<([^>]*)>").expect("valid regex");

    let mut keymap = Keymap::default();

    // Layers first; combos resolve their trigger names against the
    // default layer, which may appear later in the file.
    for block in &blocks {
        if !block.name.ends_with("_layer") {
            continue;
        }
        let (Some(label), Some(bindings)) = (
            label_re.captures(block.body).map(|c| c[1].trim().to_string()),
            bindings_re.captures(block.body).map(|c| c[1].to_string()),
        ) else {
            // Shape doesn't match, skip the block
            continue;
        };

        let expanded = expand_macros(&bindings, &macros);
        let keys: Vec<String> = split_bindings(&expanded)
            .iter()
            .map(|raw| display::translate(raw, db))
            .collect();

        let mut layer = Layer::new(block.name, label, keys);
        layer.pad_to_key_count();

        // A redefinition replaces the earlier block in place
        if let Some(existing) = keymap.layers.iter_mut().find(|l| l.name == block.name) {
            *existing = layer;
        } else {
            keymap.layers.push(layer);
        }
    }

    let default_layer = keymap.layer(DEFAULT_LAYER_NAME).cloned();
    for block in &blocks {
        let Some(name) = block.name.strip_prefix("combo_") else {
            continue;
        };
        let (Some(positions_raw), Some(binding)) = (
            positions_re.captures(block.body).map(|c| c[1].to_string()),
            bindings_re.captures(block.body).map(|c| c[1].trim().to_string()),
        ) else {
            continue;
        };

        let positions = positions_raw
            .split_whitespace()
            .map(|p| {
                p.parse::<usize>()
                    .with_context(|| format!("Invalid key position '{p}' in combo '{name}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        let output = display::translate(&binding, db);
        keymap
            .combos
            .push(Combo::new(name, positions, output, default_layer.as_ref()));
    }

    Ok(keymap)
}

/// Collects `#define NAME VALUE` macros in source order, stripping
/// trailing `//` comments. A redefinition updates the earlier entry in
/// place, keeping its original position.
fn parse_macros(content: &str) -> Vec<(String, String)> {
    let define_re = Regex::new(r"^#define\s+(\w+)\s+(.+)$").expect("valid regex");

    let mut macros: Vec<(String, String)> = Vec::new();
    for line in content.lines() {
        if let Some(caps) = define_re.captures(line.trim()) {
            let name = caps[1].to_string();
            let value = caps[2]
                .split("//")
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            if value.is_empty() {
                continue;
            }
            if let Some(existing) = macros.iter_mut().find(|(n, _)| *n == name) {
                existing.1 = value;
            } else {
                macros.push((name, value));
            }
        }
    }
    macros
}

/// Expands macro names (whole words only) inside a binding list.
///
/// Macros apply in definition order, so a define whose value names a
/// later define expands fully, while one naming an earlier define stays
/// unexpanded. Either way the result is the same on every run.
fn expand_macros(bindings: &str, macros: &[(String, String)]) -> String {
    let mut result = bindings.to_string();
    for (name, value) in macros {
        let word_re =
            Regex::new(&format!(r"\b{}\b", regex::escape(name))).expect("valid regex");
        result = word_re.replace_all(&result, NoExpand(value)).into_owned();
    }
    result
}

/// Scans the source for `ident {` blocks, matching the closing brace by
/// depth counting. Unbalanced blocks are dropped silently.
fn scan_blocks(content: &str) -> Vec<Block<'_>> {
    let open_re = Regex::new(r"([A-Za-z_]\w*)\s*\{").expect("valid regex");

    let mut blocks = Vec::new();
    for caps in open_re.captures_iter(content) {
        let (Some(name), Some(whole)) = (caps.get(1), caps.get(0)) else {
            continue;
        };
        let open = whole.end() - 1;

        if let Some(body) = matched_body(content, open) {
            blocks.push(Block {
                name: name.as_str(),
                body,
            });
        }
    }
    blocks
}

/// Returns the text between the brace at `open` and its matching close.
///
/// Braces inside double-quoted string literals don't count toward the
/// depth, so a label like `"{"` can't shift the matched close brace.
fn matched_body(content: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in content[open..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits a binding list on `&` delimiters, ignoring any `&` nested
/// inside an angle-bracket group.
fn split_bindings(bindings: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in bindings.chars() {
        match ch {
            '<' => {
                depth += 1;
                current.push(ch);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '&' if depth == 0 => {
                push_token(&mut tokens, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_token(&mut tokens, &current);

    tokens
}

/// Appends a whitespace-normalized token if it is non-empty.
fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        tokens.push(normalized);
    }
}
