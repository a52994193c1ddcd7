//! ZMK keycode display database.
//!
//! This module provides the static lookup tables used to turn raw ZMK
//! binding keywords into short display glyphs: the key-symbol table, the
//! layer-code table, and the modifier abbreviations. The tables are
//! read-only after construction; build one [`KeycodeDb`] and pass it to
//! the translator and renderers.

pub mod display;

pub use display::Binding;

use std::collections::HashMap;

/// Keycode display database with O(1) symbol and layer-name lookup.
#[derive(Debug, Clone)]
pub struct KeycodeDb {
    /// Keycode keyword (or exact compound literal) to display glyph
    symbols: HashMap<&'static str, &'static str>,
    /// Layer code (number or `QX_*`/`QC_*` define) to layer abbreviation
    layers: HashMap<&'static str, &'static str>,
}

impl Default for KeycodeDb {
    fn default() -> Self {
        Self::new()
    }
}

impl KeycodeDb {
    /// Builds the database with the full Pepito symbol set.
    #[must_use]
    pub fn new() -> Self {
        let symbols: HashMap<&'static str, &'static str> = [
            ("TAB", "⇥"),
            ("ESC", "⎋"),
            ("SPACE", "␣"),
            ("RET", "⏎"),
            ("ENTER", "⏎"),
            ("DEL", "⌦"),
            ("BSPC", "⌫"),
            ("LSHFT", "⇧"),
            ("RSHFT", "⇧"),
            ("LEFT", "←"),
            ("RIGHT", "→"),
            ("UP", "↑"),
            ("DOWN", "↓"),
            ("HOME", "⤴"),
            ("END", "⤵"),
            ("PG_UP", "⇞"),
            ("PG_DN", "⇟"),
            ("CAPS", "⇪"),
            ("VOLUP", "🔊"),
            ("VOLDN", "🔉"),
            ("VOLMT", "🔇"),
            ("C_VOL_UP", "🔊"),
            ("C_VOL_DN", "🔉"),
            ("C_MUTE", "🔇"),
            ("C_BRI_UP", "BR+"),
            ("C_BRI_DN", "BR-"),
            // macOS shortcut compounds, both as defines and expanded forms
            ("OSX_SC", "OSX"),
            ("OSX_EP", "LNC"),
            ("OSX_FD", "FIND"),
            ("OSX_CD", "CLI"),
            ("OSX_BOL", "BOL"),
            ("OSX_EOL", "EOL"),
            ("LG(LS(N5))", "OSX"),
            ("LC(LG(SPACE))", "LNC"),
            ("LA(LC(SPACE))", "FIND"),
            ("LA(LG(FSLH))", "CLI"),
            ("LG(LEFT)", "BOL"),
            ("LG(RIGHT)", "EOL"),
            // Window management compounds
            ("LFT12", "LFT1"),
            ("LFT23", "LFT2"),
            ("RGT12", "RGT1"),
            ("RGT23", "RGT2"),
            ("LA(LC(H))", "LFT1"),
            ("LA(LC(LS(H)))", "LFT2"),
            ("LA(LC(U))", "RGT1"),
            ("LA(LC(LS(U)))", "RGT2"),
            ("FSCREEN", "FSCR"),
            ("LOCK_X", "LOCK"),
            ("LC(LG(Q))", "LOCK"),
            ("TRANS", "▽"),
            ("NONE", "✗"),
            ("MINUS", "-"),
            ("EQUAL", "="),
            ("LPAR", "("),
            ("RPAR", ")"),
            ("LBRC", "{"),
            ("RBRC", "}"),
            ("LBKT", "["),
            ("RBKT", "]"),
            ("SEMI", ";"),
            ("SQT", "'"),
            ("BSLH", "\\"),
            ("GRAV", "`"),
            ("COMMA", ","),
            ("DOT", "."),
            ("FSLH", "/"),
            ("N1", "1"),
            ("N2", "2"),
            ("N3", "3"),
            ("N4", "4"),
            ("N5", "5"),
            ("N6", "6"),
            ("N7", "7"),
            ("N8", "8"),
            ("N9", "9"),
            ("N0", "0"),
        ]
        .into_iter()
        .collect();

        let layers: HashMap<&'static str, &'static str> = [
            ("QX_M", "MAIN"),
            ("0", "MAIN"),
            ("QX_L", "NAV"),
            ("1", "NAV"),
            ("QX_R", "NUM"),
            ("2", "NUM"),
            ("QX_A", "ADJ"),
            ("3", "ADJ"),
            ("QC_F", "FW"),
            ("4", "FW"),
        ]
        .into_iter()
        .collect();

        Self { symbols, layers }
    }

    /// Looks up the display glyph for a keycode keyword.
    ///
    /// Unknown keycodes display verbatim.
    #[must_use]
    pub fn symbol<'a>(&self, keycode: &'a str) -> &'a str {
        self.symbols.get(keycode).copied().unwrap_or(keycode)
    }

    /// Resolves a layer code (number or define) to its abbreviation.
    ///
    /// Unknown codes display verbatim.
    #[must_use]
    pub fn layer_name<'a>(&self, layer_code: &'a str) -> &'a str {
        self.layers.get(layer_code).copied().unwrap_or(layer_code)
    }

    /// Abbreviates a ZMK modifier name for compact display.
    ///
    /// Strips the left/right qualifier and maps the full modifier name to
    /// a two-letter code: `LCTRL` → `CT`, `RALT` → `AT`, `LGUI` → `GM`.
    /// Unqualified or unknown modifiers display verbatim after stripping.
    #[must_use]
    pub fn modifier_abbrev(modifier: &str) -> String {
        let stripped = modifier
            .strip_prefix('L')
            .or_else(|| modifier.strip_prefix('R'))
            .unwrap_or(modifier);

        match stripped {
            "CTRL" => "CT".to_string(),
            "ALT" => "AT".to_string(),
            "GUI" => "GM".to_string(),
            other => other.to_string(),
        }
    }
}
