//! Binding classification and display rendering.
//!
//! A raw ZMK binding token (e.g., `&kp TAB`, `hm LCTRL A`, `lt 1 RET`) is
//! parsed once into a [`Binding`] variant, then rendered per variant
//! against the [`KeycodeDb`] tables. The `&` sigil is stripped before
//! classification, so sigiled and unsigiled forms are identical by
//! construction.
//!
//! Parsing never fails: anything that doesn't match a known shape becomes
//! [`Binding::Other`] and displays verbatim (display correctness over
//! strictness).

use super::KeycodeDb;
use crate::constants::{NONE_GLYPH, TRANSPARENT_GLYPH};

/// A raw binding token classified by its keyword prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// `kp <key>`: send a keycode
    KeyPress(String),
    /// `hm <mod> <key>`: homerow mod (hold for modifier, tap for key)
    HoldTap {
        /// ZMK modifier name (e.g., "LCTRL")
        modifier: String,
        /// Tapped keycode
        key: String,
    },
    /// `lt <layer> <key>`: layer tap (hold for layer, tap for key)
    LayerTap {
        /// Layer number or define
        layer: String,
        /// Tapped keycode
        key: String,
    },
    /// `mo <layer>`: momentary layer activation
    Momentary(String),
    /// `bt <command> [arg]`: Bluetooth profile command
    Bluetooth(String),
    /// `trans`: transparent, falls through to the lower layer
    Transparent,
    /// `none`: no action
    NoOp,
    /// `bootloader`: jump to the bootloader
    Bootloader,
    /// `sys_reset`: reset the controller
    Reset,
    /// Anything else, displayed via table lookup or verbatim
    Other(String),
}

impl Binding {
    /// Classifies a raw binding token.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().trim_start_matches('&').trim();

        if let Some(key) = token.strip_prefix("kp ") {
            return Self::KeyPress(key.trim().to_string());
        }
        if let Some(rest) = token.strip_prefix("hm ") {
            let mut parts = rest.split_whitespace();
            if let (Some(modifier), Some(key)) = (parts.next(), parts.next()) {
                return Self::HoldTap {
                    modifier: modifier.to_string(),
                    key: key.to_string(),
                };
            }
            return Self::Other(token.to_string());
        }
        if let Some(rest) = token.strip_prefix("lt ") {
            let mut parts = rest.split_whitespace();
            if let (Some(layer), Some(key)) = (parts.next(), parts.next()) {
                return Self::LayerTap {
                    layer: layer.to_string(),
                    key: key.to_string(),
                };
            }
            return Self::Other(token.to_string());
        }
        if let Some(layer) = token.strip_prefix("mo ") {
            return Self::Momentary(layer.trim().to_string());
        }
        if let Some(cmd) = token.strip_prefix("bt ") {
            return Self::Bluetooth(cmd.trim().to_string());
        }

        match token {
            "trans" => Self::Transparent,
            "none" => Self::NoOp,
            "bootloader" | "BOOTLDR" => Self::Bootloader,
            "sys_reset" | "SYSRSET" => Self::Reset,
            // Macro-expanded clear commands that didn't match the bt prefix
            other if other.contains("BT_CLR") => Self::Bluetooth("BT_CLR".to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    /// Renders the binding as a short display token.
    #[must_use]
    pub fn display(&self, db: &KeycodeDb) -> String {
        match self {
            Self::KeyPress(key) => db.symbol(key).to_string(),
            Self::HoldTap { modifier, key } => {
                format!("{}+{}", KeycodeDb::modifier_abbrev(modifier), db.symbol(key))
            }
            Self::LayerTap { layer, key } => {
                format!("LT({},{})", db.layer_name(layer), db.symbol(key))
            }
            Self::Momentary(layer) => format!("MO({})", db.layer_name(layer)),
            Self::Bluetooth(cmd) => {
                if let Some(num) = cmd.strip_prefix("BT_SEL ") {
                    format!("BT{}", num.trim())
                } else if cmd == "BT_CLR" {
                    "BTCLR".to_string()
                } else {
                    cmd.clone()
                }
            }
            Self::Transparent => TRANSPARENT_GLYPH.to_string(),
            Self::NoOp => NONE_GLYPH.to_string(),
            Self::Bootloader => "BOOT".to_string(),
            Self::Reset => "RST".to_string(),
            Self::Other(raw) => db.symbol(raw).to_string(),
        }
    }
}

/// Translates one raw binding token straight to its display form.
#[must_use]
pub fn translate(raw: &str, db: &KeycodeDb) -> String {
    Binding::parse(raw).display(db)
}
