//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, default input/output file names,
//! and the fixed physical geometry of the Pepito split keyboard.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ZMK README Generator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "zmk-readme";

/// Default keymap file name inside the config directory.
pub const DEFAULT_KEYMAP_FILE: &str = "clickety_split_pepito.keymap";

/// Default Kconfig settings file name inside the config directory.
pub const DEFAULT_CONF_FILE: &str = "clickety_split_pepito.conf";

/// Default output file name inside the config directory.
pub const DEFAULT_OUTPUT_FILE: &str = "readme.md";

/// Total number of physical keys: 36 main-grid keys plus 8 thumb keys.
pub const KEY_COUNT: usize = 44;

/// Keys per main-grid row (6 per half).
pub const ROW_WIDTH: usize = 12;

/// Number of main-grid rows.
pub const ROW_COUNT: usize = 3;

/// Number of thumb keys (4 per half).
pub const THUMB_COUNT: usize = 8;

/// Block name of the base layer, used to resolve combo trigger key names.
pub const DEFAULT_LAYER_NAME: &str = "default_osx_layer";

/// Display glyph for a transparent key (falls through to the lower layer).
pub const TRANSPARENT_GLYPH: &str = "▽";

/// Display glyph for an unassigned key position.
pub const NONE_GLYPH: &str = "✗";
