//! Input file parsing.
//!
//! Two parsers live here: one for the devicetree-style `.keymap` file
//! (layers, combos, `#define` macros) and one for the flat Kconfig-style
//! `.conf` settings file (feature flags).

pub mod conf;
pub mod keymap;

pub use conf::parse_conf;
pub use keymap::{parse_keymap, Keymap};
