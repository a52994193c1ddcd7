//! ZMK keymap README generator library.
//!
//! This library parses the Clickety Split Pepito ZMK keymap and settings
//! files and renders a markdown README with visual keyboard layout
//! diagrams, a combo table, and a feature summary.

// Module declarations
pub mod constants;
pub mod export;
pub mod keycode_db;
pub mod models;
pub mod parser;
