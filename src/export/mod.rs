//! Markdown export for the parsed keymap.
//!
//! This module renders the parsed layers, combos, and feature flags into
//! the final README document: box-drawing layer diagrams plus combo and
//! feature tables.

pub mod combo_table;
pub mod feature_table;
pub mod layer_diagram;
pub mod readme;

pub use combo_table::generate_combo_table;
pub use feature_table::generate_feature_table;
pub use layer_diagram::render_layer_diagram;
pub use readme::generate_readme;
