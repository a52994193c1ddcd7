//! Data model types for the keymap documentation pipeline.
//!
//! These are plain value types produced by the parser and consumed by the
//! export renderers. All of them are immutable once extraction and
//! translation have completed.

pub mod combo;
pub mod feature;
pub mod layer;

pub use combo::Combo;
pub use feature::FeatureFlag;
pub use layer::Layer;
