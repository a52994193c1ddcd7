//! Feature flag summary generator.

use crate::models::FeatureFlag;
use std::fmt::Write as _;

/// Generates the markdown feature section, or an empty string when no
/// recognized flag was seen in the settings file.
///
/// Once any flag was seen, every declared flag is listed; absent flags
/// sit at their declared default (disabled).
#[must_use]
pub fn generate_feature_table(flags: &[FeatureFlag]) -> String {
    if !flags.iter().any(|f| f.seen) {
        return String::new();
    }

    let mut output = String::new();
    output.push_str("## Configuration Features\n\n");

    for flag in flags {
        let (status, state) = if flag.enabled {
            ("✅", "enabled")
        } else {
            ("⚙️", "disabled")
        };
        let _ = writeln!(output, "- {} {} {}", status, flag.label, state);
    }
    output.push('\n');

    output
}
