//! Combo table generator.

use crate::models::Combo;
use std::fmt::Write as _;

/// Generates the markdown combo section, or an empty string when no
/// combos were found.
#[must_use]
pub fn generate_combo_table(combos: &[Combo]) -> String {
    if combos.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str("## Combos\n\n");
    output.push_str("Key combinations available on the main layer:\n\n");
    output.push_str("| Combo | Keys | Output |\n");
    output.push_str("|-------|------|--------|\n");

    for combo in combos {
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            title_case(&combo.name),
            combo.keys,
            combo.output
        );
    }
    output.push('\n');

    output
}

/// Turns a snake_case combo name into a Title Cased label.
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
