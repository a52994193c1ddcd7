//! README document assembler.
//!
//! Concatenates the header, legend, per-layer diagrams, combo table,
//! feature table, and build instructions into the final markdown
//! document. Only layers present in the fixed registry render; the
//! registry order is irrelevant, layers keep their source order.

use crate::constants::DEFAULT_LAYER_NAME;
use crate::export::combo_table::generate_combo_table;
use crate::export::feature_table::generate_feature_table;
use crate::export::layer_diagram::render_layer_diagram;
use crate::models::{FeatureFlag, Layer};
use crate::parser::Keymap;
use std::fmt::Write as _;

/// Known layers: block name, section title, subtitle.
const LAYER_REGISTRY: &[(&str, &str, &str)] = &[
    ("default_osx_layer", "Main", "QWERTY"),
    ("lower_osx_layer", "Lower", "Navigation"),
    ("raise_osx_layer", "Raise", "Numbers"),
    ("adjust_osx_layer", "Adjust", "Function Keys"),
    ("firmware_layer", "Firmware", "Bluetooth"),
];

/// Document header, legend, and OS layout notes.
const HEADER: &str = "\
# Clickety Split Ltd. | Pepito-Macro

## Keyboard Layout

This document shows the key mappings for each layer of the Pepito-Macro split keyboard.

**Legend:**
- `▽` = Transparent (uses lower layer)
- `✗` = None (no action)
- `MO(X)` = Momentary layer activation
- `LT(X,key)` = Layer tap (hold for layer, tap for key)
- `CTRL+key` = Homerow mod (hold for modifier, tap for key)

### OS Keyboard Layout Support

This keyboard layout is designed to work with both QWERTY and Colemak layouts at the OS level:

- **QWERTY**: Use the standard QWERTY layout in your OS settings
- **Colemak**: Switch your OS to Colemak layout - the physical key bindings remain the same, but your OS will interpret them as Colemak characters

The layers shown below display the physical key positions. When using Colemak at the OS level, the home row will effectively become: **A R S T D** (left) and **H N E I O** (right).
";

/// Fixed build-instruction block that closes the document.
const BUILD_INSTRUCTIONS: &str = "\
## Build Instructions

Build with default keymap:

```bash
west build -d build/pepito/left -p -b seeeduino_xiao_ble -- -DSHIELD=clickety_split_pepito_left
west build -d build/pepito/right -p -b seeeduino_xiao_ble -- -DSHIELD=clickety_split_pepito_right
```

Build with custom keymap:

```bash
west build -d build/pepito/left -p -b seeeduino_xiao_ble -- -DSHIELD=clickety_split_pepito_left  -DZMK_CONFIG=\"/workspaces/zmk-config/joey/pepito_v1.13/config\"
west build -d build/pepito/right -p -b seeeduino_xiao_ble -- -DSHIELD=clickety_split_pepito_right  -DZMK_CONFIG=\"/workspaces/zmk-config/joey/pepito_v1.13/config\"
```";

/// Assembles the complete README from parsed inputs.
#[must_use]
pub fn generate_readme(keymap: &Keymap, flags: &[FeatureFlag]) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for layer in &keymap.layers {
        let Some((_, title, subtitle)) = LAYER_REGISTRY
            .iter()
            .find(|(name, _, _)| *name == layer.name)
        else {
            // Layers outside the registry are not documented
            continue;
        };
        render_layer_section(&mut output, layer, title, subtitle);
    }

    output.push_str(&generate_combo_table(&keymap.combos));
    output.push_str(&generate_feature_table(flags));
    output.push_str(BUILD_INSTRUCTIONS);

    output
}

/// Renders one layer heading plus its diagram. The primary layer is
/// wrapped in a collapsible block to keep the document compact.
fn render_layer_section(output: &mut String, layer: &Layer, title: &str, subtitle: &str) {
    let _ = writeln!(output, "### {} Layer ({})\n", title, subtitle);

    if layer.name == DEFAULT_LAYER_NAME {
        output.push_str("<details>\n");
        output.push_str("<summary>Click to expand QWERTY layout</summary>\n\n");
        output.push_str(&render_layer_diagram(layer));
        output.push_str("\n\n</details>\n\n");
    } else {
        output.push_str(&render_layer_diagram(layer));
        output.push_str("\n\n");
    }
}
