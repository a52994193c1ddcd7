//! Shared test fixtures for end-to-end pipeline tests.
#![allow(dead_code)] // Not every fixture is used by every test binary

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A keymap source with a full 44-key default layer, a partial lower
/// layer, macros, and two combos, shaped like the real Pepito keymap.
pub const FULL_KEYMAP: &str = r#"
#define QX_M 0
#define OSX_SC LG(LS(N5)) // screenshot
#define KC_TAB kp TAB

/ {
    combos {
        compatible = "zmk,combos";

        combo_esc {
            timeout-ms = <50>;
            key-positions = <0 1>;
            bindings = <&kp ESC>;
        };

        combo_tab {
            timeout-ms = <50>;
            key-positions = <12 13>;
            bindings = <&kp TAB>;
        };
    };

    keymap {
        compatible = "zmk,keymap";

        default_osx_layer {
            label = "OSX";
            bindings = <
                &KC_TAB  &kp Q  &kp W  &kp E  &kp R  &kp T    &kp Y  &kp U  &kp I      &kp O    &kp P     &kp BSLH
                &kp ESC  &hm LCTRL A  &hm LALT S  &hm LGUI D  &kp F  &kp G    &kp H  &kp J  &hm LGUI K  &hm LALT L  &hm LCTRL SEMI  &kp SQT
                &kp LSHFT  &kp Z  &kp X  &kp C  &kp V  &kp B    &kp N  &kp M  &kp COMMA  &kp DOT  &kp FSLH  &kp RSHFT
                &kp OSX_SC  &mo QX_A  &lt 1 RET  &kp SPACE    &kp SPACE  &lt 2 RET  &mo QX_A  &kp DEL
            >;
        };

        lower_osx_layer {
            label = "Lower";
            bindings = <
                &trans  &kp HOME  &kp UP  &kp END  &kp PG_UP  &none    &none  &kp N7  &kp N8  &kp N9  &none  &trans
                &trans  &kp LEFT  &kp DOWN  &kp RIGHT  &kp PG_DN  &none    &none  &kp N4  &kp N5  &kp N6  &none  &trans
            >;
        };

        firmware_layer {
            label = "Firmware";
            bindings = <
                &bootloader  &bt BT_SEL 0  &bt BT_SEL 1  &bt BT_SEL 2  &bt BT_CLR  &sys_reset
            >;
        };
    };
};
"#;

/// Settings text enabling the display and leaving the rest at defaults.
pub const CONF_DISPLAY_ONLY: &str = "\
# Pepito settings
CONFIG_ZMK_DISPLAY=y

# CONFIG_ZMK_WIDGET_WPM_STATUS=y
";

/// Writes keymap and conf sources into a temp directory, returning the
/// directory guard plus the two file paths.
pub fn write_inputs(keymap: &str, conf: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let keymap_path = dir.path().join("clickety_split_pepito.keymap");
    let conf_path = dir.path().join("clickety_split_pepito.conf");

    fs::write(&keymap_path, keymap).expect("write keymap");
    fs::write(&conf_path, conf).expect("write conf");

    (dir, keymap_path, conf_path)
}
