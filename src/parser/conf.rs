//! Kconfig-style settings file parsing.
//!
//! The `.conf` file is a flat list of `KEY=VALUE` lines. Only the
//! declared feature flags are recognized; everything else is ignored.

use crate::models::feature::{declared_flags, FeatureFlag};
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a settings file into the declared feature flags.
///
/// # Errors
///
/// Fails only if the file cannot be read. Unrecognized lines are ignored.
pub fn parse_conf(path: &Path) -> Result<Vec<FeatureFlag>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    Ok(parse_conf_str(&content))
}

/// Parses settings text into the declared feature flags.
///
/// Blank lines and `#` comments are skipped. A recognized flag is enabled
/// iff its value is `y`; a bare `KEY` line counts as `KEY=y`. Flags absent
/// from the text stay at their declared default (disabled).
#[must_use]
pub fn parse_conf_str(content: &str) -> Vec<FeatureFlag> {
    let mut flags = declared_flags();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for flag in &mut flags {
            if line.starts_with(flag.symbol) {
                let value = line.split_once('=').map_or("y", |(_, v)| v);
                flag.enabled = value.trim().eq_ignore_ascii_case("y");
                flag.seen = true;
            }
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag<'a>(flags: &'a [FeatureFlag], symbol: &str) -> &'a FeatureFlag {
        flags.iter().find(|f| f.symbol == symbol).unwrap()
    }

    #[test]
    fn test_enabled_flag() {
        let flags = parse_conf_str("CONFIG_ZMK_DISPLAY=y\n");

        let display = flag(&flags, "CONFIG_ZMK_DISPLAY");
        assert!(display.enabled);
        assert!(display.seen);
    }

    #[test]
    fn test_disabled_flag() {
        let flags = parse_conf_str("CONFIG_ZMK_DISPLAY=n\n");

        let display = flag(&flags, "CONFIG_ZMK_DISPLAY");
        assert!(!display.enabled);
        assert!(display.seen);
    }

    #[test]
    fn test_absent_flag_stays_at_default() {
        let flags = parse_conf_str("CONFIG_ZMK_DISPLAY=y\n");

        let wpm = flag(&flags, "CONFIG_ZMK_WIDGET_WPM_STATUS");
        assert!(!wpm.enabled);
        assert!(!wpm.seen);
    }

    #[test]
    fn test_bare_key_counts_as_enabled() {
        let flags = parse_conf_str("CONFIG_ZMK_BLE_PASSKEY_ENTRY\n");

        assert!(flag(&flags, "CONFIG_ZMK_BLE_PASSKEY_ENTRY").enabled);
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let flags = parse_conf_str("# CONFIG_ZMK_DISPLAY=y\n\nCONFIG_OTHER=y\n");

        assert!(flags.iter().all(|f| !f.seen));
    }
}
