//! Feature flag descriptors for the Kconfig settings file.

/// A single firmware feature flag parsed from the `.conf` settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlag {
    /// Kconfig symbol (e.g., "`CONFIG_ZMK_DISPLAY`")
    pub symbol: &'static str,
    /// Human-readable label for the feature table
    pub label: &'static str,
    /// Whether the feature is enabled
    pub enabled: bool,
    /// Whether the symbol appeared in the settings file at all
    pub seen: bool,
}

impl FeatureFlag {
    /// Creates a flag at its declared default (disabled, not seen).
    #[must_use]
    pub const fn new(symbol: &'static str, label: &'static str) -> Self {
        Self {
            symbol,
            label,
            enabled: false,
            seen: false,
        }
    }
}

/// Returns the declared feature flags, each at its default state.
///
/// Flags absent from the settings file stay at these defaults.
#[must_use]
pub fn declared_flags() -> Vec<FeatureFlag> {
    vec![
        FeatureFlag::new("CONFIG_ZMK_DISPLAY", "Display support"),
        FeatureFlag::new("CONFIG_ZMK_WIDGET_WPM_STATUS", "WPM status widget"),
        FeatureFlag::new(
            "CONFIG_ZMK_WIDGET_BATTERY_STATUS_SHOW_PERCENTAGE",
            "Battery percentage display",
        ),
        FeatureFlag::new("CONFIG_ZMK_BLE_PASSKEY_ENTRY", "BLE passkey entry"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_flags_default_disabled() {
        let flags = declared_flags();

        assert_eq!(flags.len(), 4);
        assert!(flags.iter().all(|f| !f.enabled && !f.seen));
    }

    #[test]
    fn test_declared_flags_contain_display() {
        let flags = declared_flags();

        assert!(flags
            .iter()
            .any(|f| f.symbol == "CONFIG_ZMK_DISPLAY" && f.label == "Display support"));
    }
}
