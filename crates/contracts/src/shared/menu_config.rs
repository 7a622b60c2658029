use crate::menu::CustomEntry;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Presentation settings of a tree menu instance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuConfig {
    /// Compact entries.
    pub dense: bool,
    /// Render a dashboard link to `/` above the resources.
    pub has_dashboard: bool,
    /// Initial state of the sidebar.
    pub sidebar_open: bool,
    /// Entries appended after the resources, in this order.
    pub custom_entries: Vec<CustomEntry>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            dense: false,
            has_dashboard: false,
            sidebar_open: true,
            custom_entries: Vec::new(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"{
    "dense": false,
    "hasDashboard": true,
    "sidebarOpen": true,
    "customEntries": []
}"#;

/// Load the menu configuration from JSON, or the embedded default when
/// the host supplies none.
pub fn load_config(json: Option<&str>) -> anyhow::Result<MenuConfig> {
    let source = json.unwrap_or(DEFAULT_CONFIG);
    serde_json::from_str(source).context("Failed to parse menu configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert!(config.has_dashboard);
        assert!(config.sidebar_open);
        assert!(!config.dense);
        assert!(config.custom_entries.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config(Some(
            r#"{"dense": true, "customEntries": [{"key": "help", "to": "/help", "label": "Help"}]}"#,
        ))
        .unwrap();
        assert!(config.dense);
        assert!(!config.has_dashboard);
        assert!(config.sidebar_open);
        assert_eq!(config.custom_entries.len(), 1);
        assert_eq!(config.custom_entries[0].icon, None);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = load_config(Some("{\"dense\": \"yes\"}")).unwrap_err();
        assert!(err.to_string().contains("menu configuration"));
    }
}
