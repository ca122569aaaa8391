//! Report configuration.
//!
//! Options are read from a JSON file. Keys prefixed with `_comment` are
//! documentation and get stripped before deserializing; unrecognized
//! keys are ignored for forward compatibility.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Options controlling table building and report rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Merge rows sharing an identical rename label into one row.
    #[serde(default = "default_true")]
    pub group_by_rename: bool,

    /// Append a collapsible list of every item per pack.
    #[serde(default = "default_true")]
    pub show_all_items_list: bool,

    /// Column names in display order. Unknown names are ignored.
    #[serde(default = "default_columns")]
    pub columns_order: Vec<String>,

    /// CSS class applied to the report tables (rendering only).
    #[serde(default = "default_table_class")]
    pub table_class: String,

    /// Render the all-items lists expanded (rendering only).
    #[serde(default = "default_true")]
    pub open_all_details: bool,

    /// Report title (rendering only).
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_true() -> bool {
    true
}

fn default_columns() -> Vec<String> {
    vec![
        "Rename".to_string(),
        "Item".to_string(),
        "Model".to_string(),
    ]
}

fn default_table_class() -> String {
    "default-table".to_string()
}

fn default_title() -> String {
    "Resourcepack report".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            group_by_rename: true,
            show_all_items_list: true,
            columns_order: default_columns(),
            table_class: default_table_class(),
            open_all_details: true,
            title: default_title(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; a present but malformed file
    /// is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from JSON text, stripping `_comment` keys.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;

        let Value::Object(map) = raw else {
            return Err(ReportError::InvalidConfig(
                "config root must be a JSON object".to_string(),
            ));
        };

        let cleaned: serde_json::Map<String, Value> = map
            .into_iter()
            .filter(|(key, _)| !key.starts_with("_comment"))
            .collect();

        Ok(serde_json::from_value(Value::Object(cleaned))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert!(config.group_by_rename);
        assert!(config.show_all_items_list);
        assert_eq!(config.columns_order, vec!["Rename", "Item", "Model"]);
        assert_eq!(config.table_class, "default-table");
        assert!(config.open_all_details);
        assert_eq!(config.title, "Resourcepack report");
    }

    #[test]
    fn test_from_json_overrides() {
        let config = ReportConfig::from_json(
            r#"{
                "group_by_rename": false,
                "columns_order": ["Model", "Rename"],
                "title": "My packs"
            }"#,
        )
        .unwrap();

        assert!(!config.group_by_rename);
        assert_eq!(config.columns_order, vec!["Model", "Rename"]);
        assert_eq!(config.title, "My packs");
        // Unspecified options keep their defaults.
        assert!(config.show_all_items_list);
    }

    #[test]
    fn test_comment_keys_stripped() {
        let config = ReportConfig::from_json(
            r#"{
                "_comment_group": "set to false to list every pair separately",
                "group_by_rename": false
            }"#,
        )
        .unwrap();

        assert!(!config.group_by_rename);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = ReportConfig::from_json(r#"{ "future_option": 42 }"#).unwrap();
        assert!(config.group_by_rename);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(ReportConfig::from_json("{ not json").is_err());
        assert!(ReportConfig::from_json("[1, 2]").is_err());
        assert!(ReportConfig::from_json(r#"{ "group_by_rename": "yes" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::load(dir.path().join("config.json")).unwrap();
        assert!(config.group_by_rename);
    }
}
