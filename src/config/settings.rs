use std::path::Path;

use serde::Deserialize;

use crate::path::MatchPolicy;

/// Tool settings. Every field has a default so an absent or partial file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub trim_program: String,
    pub exporter_program: String,
    pub compressor_program: String,
    pub notifier_program: String,
    pub notification_title: String,
    pub pdf_compatibility: String,
    pub pdf_settings: String,
    pub crop_match: MatchPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            trim_program: "convert".to_string(),
            exporter_program: "inkscape".to_string(),
            compressor_program: "gs".to_string(),
            notifier_program: "notify-send".to_string(),
            notification_title: "Error".to_string(),
            pdf_compatibility: "1.5".to_string(),
            pdf_settings: "/ebook".to_string(),
            crop_match: MatchPolicy::FirstOccurrence,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::ToolError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
