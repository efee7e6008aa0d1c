//! Decision export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::decisions::DEFAULT_EXPORT_FILE_NAME;

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name of the exported JSON
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = &self.file_name;
        if !name.ends_with(".json") || name.contains('/') || name.contains('\\') {
            return Err(ValidationError::InvalidExportFileName);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_name: default_file_name(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.file_name, "incident-briefing-decisions.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_name_must_be_plain_json() {
        for bad in ["decisions.txt", "../decisions.json", "a/b.json"] {
            let config = ExportConfig {
                file_name: bad.to_string(),
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidExportFileName),
                "{}",
                bad
            );
        }
    }
}
