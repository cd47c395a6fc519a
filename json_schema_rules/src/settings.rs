//! Settings for JSON Schema rule application.

use crate::error::RuleError;
use serde::Deserialize;
use std::path::Path;

/// Settings that control which cross-cutting annotations the rules emit.
///
/// Read-only once handed to a [`crate::RuleFactory`]. Every key is optional
/// when loaded from JSON; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateSettings {
    /// When true, required fields receive a not-null annotation.
    ///
    /// **Default: false.**
    pub include_nullability_annotations: bool,

    /// When true, fields carry API-description (`ApiModelProperty`)
    /// metadata and required fields are flagged in it. When false, the
    /// no-op annotation applier is used.
    ///
    /// **Default: false.**
    pub include_api_model_annotations: bool,
}

impl GenerateSettings {
    /// Parses settings from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Json` if the string is not valid JSON or contains
    /// unknown keys.
    pub fn from_json(settings_json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(settings_json)?)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Io` if the file cannot be read, or
    /// `RuleError::Json` if its content is not a valid settings object.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let settings_json: String = std::fs::read_to_string(path)?;
        Self::from_json(&settings_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_all_annotations() {
        let settings: GenerateSettings = GenerateSettings::default();
        assert!(!settings.include_nullability_annotations);
        assert!(!settings.include_api_model_annotations);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let settings: GenerateSettings = GenerateSettings::from_json("{}").expect("valid settings");
        assert_eq!(GenerateSettings::default(), settings);
    }

    #[test]
    fn camel_case_keys_are_read() {
        let settings: GenerateSettings = GenerateSettings::from_json(
            r#"{"includeNullabilityAnnotations": true}"#,
        )
        .expect("valid settings");
        assert!(settings.include_nullability_annotations);
        assert!(!settings.include_api_model_annotations);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result: Result<GenerateSettings, RuleError> =
            GenerateSettings::from_json(r#"{"includeValidation": true}"#);
        assert!(matches!(result, Err(RuleError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("temp dir");
        let result: Result<GenerateSettings, RuleError> =
            GenerateSettings::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(RuleError::Io(_))));
    }

    #[test]
    fn reads_file() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("temp dir");
        let path: std::path::PathBuf = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"includeApiModelAnnotations": true}"#).expect("write settings");
        let settings: GenerateSettings =
            GenerateSettings::from_json_file(&path).expect("valid settings file");
        assert!(settings.include_api_model_annotations);
    }
}
