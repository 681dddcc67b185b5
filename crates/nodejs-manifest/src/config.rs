//! Loader configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::ManifestError;

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Where the loader looks for the manifest, relative to the `FileAccess` root.
///
/// ```toml
/// file_name = "package.json"
/// root = "apps/web"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            file_name: MANIFEST_FILE_NAME.to_string(),
            root: None,
        }
    }
}

impl LoaderConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Path of the manifest relative to the file-access root.
    pub fn manifest_path(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_package_json() {
        let config = LoaderConfig::default();
        assert_eq!(config.file_name, "package.json");
        assert_eq!(config.manifest_path(), PathBuf::from("package.json"));
    }

    #[test]
    fn test_from_toml_with_root() {
        let config = LoaderConfig::from_toml_str("root = \"apps/web\"\n");
        assert!(config.is_ok_and(|c| c.file_name == "package.json"
            && c.manifest_path() == PathBuf::from("apps/web").join("package.json")));
    }

    #[test]
    fn test_from_empty_toml_is_default() {
        let config = LoaderConfig::from_toml_str("");
        assert!(config.is_ok_and(|c| c == LoaderConfig::default()));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let config = LoaderConfig::from_toml_str("file_name = [");
        assert!(matches!(config, Err(ManifestError::Config(_))));
    }
}
