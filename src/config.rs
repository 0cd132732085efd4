use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, XrefError};
use crate::export::write_atomic;

/// Name of the configuration file stored in the project directory.
pub const CONFIG_FILENAME: &str = "xrefgraph.json";

/// Configuration for a conversion project.
///
/// Relative paths are resolved against the project directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XrefConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Tab-delimited cross-reference corpus to read.
    pub input: String,
    /// JSON index to write.
    pub output: String,
    /// Optional JSON table of abbreviation → display name that replaces the
    /// built-in book names.
    pub book_names: Option<String>,
    /// Whether to indent the exported JSON.
    pub pretty: bool,
    /// Number of entries shown in the conversion summary.
    pub sample_size: usize,
}

impl Default for XrefConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: "cross_references.txt".to_string(),
            output: "cross_references.json".to_string(),
            book_names: None,
            pretty: true,
            sample_size: 3,
        }
    }
}

impl XrefConfig {
    /// Absolute path of the input corpus.
    pub fn input_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.input)
    }

    /// Absolute path of the exported index.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }

    /// Absolute path of the book name override, if one is configured.
    pub fn book_names_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.book_names.as_ref().map(|p| project_root.join(p))
    }
}

/// Returns the path to the configuration file within the given project root.
pub fn get_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILENAME)
}

/// Loads the configuration from disk.
///
/// If the configuration file does not exist, returns the default
/// configuration.
pub fn load_config(project_root: &Path) -> Result<XrefConfig> {
    let config_path = get_config_path(project_root);

    if !config_path.exists() {
        return Ok(XrefConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| XrefError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: XrefConfig = serde_json::from_str(&contents).map_err(|e| XrefError::Config {
        message: format!(
            "failed to parse config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
pub fn save_config(project_root: &Path, config: &XrefConfig) -> Result<()> {
    let config_path = get_config_path(project_root);
    let json = serde_json::to_string_pretty(config).map_err(|e| XrefError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    write_atomic(&config_path, &json).map_err(|e| XrefError::Config {
        message: format!(
            "failed to write config file '{}': {}",
            config_path.display(),
            e
        ),
    })
}
