use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::emit::DEFAULT_ANNOTATION;
use crate::core::extract::DEFAULT_MARKER;

pub const CONFIG_FILE_NAME: &str = ".fxidsrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Identifier-attribute marker that makes a line qualify.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Line written before every generated declaration.
    #[serde(default = "default_annotation")]
    pub annotation: String,
    /// Suffix stripped from markup file names, also used to find markup
    /// files inside directory inputs.
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,
    #[serde(default = "default_flat_suffix")]
    pub flat_suffix: String,
    #[serde(default = "default_grouped_suffix")]
    pub grouped_suffix: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_annotation() -> String {
    DEFAULT_ANNOTATION.to_string()
}

fn default_source_suffix() -> String {
    ".fxml".to_string()
}

fn default_flat_suffix() -> String {
    "IDs.txt".to_string()
}

fn default_grouped_suffix() -> String {
    "IDsGrouped.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            annotation: default_annotation(),
            source_suffix: default_source_suffix(),
            flat_suffix: default_flat_suffix(),
            grouped_suffix: default_grouped_suffix(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a required string is empty, if both reports would
    /// be written to the same file, or if an `ignores` glob is invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("marker", &self.marker),
            ("sourceSuffix", &self.source_suffix),
            ("flatSuffix", &self.flat_suffix),
            ("groupedSuffix", &self.grouped_suffix),
        ] {
            if value.is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }

        if self.flat_suffix == self.grouped_suffix {
            bail!(
                "'flatSuffix' and 'groupedSuffix' must differ (both are \"{}\")",
                self.flat_suffix
            );
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
