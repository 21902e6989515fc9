use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::controls::Controls;
use crate::store::{Store, StoreFile};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub store: StoreConfig,

    /// Default controls per category, e.g. `[controls.names] type = "house"`.
    /// Controls given on the command line win over these.
    #[serde(default)]
    pub controls: BTreeMap<String, Controls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Category used when none is given on the command line
    #[serde(default = "default_category")]
    pub category: String,

    /// Prompts per request (ignored by `names`)
    #[serde(default = "default_count")]
    pub count: usize,

    /// Fixed seed for reproducible output; random per run when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            count: default_count(),
            seed: None,
        }
    }
}

fn default_category() -> String {
    "writing".to_string()
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Extra template categories layered over the built-in store
    #[serde(default)]
    pub overlay: Option<String>,
}

impl Config {
    /// Load config from repo root or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // Explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        if let Ok(config) = Self::load_from_path("promptsmith.toml") {
            debug!("Loaded config from ./promptsmith.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("promptsmith").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Built-in store, plus the overlay file when one is configured.
    pub fn build_store(&self) -> Result<Store> {
        match &self.store.overlay {
            Some(path) => {
                debug!("Loading store overlay from {}", path);
                let file = StoreFile::load(path)?;
                Ok(Store::builtin().with_overlay(file))
            }
            None => Ok(Store::builtin().clone()),
        }
    }

    /// Configured default controls for `category`, empty when none.
    pub fn controls_for(&self, category: &str) -> Controls {
        self.controls.get(category).cloned().unwrap_or_default()
    }
}
