use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{Category, Strategy, TemplateSet};
use crate::enhance::{EnhanceMode, Enhancer};

/// User-authored template categories, read from TOML.
///
/// ```toml
/// [categories.haiku]
/// templates = ["{season} light on {place}"]
///
/// [categories.haiku.dictionaries]
/// season = ["spring", "autumn"]
/// place = ["the pond", "old stones"]
///
/// [categories.haiku.enhancer]
/// probability = 0.5
/// clauses = [" Use a seasonal word."]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFile {
    #[serde(default)]
    pub templates: Vec<String>,
    #[serde(default)]
    pub dictionaries: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub enhancer: Option<EnhancerFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerFile {
    /// Omitted means the clause is always appended.
    #[serde(default)]
    pub probability: Option<f64>,
    pub clauses: Vec<String>,
}

impl StoreFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store overlay {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid store overlay {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub(super) fn into_categories(self) -> Vec<Category> {
        self.categories
            .into_iter()
            .map(|(name, file)| {
                let category = Category::new(
                    name,
                    Strategy::Template(TemplateSet {
                        dictionaries: file.dictionaries,
                        templates: file.templates,
                    }),
                );
                match file.enhancer {
                    Some(e) => {
                        let mode = match e.probability {
                            Some(p) => EnhanceMode::WithProbability(p),
                            None => EnhanceMode::Always,
                        };
                        category.with_enhancer(Enhancer::new(mode, e.clauses))
                    }
                    None => category,
                }
            })
            .collect()
    }
}
