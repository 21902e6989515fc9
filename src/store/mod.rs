//! Template store: the static dictionaries and templates each category
//! composes from, plus the strategy that says how to compose them.

mod builtin;
mod overlay;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enhance::Enhancer;
use crate::error::{GenerateError, Result};

pub use overlay::{CategoryFile, EnhancerFile, StoreFile};

static BUILTIN: Lazy<Store> = Lazy::new(builtin::store);

/// Dictionaries plus templates referencing them by `{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub dictionaries: BTreeMap<String, Vec<String>>,
    pub templates: Vec<String>,
}

/// First and last names for one culture.
#[derive(Debug, Clone, PartialEq)]
pub struct Culture {
    pub key: String,
    pub first: Vec<String>,
    pub last: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameBank {
    pub cultures: Vec<Culture>,
    /// Shared across cultures.
    pub titles: Vec<String>,
}

impl NameBank {
    pub fn culture(&self, key: &str) -> Option<&Culture> {
        self.cultures.iter().find(|c| c.key == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersuasiveBank {
    pub topics: Vec<String>,
    pub titles: Vec<String>,
}

/// How a category turns its data into text.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    Template(TemplateSet),
    Names(NameBank),
    Persuasive(PersuasiveBank),
}

impl Strategy {
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Template(_) => "template",
            Strategy::Names(_) => "names",
            Strategy::Persuasive(_) => "persuasive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub strategy: Strategy,
    pub enhancer: Option<Enhancer>,
}

impl Category {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
            enhancer: None,
        }
    }

    pub fn with_enhancer(mut self, enhancer: Enhancer) -> Self {
        self.enhancer = Some(enhancer);
        self
    }
}

/// Ordered collection of categories, looked up by exact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    categories: Vec<Category>,
}

impl Store {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The hand-authored store, built once per process.
    pub fn builtin() -> &'static Store {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| GenerateError::UnknownCategory(name.to_string()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Insert or replace a category, keeping the position of a replaced one.
    pub fn insert(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// Copy of this store with every category from `file` inserted.
    pub fn with_overlay(&self, file: StoreFile) -> Store {
        let mut store = self.clone();
        for category in file.into_categories() {
            tracing::debug!("Overlay category: {}", category.name);
            store.insert(category);
        }
        store
    }
}
