//! User-facing generation controls.
//!
//! Controls arrive as loose string pairs from the UI or CLI. Only a few keys
//! change composition (`type`, `origin` and `count` for names, `type` for
//! persuasive); every other key is accepted and carried along unread.
//! Unrecognized values never fail: each typed view falls back to its default.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Controls(BTreeMap<String, String>);

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill in any key missing here from `defaults`.
    pub fn merged_over(mut self, defaults: &Controls) -> Self {
        for (k, v) in &defaults.0 {
            self.0.entry(k.clone()).or_insert_with(|| v.clone());
        }
        self
    }

    /// Parse a `key=value` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (k, v) = pair.split_once('=')?;
        let k = k.trim();
        if k.is_empty() {
            return None;
        }
        Some((k.to_string(), v.trim().to_string()))
    }

    pub fn name_type(&self) -> NameType {
        NameType::from_control(self.get("type"))
    }

    pub fn name_batch(&self) -> NameBatch {
        NameBatch::from_control(self.get("count"))
    }

    /// The pinned culture key, or `None` for "any".
    pub fn origin(&self) -> Option<&str> {
        self.get("origin").filter(|o| *o != "any")
    }

    pub fn persuasive_source(&self) -> PersuasiveSource {
        PersuasiveSource::from_control(self.get("type"))
    }
}

/// Output shape for a generated name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameType {
    #[default]
    Full,
    First,
    Title,
    House,
}

impl NameType {
    pub fn from_control(value: Option<&str>) -> Self {
        match value {
            Some("first") => NameType::First,
            Some("title") => NameType::Title,
            Some("house") => NameType::House,
            _ => NameType::Full,
        }
    }
}

/// How many names one request produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameBatch {
    #[default]
    Single,
    Multiple,
    Batch,
}

impl NameBatch {
    pub fn from_control(value: Option<&str>) -> Self {
        match value {
            Some("multiple") => NameBatch::Multiple,
            Some("batch") => NameBatch::Batch,
            _ => NameBatch::Single,
        }
    }

    pub fn size(self) -> usize {
        match self {
            NameBatch::Single => 1,
            NameBatch::Multiple => 5,
            NameBatch::Batch => 10,
        }
    }
}

/// Which persuasive list to draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersuasiveSource {
    Topics,
    Titles,
    #[default]
    All,
}

impl PersuasiveSource {
    pub fn from_control(value: Option<&str>) -> Self {
        match value {
            Some("topics") => PersuasiveSource::Topics,
            Some("titles") => PersuasiveSource::Titles,
            _ => PersuasiveSource::All,
        }
    }
}

impl fmt::Display for Controls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.0.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{}", pairs.join(","))
    }
}
