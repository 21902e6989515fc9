use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::compose::template_tokens;
use crate::enhance::{EnhanceMode, Enhancer};
use crate::store::{Category, Store, Strategy};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreIssue {
    pub severity: Severity,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error, // generation can fail or emit raw tokens
    Warning, // dead or redundant data
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

impl fmt::Display for StoreIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)
    }
}

/// Static authoring checks over a whole store.
pub fn check_store(store: &Store) -> Vec<StoreIssue> {
    store.categories().iter().flat_map(check_category).collect()
}

pub fn check_category(category: &Category) -> Vec<StoreIssue> {
    let mut issues = Issues {
        category: &category.name,
        found: Vec::new(),
    };

    match &category.strategy {
        Strategy::Template(set) => {
            issues.non_empty("templates", &set.templates);
            let mut referenced = HashSet::new();
            for template in &set.templates {
                for token in template_tokens(template) {
                    referenced.insert(token);
                    if !set.dictionaries.contains_key(token) {
                        issues.error(format!(
                            "template references unknown dictionary {{{}}}: {}",
                            token, template
                        ));
                    }
                }
            }
            for (name, values) in &set.dictionaries {
                issues.non_empty(name, values);
                if !referenced.contains(name.as_str()) {
                    issues.warn(format!("dictionary '{}' is never referenced", name));
                }
            }
        }
        Strategy::Names(bank) => {
            if bank.cultures.is_empty() {
                issues.error("no cultures defined".to_string());
            }
            let mut keys = HashSet::new();
            for culture in &bank.cultures {
                if !keys.insert(culture.key.as_str()) {
                    issues.error(format!("culture '{}' defined twice", culture.key));
                }
                if culture.key == "any" {
                    issues.error("culture key 'any' is reserved".to_string());
                }
                issues.non_empty(&format!("{}.first", culture.key), &culture.first);
                issues.non_empty(&format!("{}.last", culture.key), &culture.last);
            }
            issues.non_empty("titles", &bank.titles);
        }
        Strategy::Persuasive(bank) => {
            issues.non_empty("topics", &bank.topics);
            issues.non_empty("titles", &bank.titles);
        }
    }

    if let Some(enhancer) = &category.enhancer {
        issues.enhancer(enhancer);
    }

    issues.found
}

struct Issues<'a> {
    category: &'a str,
    found: Vec<StoreIssue>,
}

impl Issues<'_> {
    fn push(&mut self, severity: Severity, message: String) {
        self.found.push(StoreIssue {
            severity,
            category: self.category.to_string(),
            message,
        });
    }

    fn error(&mut self, message: String) {
        self.push(Severity::Error, message);
    }

    fn warn(&mut self, message: String) {
        self.push(Severity::Warning, message);
    }

    fn non_empty(&mut self, name: &str, items: &[String]) {
        if items.is_empty() {
            self.error(format!("'{}' is empty", name));
            return;
        }
        let mut seen = BTreeSet::new();
        for item in items {
            if !seen.insert(item.as_str()) {
                self.warn(format!("'{}' lists \"{}\" more than once", name, item));
            }
        }
    }

    fn enhancer(&mut self, enhancer: &Enhancer) {
        if let EnhanceMode::WithProbability(p) = enhancer.mode {
            if !(0.0..=1.0).contains(&p) {
                self.error(format!("enhancer probability {} is outside [0, 1]", p));
            }
        }
        self.non_empty("enhancer clauses", &enhancer.clauses);
    }
}
