use anyhow::Result;

use crate::config::Config;
use crate::store::{Category, Strategy};

pub fn run(config_path: Option<String>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let store = config.build_store()?;
    for category in store.categories() {
        println!("{}", describe(category));
    }
    Ok(())
}

/// One-line summary: name, strategy, and what it draws from.
pub fn describe(category: &Category) -> String {
    let detail = match &category.strategy {
        Strategy::Template(set) => format!(
            "{} templates; dictionaries: {}",
            set.templates.len(),
            set.dictionaries
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Strategy::Names(bank) => format!(
            "cultures: {}; {} titles",
            bank.cultures
                .iter()
                .map(|c| c.key.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            bank.titles.len()
        ),
        Strategy::Persuasive(bank) => format!(
            "{} topics, {} titles",
            bank.topics.len(),
            bank.titles.len()
        ),
    };
    format!(
        "{:<12} {:<11} {}",
        category.name,
        category.strategy.kind(),
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn test_describe_template_category() {
        let line = describe(Store::builtin().get("blog").unwrap());
        assert!(line.starts_with("blog"));
        assert!(line.contains("template"));
        assert!(line.contains("angles, audiences, formats, topics"));
    }

    #[test]
    fn test_describe_names() {
        let line = describe(Store::builtin().get("names").unwrap());
        assert!(line.contains("elvish, dwarven, human, exotic"));
    }
}
