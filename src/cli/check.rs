use anyhow::{bail, Result};

use crate::check::{check_store, Severity, StoreIssue};
use crate::config::Config;

pub fn run(config_path: Option<String>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let store = config.build_store()?;
    let issues = check_store(&store);

    print_issues(store.categories().len(), &issues);

    let errors = count(&issues, Severity::Error);
    if errors > 0 {
        bail!("{} store error(s) found", errors);
    }
    Ok(())
}

fn count(issues: &[StoreIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

fn print_issues(categories: usize, issues: &[StoreIssue]) {
    println!();
    if issues.is_empty() {
        println!("  \u{2713} {} categories checked, no issues", categories);
    }
    for issue in issues {
        let mark = match issue.severity {
            Severity::Error => "\u{2717}",
            Severity::Warning => "!",
        };
        println!("  {} {}: {}", mark, issue.category, issue.message);
    }
    println!();
    println!(
        "{} categories, {} warnings, {} errors",
        categories,
        count(issues, Severity::Warning),
        count(issues, Severity::Error)
    );
}
