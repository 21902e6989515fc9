use anyhow::{bail, Result};
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::controls::Controls;
use crate::generate::{Generated, Generator};

#[allow(clippy::too_many_arguments)]
pub fn run(
    category: Option<String>,
    count: Option<usize>,
    kind: Option<String>,
    origin: Option<String>,
    names_count: Option<String>,
    control_pairs: Vec<String>,
    seed: Option<u64>,
    json: bool,
    config_path: Option<String>,
) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let store = config.build_store()?;

    let category = category.unwrap_or_else(|| config.generation.category.clone());
    let count = count.unwrap_or(config.generation.count);
    let seed = seed.or(config.generation.seed);
    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let controls = build_controls(kind, origin, names_count, &control_pairs)?
        .merged_over(&config.controls_for(&category));
    info!("Category: {}, count: {}, controls: [{}]", category, count, controls);

    let mut generator = Generator::new(&store);
    if let Some(seed) = seed {
        generator = generator.with_seed(seed);
    }
    let generated = generator.generate(&category, count, &controls)?;

    println!("{}", render(&generated, format)?);
    Ok(())
}

/// Merge the dedicated flags and free-form `key=value` pairs into one set.
/// Dedicated flags win over pairs naming the same key.
pub fn build_controls(
    kind: Option<String>,
    origin: Option<String>,
    names_count: Option<String>,
    pairs: &[String],
) -> Result<Controls> {
    let mut controls = Controls::new();
    for pair in pairs {
        match Controls::parse_pair(pair) {
            Some((k, v)) => controls.set(k, v),
            None => bail!("Invalid control '{}': expected key=value", pair),
        }
    }
    if let Some(kind) = kind {
        controls.set("type", kind);
    }
    if let Some(origin) = origin {
        controls.set("origin", origin);
    }
    if let Some(names_count) = names_count {
        controls.set("count", names_count);
    }
    Ok(controls)
}

pub fn render(generated: &Generated, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(generated)?),
        OutputFormat::Text => Ok(generated
            .prompts()
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}
