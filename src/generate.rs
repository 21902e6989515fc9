//! Category-level entry point: compose, enhance, and wrap results as
//! immutable `Prompt` records.

use std::slice;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compose::compose;
use crate::controls::Controls;
use crate::error::{GenerateError, Result};
use crate::rng::{RandomSource, SeededRandom, ThreadRandom};
use crate::store::{Category, Strategy, Store};

/// One generated prompt. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    id: String,
    text: String,
    category: String,
    /// Milliseconds since the Unix epoch.
    timestamp: u64,
    #[serde(default, skip_serializing_if = "is_false")]
    is_multiple: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Prompt {
    fn new<R>(text: String, category: &str, is_multiple: bool, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let suffix = (rng.next_f64() * f64::from(u32::MAX)) as u32;
        Self {
            id: format!("{}-{:08x}", timestamp, suffix),
            text,
            category: category.to_string(),
            timestamp,
            is_multiple,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }
}

/// A lone prompt for single requests, a list otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Generated {
    Single(Prompt),
    Batch(Vec<Prompt>),
}

impl Generated {
    pub fn prompts(&self) -> &[Prompt] {
        match self {
            Generated::Single(p) => slice::from_ref(p),
            Generated::Batch(ps) => ps,
        }
    }

    pub fn into_vec(self) -> Vec<Prompt> {
        match self {
            Generated::Single(p) => vec![p],
            Generated::Batch(ps) => ps,
        }
    }

    pub fn len(&self) -> usize {
        self.prompts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts().is_empty()
    }
}

/// Compose then enhance one prompt text for a non-names category.
fn compose_enhanced<R>(category: &Category, controls: &Controls, rng: &mut R) -> Result<Prompt>
where
    R: RandomSource + ?Sized,
{
    let composition = compose(category, controls, rng)?;
    let text = match &category.enhancer {
        Some(enhancer) => enhancer
            .enhance(&composition.text, rng)
            .map_err(|_| GenerateError::EmptyCollection {
                category: category.name.clone(),
                collection: "enhancer clauses".to_string(),
            })?,
        None => composition.text,
    };
    Ok(Prompt::new(text, &category.name, composition.is_multiple, rng))
}

/// Generate prompts for `category_name`.
///
/// Names ignore `count`: their batch size comes from the `count` control and
/// the result is always a single record. Every other category produces
/// `count` independent prompts, returned bare when `count == 1`. No attempt
/// is made to avoid duplicates.
pub fn generate<R>(
    store: &Store,
    category_name: &str,
    count: usize,
    controls: &Controls,
    rng: &mut R,
) -> Result<Generated>
where
    R: RandomSource + ?Sized,
{
    let category = store.get(category_name)?;

    if let Strategy::Names(_) = category.strategy {
        let composition = compose(category, controls, rng)?;
        return Ok(Generated::Single(Prompt::new(
            composition.text,
            &category.name,
            composition.is_multiple,
            rng,
        )));
    }

    debug!("Generating {} prompt(s) for '{}'", count, category.name);
    if count == 1 {
        return compose_enhanced(category, controls, rng).map(Generated::Single);
    }
    let prompts = (0..count)
        .map(|_| compose_enhanced(category, controls, rng))
        .collect::<Result<Vec<_>>>()?;
    Ok(Generated::Batch(prompts))
}

/// Store plus random source, configured builder-style.
pub struct Generator<'s> {
    store: &'s Store,
    rng: Box<dyn RandomSource>,
}

impl Generator<'static> {
    pub fn builtin() -> Self {
        Self::new(Store::builtin())
    }
}

impl<'s> Generator<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self {
            store,
            rng: Box::new(ThreadRandom::new()),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        info!("Using seeded random source ({})", seed);
        self.rng = Box::new(SeededRandom::new(seed));
        self
    }

    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn store(&self) -> &Store {
        self.store
    }

    pub fn generate(
        &mut self,
        category: &str,
        count: usize,
        controls: &Controls,
    ) -> Result<Generated> {
        generate(self.store, category, count, controls, &mut self.rng)
    }
}
