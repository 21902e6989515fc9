//! Template compositor: turns a category's data into one piece of text.

mod names;
mod persuasive;
mod template;

pub use template::{fill_template, template_tokens};

use tracing::debug;

use crate::controls::Controls;
use crate::error::{GenerateError, Result, SelectError};
use crate::rng::RandomSource;
use crate::store::{Category, Strategy};

/// Raw composition output, before enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub text: String,
    /// Set when the text holds several newline-separated entries.
    pub is_multiple: bool,
}

impl Composition {
    fn single(text: String) -> Self {
        Self {
            text,
            is_multiple: false,
        }
    }
}

/// Compose one output for `category`, dispatching on its strategy.
pub fn compose<R>(category: &Category, controls: &Controls, rng: &mut R) -> Result<Composition>
where
    R: RandomSource + ?Sized,
{
    debug!("Composing '{}' with controls [{}]", category.name, controls);
    match &category.strategy {
        Strategy::Template(set) => {
            template::compose(set, &category.name, rng).map(Composition::single)
        }
        Strategy::Names(bank) => names::compose(bank, &category.name, controls, rng),
        Strategy::Persuasive(bank) => {
            persuasive::compose(bank, &category.name, controls, rng).map(Composition::single)
        }
    }
}

/// Draw from a named list, attributing an empty list to its category.
pub(crate) fn pick<'a, R>(
    rng: &mut R,
    items: &'a [String],
    category: &str,
    collection: &str,
) -> Result<&'a str>
where
    R: RandomSource + ?Sized,
{
    crate::selector::select_str(rng, items).map_err(|e| match e {
        SelectError::Empty => GenerateError::EmptyCollection {
            category: category.to_string(),
            collection: collection.to_string(),
        },
        other => other.into(),
    })
}
