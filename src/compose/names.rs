use tracing::debug;

use super::{pick, Composition};
use crate::controls::{Controls, NameType};
use crate::error::{GenerateError, Result};
use crate::rng::RandomSource;
use crate::selector::select;
use crate::store::{Culture, NameBank};

pub(super) fn compose<R>(
    bank: &NameBank,
    category: &str,
    controls: &Controls,
    rng: &mut R,
) -> Result<Composition>
where
    R: RandomSource + ?Sized,
{
    let name_type = controls.name_type();
    let size = controls.name_batch().size();
    let pinned = controls.origin().and_then(|key| bank.culture(key));
    debug!(
        "Generating {} name(s), type {:?}, culture {}",
        size,
        name_type,
        pinned.map(|c| c.key.as_str()).unwrap_or("any")
    );

    let mut names = Vec::with_capacity(size);
    for _ in 0..size {
        let culture = match pinned {
            Some(c) => c,
            None => select(rng, &bank.cultures, None).map_err(|_| {
                GenerateError::EmptyCollection {
                    category: category.to_string(),
                    collection: "cultures".to_string(),
                }
            })?,
        };
        names.push(one_name(bank, culture, name_type, category, rng)?);
    }

    Ok(Composition {
        text: names.join("\n"),
        is_multiple: names.len() > 1,
    })
}

fn one_name<R>(
    bank: &NameBank,
    culture: &Culture,
    name_type: NameType,
    category: &str,
    rng: &mut R,
) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let first = pick(rng, &culture.first, category, "first")?;
    let last = pick(rng, &culture.last, category, "last")?;
    let title = pick(rng, &bank.titles, category, "titles")?;

    Ok(match name_type {
        NameType::First => first.to_string(),
        NameType::Title => format!("{} {}", first, title),
        NameType::House => format!("{} of House {}", first, last),
        NameType::Full => format!("{} {}", first, last),
    })
}
