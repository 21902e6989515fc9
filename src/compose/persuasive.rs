use super::pick;
use crate::controls::{Controls, PersuasiveSource};
use crate::error::Result;
use crate::rng::RandomSource;
use crate::store::PersuasiveBank;

pub(super) fn compose<R>(
    bank: &PersuasiveBank,
    category: &str,
    controls: &Controls,
    rng: &mut R,
) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let text = match controls.persuasive_source() {
        PersuasiveSource::Topics => pick(rng, &bank.topics, category, "topics")?,
        PersuasiveSource::Titles => pick(rng, &bank.titles, category, "titles")?,
        PersuasiveSource::All => {
            let all: Vec<String> = bank.topics.iter().chain(&bank.titles).cloned().collect();
            return pick(rng, &all, category, "topics+titles").map(str::to_string);
        }
    };
    Ok(text.to_string())
}
