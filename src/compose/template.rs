use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::pick;
use crate::error::Result;
use crate::rng::RandomSource;
use crate::store::TemplateSet;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("token pattern is a valid regex"));

/// Token names referenced by `template`, in order of appearance, repeats
/// included.
pub fn template_tokens(template: &str) -> Vec<&str> {
    TOKEN_RE
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

pub(super) fn compose<R>(set: &TemplateSet, category: &str, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let template = pick(rng, &set.templates, category, "templates")?;
    debug!("Selected template: {}", template);
    fill_template(set, template, category, rng)
}

/// Replace every `{name}` in `template` with a fresh draw from the dictionary
/// of that name. Repeated tokens are drawn independently. Tokens naming no
/// dictionary are left in place.
pub fn fill_template<R>(
    set: &TemplateSet,
    template: &str,
    category: &str,
    rng: &mut R,
) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut last = 0;
    for caps in TOKEN_RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match set.dictionaries.get(name.as_str()) {
            Some(values) => out.push_str(pick(rng, values, category, name.as_str())?),
            None => {
                debug!("No dictionary for token {{{}}} in '{}'", name.as_str(), category);
                out.push_str(whole.as_str());
            }
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
