use crate::error::SelectError;
use crate::rng::RandomSource;
use crate::selector::select_str;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnhanceMode {
    /// A clause is appended on every call.
    Always,
    /// A clause is appended with the given probability.
    WithProbability(f64),
}

/// Post-composition suffix appended to template output.
#[derive(Debug, Clone, PartialEq)]
pub struct Enhancer {
    pub mode: EnhanceMode,
    /// Appended verbatim; each clause carries its own leading separator.
    pub clauses: Vec<String>,
}

impl Enhancer {
    pub fn new(mode: EnhanceMode, clauses: Vec<String>) -> Self {
        Self { mode, clauses }
    }

    /// Each call rolls independently: the probability check first, then the
    /// clause.
    pub fn enhance<R>(&self, text: &str, rng: &mut R) -> Result<String, SelectError>
    where
        R: RandomSource + ?Sized,
    {
        if let EnhanceMode::WithProbability(p) = self.mode {
            if !rng.chance(p) {
                return Ok(text.to_string());
            }
        }
        let clause = select_str(rng, &self.clauses)?;
        Ok(format!("{}{}", text, clause))
    }
}
