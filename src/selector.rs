use crate::error::SelectError;
use crate::rng::RandomSource;

/// Pick one element from `items`, optionally biased by parallel `weights`.
///
/// Without weights every index is equally likely. With weights, a point is
/// drawn in `[0, total)` and the items are walked subtracting each weight
/// from it; the first item that brings the remainder to zero or below wins.
/// Zero-weight items are never eligible.
pub fn select<'a, T, R>(
    rng: &mut R,
    items: &'a [T],
    weights: Option<&[f64]>,
) -> Result<&'a T, SelectError>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(SelectError::Empty);
    }

    let weights = match weights {
        None => return Ok(&items[rng.index(items.len())]),
        Some(w) => w,
    };

    if weights.len() != items.len() {
        return Err(SelectError::LengthMismatch {
            items: items.len(),
            weights: weights.len(),
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(SelectError::InvalidWeights);
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(SelectError::InvalidWeights);
    }

    let mut remainder = rng.next_f64() * total;
    let mut last_eligible = None;
    for (item, weight) in items.iter().zip(weights) {
        if *weight == 0.0 {
            continue;
        }
        remainder -= weight;
        if remainder <= 0.0 {
            return Ok(item);
        }
        last_eligible = Some(item);
    }

    // Only reachable through float drift on the running remainder.
    last_eligible.ok_or(SelectError::InvalidWeights)
}

/// Unweighted pick over a string list.
pub fn select_str<'a, R>(rng: &mut R, items: &'a [String]) -> Result<&'a str, SelectError>
where
    R: RandomSource + ?Sized,
{
    select(rng, items, None).map(String::as_str)
}
