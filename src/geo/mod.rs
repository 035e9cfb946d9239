use distance::haversine_km;
use errors::GeoError;
use models::{GeoPoint, RawGeoPoint, ScoreResult};

pub mod consts;
pub mod distance;
pub mod errors;
pub mod format;
pub mod models;
pub mod score;
#[cfg(test)]
mod tests;

pub fn evaluate(guess: GeoPoint, truth: GeoPoint) -> ScoreResult {
    let distance_km = haversine_km(guess, truth);
    ScoreResult {
        distance_km,
        score: score::score(distance_km),
    }
}

/// Same as [`evaluate`], but refuses to run on points with a missing or non-finite coordinate
/// instead of letting NaN leak into the score.
pub fn evaluate_raw(guess: RawGeoPoint, truth: RawGeoPoint) -> Result<ScoreResult, GeoError> {
    let guess = GeoPoint::try_from(guess)?;
    let truth = GeoPoint::try_from(truth)?;
    Ok(evaluate(guess, truth))
}
