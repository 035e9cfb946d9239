//! Game round bookkeeping: where the guess and the truth are kept between screens, how a round
//! gets scored once both exist, and which screen comes next.

use crate::geo;
use crate::geo::models::{GeoPoint, ScoreResult};
use crate::imagery::responses::PanoramaResponse;
use errors::RoundError;
use store::{RoundKey, RoundStore};

pub mod errors;
pub mod stages;
pub mod store;

/// Starts a fresh round for the panorama the gateway picked: the previous guess and marks are
/// forgotten and the panorama's location becomes the truth point.
pub fn begin<S: RoundStore>(store: &mut S, panorama: &PanoramaResponse) -> Result<(), RoundError> {
    let truth = panorama
        .coordinates
        .as_ref()
        .ok_or(RoundError::NoTruthPoint)?
        .truth_point()
        .map_err(|_| RoundError::NoTruthPoint)?;
    store.clear();
    store.save_point(RoundKey::CorrectLocation, truth)
}

pub fn place_guess<S: RoundStore>(store: &mut S, guess: GeoPoint) -> Result<(), RoundError> {
    store.save_point(RoundKey::GuessedLocation, guess)
}

/// Scores the round once both points are stored and remembers the score as the round's marks.
/// The scoring engine is not touched unless both points are there.
pub fn evaluate<S: RoundStore>(store: &mut S) -> Result<ScoreResult, RoundError> {
    let guess = store.load_point(RoundKey::GuessedLocation)?;
    let truth = store.load_point(RoundKey::CorrectLocation)?;
    let (Some(guess), Some(truth)) = (guess, truth) else {
        return Err(RoundError::MissingLocations);
    };
    let result = geo::evaluate(guess, truth);
    store.set(RoundKey::Marks, result.score.to_string());
    Ok(result)
}
