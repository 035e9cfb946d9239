use crate::geo::errors::GeoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoundError {
    #[error("Missing location data. Please make a guess first.")]
    MissingLocations,
    #[error("The panorama has no usable location")]
    NoTruthPoint,
    #[error("A stored location is not valid JSON: {0}")]
    Corrupted(#[from] serde_json::Error),
    #[error("A stored location is incomplete: {0}")]
    InvalidPoint(#[from] GeoError),
}
