use crate::geo::models::RawGeoPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub guess: RawGeoPoint,
    #[serde(default)]
    pub truth: RawGeoPoint,
}
