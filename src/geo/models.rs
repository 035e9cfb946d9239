use crate::geo::errors::GeoError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point as it arrives from the outside world, before anyone checked that both coordinates
/// are actually there. Anything that is not a JSON number deserializes to `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGeoPoint {
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub lng: Option<f64>,
}

fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        let lat = raw.lat.ok_or(GeoError::MissingLatitude)?;
        let lng = raw.lng.ok_or(GeoError::MissingLongitude)?;
        if !lat.is_finite() {
            return Err(GeoError::NonFiniteCoordinate {
                field: "lat",
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(GeoError::NonFiniteCoordinate {
                field: "lng",
                value: lng,
            });
        }
        Ok(GeoPoint { lat, lng })
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: Some(point.lat),
            lng: Some(point.lng),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub distance_km: f64,
    pub score: u32,
}
