use crate::geo::models::GeoPoint;
use crate::imagery::errors::ImageryError;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Mapillary expects `min_lon,min_lat,max_lon,max_lat`.
    pub fn as_query_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lon_min, self.lat_min, self.lon_max, self.lat_max
        )
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lon_min..=self.lon_max).contains(&point.lng)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub data: Option<Vec<ImageSearchHit>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSearchHit {
    pub id: String,
    #[serde(default)]
    pub is_pano: Option<bool>,
}

impl ImageSearchHit {
    pub fn is_panorama(&self) -> bool {
        self.is_pano == Some(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub id: String,
    #[serde(default)]
    pub thumb_2048_url: Option<String>,
    #[serde(default)]
    pub captured_at: Option<i64>,
    #[serde(default)]
    pub sequence: Option<String>,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

/// GeoJSON point, coordinates are `[lng, lat]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl PointGeometry {
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            kind: String::from("Point"),
            coordinates: vec![point.lng, point.lat],
        }
    }

    pub fn truth_point(&self) -> Result<GeoPoint, ImageryError> {
        match self.coordinates.as_slice() {
            &[lng, lat] => Ok(GeoPoint { lat, lng }),
            other => Err(ImageryError::MalformedGeometry(other.len())),
        }
    }
}
