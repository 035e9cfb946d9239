use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ScoreResponseError>,
    /// Human-readable description of what was wrong with the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_distance: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreResponseError {
    InvalidCoordinates,
    InvalidRequestBody,
}

impl ScoreResponse {
    pub fn failure(error_code: ScoreResponseError, reason: String) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            reason: Some(reason),
            distance_km: None,
            score: None,
            formatted_distance: None,
        }
    }
}
