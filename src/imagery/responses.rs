use crate::imagery::models::PointGeometry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaResponse {
    pub id: String,
    pub image_url: Option<String>,
    pub captured_at: Option<i64>,
    pub sequence: Option<String>,
    /// Where the panorama was taken, i.e. the truth point of the round.
    pub coordinates: Option<PointGeometry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
