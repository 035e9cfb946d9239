use crate::app_context::AppContext;
use crate::imagery::panorama;
use crate::imagery::responses::{GatewayErrorResponse, PanoramaResponse};
use crate::imagery::source::ImageSource;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

pub async fn full_image_list<IS>(
    State(app_context): State<AppContext<IS>>,
) -> Result<Json<PanoramaResponse>, (StatusCode, Json<GatewayErrorResponse>)>
where
    IS: ImageSource,
{
    match panorama::random(&app_context.images).await {
        Ok(response) => Ok(Json(response)),
        Err(err) if err.is_not_found() => {
            tracing::warn!("{err}");
            Err((
                StatusCode::NOT_FOUND,
                Json(GatewayErrorResponse {
                    message: err.to_string(),
                    error: None,
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error fetching images: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GatewayErrorResponse {
                    message: String::from("Server error"),
                    error: Some(err.to_string()),
                }),
            ))
        }
    }
}
