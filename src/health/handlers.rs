use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::imagery::source::ImageSource;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<IS>(
    State(app_context): State<AppContext<IS>>,
) -> Json<HealthCheckResponse>
where
    IS: ImageSource,
{
    Json(HealthCheckResponse {
        error: false,
        imagery_configured: app_context.images.is_configured(),
    })
}
