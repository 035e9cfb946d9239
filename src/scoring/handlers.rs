use crate::geo;
use crate::geo::format::format_distance;
use crate::scoring::requests::ScoreRequest;
use crate::scoring::responses::{ScoreResponse, ScoreResponseError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn score_round(
    request: Result<Json<ScoreRequest>, JsonRejection>,
) -> (StatusCode, Json<ScoreResponse>) {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!("Refusing to score a round: {rejection}.");
            return (
                rejection.status(),
                Json(ScoreResponse::failure(
                    ScoreResponseError::InvalidRequestBody,
                    rejection.body_text(),
                )),
            );
        }
    };
    match geo::evaluate_raw(request.guess, request.truth) {
        Ok(result) => {
            tracing::info!(
                task = "round_scored",
                distance_km = result.distance_km,
                score = result.score as u64,
            );
            (
                StatusCode::OK,
                Json(ScoreResponse {
                    error: false,
                    error_code: None,
                    reason: None,
                    distance_km: Some(result.distance_km),
                    score: Some(result.score),
                    formatted_distance: Some(format_distance(result.distance_km)),
                }),
            )
        }
        Err(err) => {
            tracing::warn!("Refusing to score a round: {err}.");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ScoreResponse::failure(
                    ScoreResponseError::InvalidCoordinates,
                    err.to_string(),
                )),
            )
        }
    }
}
