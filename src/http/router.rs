use crate::app_context::AppContext;
use crate::cli::Args;
use crate::imagery::source::ImageSource;
use crate::{health, http::cors, http::middleware, imagery, scoring};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<IS>(args: &Args, app_context: AppContext<IS>) -> Router
where
    IS: ImageSource,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<IS>));
    let api_routes = Router::new()
        .route(
            "/getfullimagelist",
            get(imagery::handlers::full_image_list::<IS>),
        )
        .route("/score", post(scoring::handlers::score_round));

    Router::new()
        .nest("/health", health_routes)
        .nest("/api", api_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
