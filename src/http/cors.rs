use crate::cli::Args;
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&args.allowed_origins))
        .allow_headers([ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// No configured origins means any origin, which is what a frontend served from an arbitrary
/// host needs.
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() {
        return AllowOrigin::any();
    }
    let parsed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring allowed origin `{origin}`: not a valid header value.");
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(parsed)
}
