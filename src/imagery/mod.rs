use crate::cli::Args;

pub mod consts;
pub mod errors;
#[cfg(test)]
pub mod fake;
pub mod handlers;
pub mod mapillary;
pub mod models;
pub mod panorama;
pub mod responses;
pub mod source;

pub fn init(args: &Args) {
    if args.mapillary_access_token.is_none() {
        tracing::warn!(
            "No Mapillary access token is set (`--mapillary-access-token` or the \
            `MAPILLARY_ACCESS_TOKEN` environment variable). Panorama requests will fail."
        );
    }
    tracing::info!("Using the imagery catalog at {}.", args.mapillary_url);
}
