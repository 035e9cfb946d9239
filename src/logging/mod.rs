use crate::cli::Args;
use crate::logging::consts::{
    DEFAULT_LOG_DIRECTIVE, QUICKWIT_BATCH_SIZE, QUICKWIT_FLUSH_INTERVAL, QUICKWIT_MARKER_FIELD,
};
use crate::logging::quickwit::QuickwitLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;
#[cfg(test)]
mod tests;

/// Installs the global subscriber. Must run inside the tokio runtime when Quickwit shipping is
/// enabled, since the shipper task is spawned right away.
pub fn init(args: &Args) {
    let quickwit_layer = args.quickwit_url.clone().map(|quickwit_url| {
        QuickwitLayerBuilder::new(quickwit_url)
            .marker_field(QUICKWIT_MARKER_FIELD)
            .route("http_request", "http_requests")
            .route("panorama_fetch", "panorama_fetches")
            .route("round_scored", "rounds_scored")
            .batch_size(QUICKWIT_BATCH_SIZE)
            .flush_interval(QUICKWIT_FLUSH_INTERVAL)
            .build()
    });
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::registry()
        .with(quickwit_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
