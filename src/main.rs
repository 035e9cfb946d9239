use clap::Parser;
use gioguesser_server::cli::Args;
use gioguesser_server::{app_context, http, imagery, logging};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    imagery::init(&args);
    let app_context =
        app_context::init(&args).expect("Failed to set up the imagery catalog client.");
    let router = http::router::new(&args, app_context);

    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("HTTP server terminated unexpectedly.");
}
