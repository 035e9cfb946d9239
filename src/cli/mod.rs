use clap::Parser;
use std::net::SocketAddr;
use url::Url;

/// Backend of the geography guessing game.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Quickwit instance to ship structured logs to. Logs only go to stdout when unset.
    #[arg(long, env = "QUICKWIT_URL")]
    pub quickwit_url: Option<Url>,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:5002")]
    pub listen_address: SocketAddr,
    /// Base URL of the Mapillary Graph API.
    #[arg(long)]
    #[arg(default_value = "https://graph.mapillary.com")]
    pub mapillary_url: Url,
    #[arg(long, env = "MAPILLARY_ACCESS_TOKEN", hide_env_values = true)]
    pub mapillary_access_token: Option<String>,
    /// Origin allowed to call the API. Repeat for several; any origin is allowed if none given.
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
    /// Timeout for each request to the imagery catalog.
    #[arg(long)]
    #[arg(default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}
