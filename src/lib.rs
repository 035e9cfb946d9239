pub mod app_context;
pub mod cli;
pub mod geo;
pub mod health;
pub mod http;
pub mod imagery;
pub mod logging;
pub mod rounds;
pub mod scoring;
