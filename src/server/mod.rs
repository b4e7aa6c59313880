pub mod config;
mod curation;
mod http_layers;
mod matching;
pub mod metrics;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::{log_requests, RequestsLoggingLevel};
pub(self) use curation::make_curation_routes;
pub(self) use matching::make_taste_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::{make_app, run_server};
