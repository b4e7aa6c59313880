//! Shared e2e test infrastructure
//!
//! Each test spawns an isolated server with its own temporary reference
//! database, seeds it through the store API, and talks to it over HTTP.

// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod client;
pub mod constants;
pub mod fixtures;
pub mod server;

pub use client::TestClient;
pub use constants::*;
pub use fixtures::{brand_reference, seed_brand_library, seed_style_library, style_reference};
pub use server::TestServer;
