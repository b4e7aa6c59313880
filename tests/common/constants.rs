//! Shared constants for e2e tests

// Server lifecycle
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

// Seeded brand reference entries
pub const CALM_STUDIO_ID: &str = "br-calm-studio";
pub const CALM_STUDIO_NAME: &str = "Calm Studio";
pub const MONO_ATELIER_ID: &str = "br-mono-atelier";
pub const MONO_ATELIER_NAME: &str = "Monochrome Atelier";
pub const CANDY_POP_ID: &str = "br-candy-pop";
pub const CANDY_POP_NAME: &str = "Candy Pop";
pub const MIDDLE_GROUND_ID: &str = "br-middle-ground";
pub const MIDDLE_GROUND_NAME: &str = "Middle Ground";
