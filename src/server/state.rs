use axum::extract::FromRef;

use crate::reference_store::ReferenceStore;
use crate::taste::ReferenceMatcher;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedReferenceStore = Arc<dyn ReferenceStore>;
pub type GuardedMatcher = Arc<ReferenceMatcher>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub reference_store: GuardedReferenceStore,
    pub matcher: GuardedMatcher,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedReferenceStore {
    fn from_ref(input: &ServerState) -> Self {
        input.reference_store.clone()
    }
}

impl FromRef<ServerState> for GuardedMatcher {
    fn from_ref(input: &ServerState) -> Self {
        input.matcher.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
