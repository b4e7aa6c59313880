//! Taste matching API routes

use crate::reference_store::BrandReferenceEntry;
use crate::server::metrics;
use crate::taste::{classify, name_style, BrandSignalProfile, BucketPair};

use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::state::ServerState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MatchBody {
    signal_tone: Option<i64>,
    signal_density: Option<i64>,
    signal_warmth: Option<i64>,
    signal_energy: Option<i64>,

    /// Maximum number of suggestions to return
    limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchResponse {
    references: Vec<BrandReferenceEntry>,
    buckets: BucketPair,
    style_name: &'static str,
}

async fn match_references(
    State(state): State<ServerState>,
    Json(body): Json<MatchBody>,
) -> impl IntoResponse {
    let limit = body
        .limit
        .unwrap_or(state.config.default_match_limit)
        .min(state.config.max_match_limit);

    let profile = BrandSignalProfile {
        tone: body.signal_tone,
        density: body.signal_density,
        warmth: body.signal_warmth,
        energy: body.signal_energy,
    };

    match state.matcher.match_references(&profile, limit) {
        Ok(outcome) => {
            metrics::record_match(outcome.relaxation.as_str(), outcome.references.len());
            Json(MatchResponse {
                style_name: name_style(&outcome.buckets),
                references: outcome.references,
                buckets: outcome.buckets,
            })
        }
        Err(err) => {
            // Matching is an enhancement: a store failure degrades to "no
            // suggestions", it never fails the surrounding onboarding step.
            error!("Reference matching failed: {:#}", err);
            metrics::record_error("reference_store", "/v1/taste/match");
            let buckets = classify(&profile);
            Json(MatchResponse {
                references: Vec::new(),
                style_name: name_style(&buckets),
                buckets,
            })
        }
    }
}

pub fn make_taste_routes(state: ServerState) -> Router {
    Router::new()
        .route("/match", post(match_references))
        .with_state(state)
}
