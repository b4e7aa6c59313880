//! Curation API routes: coverage analytics and reference library upkeep.

use crate::reference_store::{
    BrandReferenceEntry, DeliverableStyleReferenceEntry, ReferenceAnomaly,
};
use crate::server::metrics;
use crate::taste::coverage::{self, CoverageReport};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use super::state::{GuardedReferenceStore, ServerState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CoverageResponse {
    #[serde(flatten)]
    report: CoverageReport,
    /// Rows excluded from the matrix because their keys do not parse.
    anomalies: Vec<ReferenceAnomaly>,
}

fn error_body(message: String) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message }))
}

/// GET /v1/curation/coverage
///
/// A store failure here is a 500: the dashboard must be able to tell a
/// failed load apart from genuine zero coverage.
async fn get_coverage(State(store): State<GuardedReferenceStore>) -> Response {
    match store.scan_style_references() {
        Ok(scan) => {
            let report = coverage::analyze(&scan.entries);
            Json(CoverageResponse {
                report,
                anomalies: scan.anomalies,
            })
            .into_response()
        }
        Err(err) => {
            error!("Failed to load style references for coverage: {:#}", err);
            metrics::record_error("reference_store", "/v1/curation/coverage");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body(format!("Failed to load style references: {}", err)),
            )
                .into_response()
        }
    }
}

fn refresh_library_gauges(store: &GuardedReferenceStore) {
    metrics::set_library_items(store.brand_reference_count(), store.style_reference_count());
}

// =============================================================================
// Brand reference library
// =============================================================================

async fn list_brand_references(State(store): State<GuardedReferenceStore>) -> Response {
    match store.list_brand_references() {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to list brand references: {}", err)),
        )
            .into_response(),
    }
}

async fn create_brand_reference(
    State(store): State<GuardedReferenceStore>,
    Json(mut entry): Json<BrandReferenceEntry>,
) -> Response {
    if entry.id.is_empty() {
        entry.id = Uuid::new_v4().to_string();
    }
    match store.insert_brand_reference(&entry) {
        Ok(()) => {
            refresh_library_gauges(&store);
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to create brand reference: {}", err)),
        )
            .into_response(),
    }
}

async fn update_brand_reference(
    State(store): State<GuardedReferenceStore>,
    Path(id): Path<String>,
    Json(mut entry): Json<BrandReferenceEntry>,
) -> Response {
    entry.id = id;
    match store.update_brand_reference(&entry) {
        Ok(true) => Json(entry).into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to update brand reference: {}", err)),
        )
            .into_response(),
    }
}

async fn delete_brand_reference(
    State(store): State<GuardedReferenceStore>,
    Path(id): Path<String>,
) -> Response {
    match store.delete_brand_reference(&id) {
        Ok(true) => {
            refresh_library_gauges(&store);
            StatusCode::OK.into_response()
        }
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to delete brand reference: {}", err)),
        )
            .into_response(),
    }
}

// =============================================================================
// Deliverable style library
// =============================================================================

async fn list_style_references(State(store): State<GuardedReferenceStore>) -> Response {
    match store.scan_style_references() {
        Ok(scan) => Json(scan.entries).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to list style references: {}", err)),
        )
            .into_response(),
    }
}

async fn create_style_reference(
    State(store): State<GuardedReferenceStore>,
    Json(mut entry): Json<DeliverableStyleReferenceEntry>,
) -> Response {
    if entry.id.is_empty() {
        entry.id = Uuid::new_v4().to_string();
    }
    match store.insert_style_reference(&entry) {
        Ok(()) => {
            refresh_library_gauges(&store);
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to create style reference: {}", err)),
        )
            .into_response(),
    }
}

async fn update_style_reference(
    State(store): State<GuardedReferenceStore>,
    Path(id): Path<String>,
    Json(mut entry): Json<DeliverableStyleReferenceEntry>,
) -> Response {
    entry.id = id;
    match store.update_style_reference(&entry) {
        Ok(true) => Json(entry).into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to update style reference: {}", err)),
        )
            .into_response(),
    }
}

async fn delete_style_reference(
    State(store): State<GuardedReferenceStore>,
    Path(id): Path<String>,
) -> Response {
    match store.delete_style_reference(&id) {
        Ok(true) => {
            refresh_library_gauges(&store);
            StatusCode::OK.into_response()
        }
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to delete style reference: {}", err)),
        )
            .into_response(),
    }
}

pub fn make_curation_routes(state: ServerState) -> Router {
    Router::new()
        .route("/coverage", get(get_coverage))
        .route("/brand-references", get(list_brand_references))
        .route("/brand-references", post(create_brand_reference))
        .route("/brand-references/{id}", put(update_brand_reference))
        .route("/brand-references/{id}", delete(delete_brand_reference))
        .route("/style-references", get(list_style_references))
        .route("/style-references", post(create_style_reference))
        .route("/style-references/{id}", put(update_style_reference))
        .route("/style-references/{id}", delete(delete_style_reference))
        .with_state(state)
}
