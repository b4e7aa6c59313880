use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::reference_store::ReferenceStore;
use crate::taste::ReferenceMatcher;
use tower_http::services::ServeDir;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::metrics::metrics_handler;
use super::state::ServerState;
use super::{log_requests, make_curation_routes, make_taste_routes, ServerConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub brand_references: usize,
    pub style_references: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        brand_references: state.reference_store.brand_reference_count(),
        style_references: state.reference_store.style_reference_count(),
    };
    Json(stats)
}

pub fn make_app(config: ServerConfig, reference_store: Arc<dyn ReferenceStore>) -> Router {
    let matcher = Arc::new(ReferenceMatcher::new(reference_store.clone()));
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        reference_store,
        matcher,
        hash: env!("GIT_HASH").to_string(),
    };

    let taste_routes = make_taste_routes(state.clone());
    let curation_routes = make_curation_routes(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app = home_router
        .nest("/v1/taste", taste_routes)
        .nest("/v1/curation", curation_routes)
        .route("/metrics", get(metrics_handler));

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    config: ServerConfig,
    reference_store: Arc<dyn ReferenceStore>,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, reference_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
