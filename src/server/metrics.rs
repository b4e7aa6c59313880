use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, GaugeVec, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all lookbook metrics
const PREFIX: &str = "lookbook";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Matching Metrics
    pub static ref MATCH_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_match_requests_total"),
            "Match requests by the relaxation level that produced candidates"
        ),
        &["relaxation"]
    ).expect("Failed to create match_requests_total metric");

    pub static ref MATCH_SUGGESTIONS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_match_suggestions"),
            "Number of suggestions returned per match request"
        )
        .buckets(vec![0.0, 1.0, 2.0, 4.0, 8.0, 16.0, 24.0])
    ).expect("Failed to create match_suggestions metric");

    // Reference Library Metrics
    pub static ref REFERENCE_LIBRARY_ITEMS: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_reference_library_items"), "Entries per reference library"),
        &["library"]
    ).expect("Failed to create reference_library_items metric");

    // Error Metrics
    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Total errors by type and endpoint"),
        &["error_type", "endpoint"]
    ).expect("Failed to create errors_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(MATCH_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(MATCH_SUGGESTIONS.clone()));
    let _ = REGISTRY.register(Box::new(REFERENCE_LIBRARY_ITEMS.clone()));
    let _ = REGISTRY.register(Box::new(ERRORS_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Set the library size gauges
pub fn set_library_items(brand_references: usize, style_references: usize) {
    REFERENCE_LIBRARY_ITEMS
        .with_label_values(&["brand"])
        .set(brand_references as f64);

    REFERENCE_LIBRARY_ITEMS
        .with_label_values(&["style"])
        .set(style_references as f64);
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a served match request
pub fn record_match(relaxation: &str, suggestions: usize) {
    MATCH_REQUESTS_TOTAL
        .with_label_values(&[relaxation])
        .inc();

    MATCH_SUGGESTIONS.observe(suggestions as f64);
}

/// Record an error
pub fn record_error(error_type: &str, endpoint: &str) {
    ERRORS_TOTAL
        .with_label_values(&[error_type, endpoint])
        .inc();
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
