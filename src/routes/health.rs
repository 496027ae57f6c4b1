use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, no rate limiting
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: the service is ready once the seeded dataset is loaded
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.vfs.folder_count() > 0 && !state.vfs.files().is_empty() {
        (StatusCode::OK, "ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready: dataset empty").into_response()
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP aktenwald_logins_succeeded Total successful logins\n# TYPE aktenwald_logins_succeeded counter\naktenwald_logins_succeeded {}\n\
# HELP aktenwald_logins_failed Total failed logins\n# TYPE aktenwald_logins_failed counter\naktenwald_logins_failed {}\n\
# HELP aktenwald_token_refreshes Total token refreshes\n# TYPE aktenwald_token_refreshes counter\naktenwald_token_refreshes {}\n\
# HELP aktenwald_listings_served Folder listings served\n# TYPE aktenwald_listings_served counter\naktenwald_listings_served {}\n\
# HELP aktenwald_searches_served Searches served\n# TYPE aktenwald_searches_served counter\naktenwald_searches_served {}\n\
# HELP aktenwald_entries_served Listing entries served\n# TYPE aktenwald_entries_served counter\naktenwald_entries_served {}\n\
# HELP aktenwald_uptime_seconds Uptime seconds\n# TYPE aktenwald_uptime_seconds gauge\naktenwald_uptime_seconds {}\n",
        m.logins_succeeded,
        m.logins_failed,
        m.token_refreshes,
        m.listings_served,
        m.searches_served,
        m.entries_served,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
