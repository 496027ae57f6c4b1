use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::time::{self, Duration as TokioDuration};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod error;
mod metrics;
mod middleware;
mod routes;
mod state;
mod types;
mod vfs;

use state::AppState;

const UI_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/ui");
const UI_INDEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/ui/index.html");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging (stdout + tägliche Datei-Rotation unter ./logs)
    std::fs::create_dir_all("logs").ok();
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let file_appender = tracing_appender::rolling::daily("logs", "aktenwald.log");
    let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
        .init();
    // Guards am Leben halten, damit Non-Blocking Writer korrekt flushen
    let _log_guards = (stdout_guard, file_guard);

    // Load configuration (embedded defaults -> aktenwald.toml -> env/.env)
    let app_cfg = config::load()?;

    // Build the virtual filesystem from the seed dataset; construction
    // verifies every tree invariant.
    let filesystem = vfs::seed::demo()?;
    info!(
        folders = filesystem.folder_count(),
        files = filesystem.files().len(),
        "virtual filesystem seeded"
    );

    // App state (includes rate limiting and the token store)
    let state = AppState::new(filesystem, app_cfg.clone());

    // Periodic cleanup: expired tokens and idle rate-limiter entries
    {
        let rl = state.rate_limiter.clone();
        let auth_store = state.auth.clone();
        tokio::spawn(async move {
            let mut ticker = time::interval(TokioDuration::from_secs(300));
            loop {
                ticker.tick().await;
                rl.cleanup_all().await;
                auth_store.purge_expired().await;
            }
        });
    }

    // Static file service für die SPA mit Fallback auf index.html, damit die
    // Client-Routen /, /folder/*, /dashboard und /login funktionieren.
    let (ui_root, ui_index) = {
        let runtime_ui = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("ui")))
            .unwrap_or_else(|| std::path::PathBuf::from("ui"));
        let runtime_index = runtime_ui.join("index.html");
        if runtime_ui.is_dir() && runtime_index.is_file() {
            (runtime_ui, runtime_index)
        } else {
            (std::path::PathBuf::from(UI_DIR), std::path::PathBuf::from(UI_INDEX))
        }
    };
    let static_ui_service = ServeDir::new(ui_root)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(ui_index));

    // Clone config Arc for stateful middleware
    let cfg_arc = state.config.clone();

    // Protected API surface: everything behind the login wall
    let protected = Router::new()
        .route("/folders", get(routes::folders::tree).post(routes::folders::create_folder))
        .route("/folders/resolve", get(routes::folders::resolve))
        .route("/folders/{id}", get(routes::folders::get_folder))
        .route("/folders/{id}/entries", get(routes::entries::list_entries))
        .route("/entries/{id}", delete(routes::entries::delete_entry))
        .route("/entries/{id}/rename", post(routes::entries::rename_entry))
        .route("/uploads", post(routes::entries::upload))
        .route("/search", get(routes::search::search))
        .route("/dashboard/summary", get(routes::dashboard::summary))
        .route("/dashboard/trends", get(routes::dashboard::trends))
        .route("/dashboard/recent", get(routes::dashboard::recent))
        .route("/auth/profile", get(routes::auth::profile))
        .route("/auth/logout", post(routes::auth::logout))
        .route_layer(from_fn_with_state(state.clone(), middleware::auth::require_auth_middleware));

    let app = Router::new()
        .route("/healthz", get(routes::health::healthz))
        .route("/readyz", get(routes::health::readyz))
        .route("/metrics", get(routes::health::metrics))
        .route("/metrics/prometheus", get(routes::health::metrics_prometheus))
        .route("/version", get(routes::health::version))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh-token", post(routes::auth::refresh_token))
        .merge(protected)
        .fallback_service(static_ui_service)
        .with_state(state)
        // Globales Body-Limit (1 MB) – die API nimmt nur kleine JSON-Bodies an
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg_arc, middleware::security_headers::security_headers_middleware));

    // CORS: in Debug permissiv (für lokale Entwicklung mit separater UI), in Release nicht nötig (same-origin)
    let app = if cfg!(debug_assertions) { app.layer(CorsLayer::permissive()) } else { app };

    // Server listen addr (from config)
    let port: u16 = app_cfg.server.port;
    let host: String = app_cfg.server.host.clone();
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid listen addr {}:{} - {}", host, port, e))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Aktenwald listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received. Stopping server...");
}
