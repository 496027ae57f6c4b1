use std::sync::Arc;

use crate::auth::AuthStore;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::middleware::EndpointRateLimiter;
use crate::vfs::Vfs;

/// The shared application state.
///
/// Holds the immutable virtual filesystem, the configuration, metrics, the
/// rate limiter, and the auth store. Cloneable for Axum's state extraction;
/// all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// The virtual filesystem. Built once at startup from the seed dataset,
    /// never mutated afterwards.
    pub vfs: Arc<Vfs>,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Counters for operational metrics.
    pub metrics: Metrics,
    /// The per-endpoint rate limiter.
    pub rate_limiter: EndpointRateLimiter,
    /// Demo users and issued tokens.
    pub auth: AuthStore,
}

impl AppState {
    pub fn new(vfs: Vfs, config: AppConfig) -> Self {
        let rate_limiter = EndpointRateLimiter::new().with_limits(vec![
            ("/auth/login", 10, 60), // 10 login attempts per minute
            ("/search", 300, 60),    // 300 searches per minute
        ]);
        let auth = AuthStore::new(&config.auth);

        Self {
            vfs: Arc::new(vfs),
            config: Arc::new(config),
            metrics: Metrics::new(),
            rate_limiter,
            auth,
        }
    }
}
