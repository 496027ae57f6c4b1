use axum::{http::StatusCode, Json};
use serde_json::json;
use std::{
    collections::HashMap,
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

/// A thread-safe rate limiter based on the sliding window algorithm.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<RwLock<HashMap<IpAddr, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window_seconds`.
    pub fn new(max_requests: usize, window_seconds: u64) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_seconds),
        }
    }

    /// Checks whether a request from `ip` is allowed. Allowed requests are
    /// recorded; rejected ones get the ready-made 429 response.
    pub async fn check_rate_limit(
        &self,
        ip: IpAddr,
    ) -> Result<(), (StatusCode, Json<serde_json::Value>)> {
        let now = Instant::now();
        let mut requests = self.requests.write().await;
        let timestamps = requests.entry(ip).or_insert_with(Vec::new);

        // Drop timestamps outside the window. On clock skew keep the entry,
        // which errs on the side of limiting.
        timestamps
            .retain(|&t| now.checked_duration_since(t).map(|d| d < self.window).unwrap_or(true));

        if timestamps.len() >= self.max_requests {
            let oldest = timestamps.first().copied().unwrap_or(now);
            let retry_after = now
                .checked_duration_since(oldest)
                .map(|elapsed| self.window.saturating_sub(elapsed))
                .unwrap_or(Duration::from_secs(1));

            return Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": {
                        "code": "RATE_LIMITED",
                        "message": format!(
                            "Too many requests. Please retry after {} seconds",
                            retry_after.as_secs()
                        ),
                    },
                    "retry_after_seconds": retry_after.as_secs(),
                    "status": 429,
                })),
            ));
        }

        timestamps.push(now);
        Ok(())
    }

    /// Removes stale entries so idle IPs do not accumulate.
    pub async fn cleanup_old_entries(&self) {
        let now = Instant::now();
        let mut requests = self.requests.write().await;
        requests.retain(|_, timestamps| {
            timestamps
                .retain(|&t| now.checked_duration_since(t).map(|d| d < self.window).unwrap_or(true));
            !timestamps.is_empty()
        });
    }
}

/// Per-endpoint rate limiting: each configured endpoint gets its own
/// sliding-window limiter; unconfigured endpoints pass unchecked.
#[derive(Clone, Default)]
pub struct EndpointRateLimiter {
    limiters: HashMap<&'static str, RateLimiter>,
}

impl EndpointRateLimiter {
    pub fn new() -> Self {
        Self { limiters: HashMap::new() }
    }

    /// Configures limits as `(endpoint, max_requests, window_seconds)`.
    pub fn with_limits(mut self, limits: Vec<(&'static str, usize, u64)>) -> Self {
        for (endpoint, max, window) in limits {
            self.limiters.insert(endpoint, RateLimiter::new(max, window));
        }
        self
    }

    pub async fn check_endpoint_limit(
        &self,
        endpoint: &str,
        ip: IpAddr,
    ) -> Result<(), (StatusCode, Json<serde_json::Value>)> {
        match self.limiters.get(endpoint) {
            Some(limiter) => limiter.check_rate_limit(ip).await,
            None => Ok(()),
        }
    }

    pub async fn cleanup_all(&self) {
        for limiter in self.limiters.values() {
            limiter.cleanup_old_entries().await;
        }
    }
}
