#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{body::Body, http::Request, Json};
    use std::net::IpAddr;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::middleware::auth::bearer_token;
    use crate::middleware::ip::extract_ip_from_headers;
    use crate::middleware::rate_limit::{EndpointRateLimiter, RateLimiter};

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_rate_limiter_allows_up_to_the_limit() {
        let limiter = RateLimiter::new(3, 60);
        let client = ip("10.0.0.1");
        for _ in 0..3 {
            assert!(limiter.check_rate_limit(client).await.is_ok());
        }
        let err = limiter.check_rate_limit(client).await.unwrap_err();
        assert_eq!(err.0, StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_rate_limiter_isolates_clients() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.check_rate_limit(ip("10.0.0.1")).await.is_ok());
        assert!(limiter.check_rate_limit(ip("10.0.0.2")).await.is_ok());
        assert!(limiter.check_rate_limit(ip("10.0.0.1")).await.is_err());
    }

    #[tokio::test]
    async fn test_rate_limiter_window_expiry() {
        // A 0-second window expires immediately, so nothing ever blocks.
        let limiter = RateLimiter::new(1, 0);
        let client = ip("10.0.0.3");
        assert!(limiter.check_rate_limit(client).await.is_ok());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        assert!(limiter.check_rate_limit(client).await.is_ok());
        limiter.cleanup_old_entries().await;
    }

    #[tokio::test]
    async fn test_endpoint_limiter_only_guards_configured_routes() {
        let limiter = EndpointRateLimiter::new().with_limits(vec![("/auth/login", 1, 60)]);
        let client = ip("10.0.0.4");
        assert!(limiter.check_endpoint_limit("/auth/login", client).await.is_ok());
        assert!(limiter.check_endpoint_limit("/auth/login", client).await.is_err());
        // Unconfigured endpoints pass unchecked.
        for _ in 0..10 {
            assert!(limiter.check_endpoint_limit("/folders", client).await.is_ok());
        }
        limiter.cleanup_all().await;
    }

    #[test]
    fn test_extract_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(extract_ip_from_headers(&headers, None), ip("203.0.113.7"));

        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(extract_ip_from_headers(&headers, None), ip("198.51.100.2"));

        // Garbage in the proxy headers falls through to the transport address.
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));
        assert_eq!(extract_ip_from_headers(&headers, Some(ip("192.0.2.9"))), ip("192.0.2.9"));

        let headers = HeaderMap::new();
        assert_eq!(extract_ip_from_headers(&headers, None), ip("127.0.0.1"));
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("bearer abc123"), None);
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("abc123"), None);
    }

    #[tokio::test]
    async fn test_security_headers_are_applied() {
        let cfg = Arc::new(crate::config::AppConfig {
            server: crate::config::ServerConfig { host: "127.0.0.1".to_string(), port: 8090 },
            listing: crate::config::ListingConfig {
                page_size: 5,
                max_page_size: 50,
                simulated_latency_ms: 0,
            },
            auth: crate::config::AuthConfig { access_ttl_secs: 3600, refresh_ttl_secs: 604800 },
            security: Some(crate::config::SecurityConfig {
                enable_hsts: Some(true),
                hsts_max_age: Some(60),
                hsts_include_subdomains: Some(true),
                csp: Some("default-src 'self'".to_string()),
            }),
        });

        async fn handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({"ok": true}))
        }

        let app = axum::Router::new().route("/", get(handler)).layer(from_fn_with_state(
            cfg,
            crate::middleware::security_headers::security_headers_middleware,
        ));

        let response =
            app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "SAMEORIGIN");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
        assert_eq!(
            headers.get("strict-transport-security").unwrap(),
            "max-age=60; includeSubDomains"
        );
        assert_eq!(headers.get("content-security-policy").unwrap(), "default-src 'self'");
        // JSON responses carry a no-store caching policy.
        assert_eq!(headers.get("cache-control").unwrap(), "no-store");
        assert_eq!(headers.get("pragma").unwrap(), "no-cache");
    }
}
