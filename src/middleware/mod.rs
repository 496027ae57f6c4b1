//! Middleware components for HTTP request processing.
//!
//! Cross-cutting concerns layered onto the router: bearer-token
//! authentication for the protected API surface, per-endpoint rate limiting,
//! client IP extraction behind proxies, and security headers.

pub mod auth;
pub mod ip;
pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::EndpointRateLimiter;
