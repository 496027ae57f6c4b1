//! # Aktenwald Backend Library
//!
//! Aktenwald is a demo file-manager backend serving a virtual, in-memory
//! filesystem over a REST API: folder navigation with breadcrumbs, filtered
//! and paginated listings, global search, simulated auth, and a small
//! analytics dashboard.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **Tokio**: Async runtime for concurrent operations
//! - **Serde**: Serialization/deserialization for JSON APIs
//! - **Tracing**: Structured logging with file rotation
//!
//! ## Core Components
//!
//! - [`auth`]: Demo users and in-memory token management
//! - [`config`]: Application configuration management
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Application usage metrics
//! - [`middleware`]: HTTP middleware for auth, rate limiting, and security headers
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Data transfer objects and shared type definitions
//! - [`vfs`]: The virtual filesystem - tree model, invariants, and queries
//!
//! ## Features
//!
//! - Parent-pointer folder tree with validated invariants, modeled once and
//!   projected into uniform display entries on demand
//! - Navigation by folder id or path with surfaced fallback-to-root
//! - Case-insensitive substring search plus extension-derived category filter
//! - Stateless limit/offset pagination for infinite-scroll clients
//! - Token-based demo auth with refresh rotation
//! - Rate limiting and security headers
//! - Comprehensive error handling and logging

pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;
pub mod vfs;

#[cfg(test)]
mod tests;
