//! HTTP route handlers for the Aktenwald API.
//!
//! Each sub-module handles a specific domain of functionality:
//!
//! - `auth`: login, token refresh, profile, and logout
//! - `dashboard`: analytics summary, trend series, and recent files
//! - `entries`: folder listings with filtering/pagination plus the demo
//!   rename/delete/upload stubs
//! - `folders`: folder tree, navigation by id or path, create-folder stub
//! - `health`: health check and system status endpoints
//! - `search`: global search across the virtual filesystem

pub mod auth;
pub mod dashboard;
pub mod entries;
pub mod folders;
pub mod health;
pub mod search;
