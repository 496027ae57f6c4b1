//! Integration and unit tests for the Aktenwald application.
//!
//! This module organizes all test modules for the application, providing
//! comprehensive test coverage for different components and functionality.
//!
//! ## Test Modules
//!
//! - **vfs_tests**: Tree invariants, navigation, filtering, and pagination
//! - **auth_api_tests**: Login, token refresh, profile, and logout
//! - **listing_api_tests**: Folder listing, search, and mutation stubs
//! - **dashboard_api_tests**: Dashboard summary, trends, and recent files
//! - **middleware_tests**: Rate limiting, IP extraction, and security headers
//! - **error_tests**: Error handling and validation tests
//! - **config_tests**: Configuration loading and validation tests
//! - **health_api_tests**: Health check and metrics endpoint tests
//!
//! ## Running Tests
//!
//! Tests can be run using:
//! ```bash
//! cargo test
//! ```
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test vfs_tests
//! cargo test listing_api_tests
//! # etc.
//! ```

pub mod vfs_tests;
pub mod middleware_tests;
