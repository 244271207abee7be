//! myFlix Backend Library
//!
//! This library provides the core functionality for the myFlix backend:
//! a REST API over a movie catalog and user accounts, with token-based
//! authentication.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use crate::core::Config;
pub use api::ApiServer;
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = anyhow::Result<T>;
