//! Converts a track link from one streaming service into the equivalent link on another.
//!
//! The pipeline lives in [`converter`], the per-service API clients in [`providers`],
//! and the HTTP surface in [`api`].

use std::sync::LazyLock;

/// HTTP endpoint and request handling.
pub mod api;
/// Startup configuration read from the environment.
pub mod config;
/// Link parsing, matching and the conversion pipeline.
pub mod converter;
/// Streaming service API clients.
pub mod providers;

/// Shared HTTP client used for every upstream call. Holds only the connection pool.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);
