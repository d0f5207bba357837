//! Remote data sources.
//!
//! The catalog client lives here, isolated from the rest of the app so the
//! response parsing can be exercised offline in tests.

pub mod catalog;

pub use catalog::{fetch_page, parse_page};

/// Result type shared by source fetchers.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
