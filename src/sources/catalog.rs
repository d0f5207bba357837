//! Artwork catalog client: fetches one page of records plus the total count.
//!
//! The remote contract is `GET <base>?page=<p>&limit=<n>` returning
//! `{ "data": [...], "pagination": { "total": N, ... } }` with 1-indexed
//! pages. Fetch failures are reported to the caller; there is no automatic
//! retry here.

use std::sync::LazyLock;
use std::time::Duration;

use serde_json::Value;

use super::Result;
use crate::state::{Artwork, ArtworkPage};

/// Base URL of the artwork catalog API.
pub const API_BASE: &str = "https://api.artic.edu/api/v1/artworks";

/// Fixed page size for every catalog request.
pub const PAGE_SIZE: usize = 12;

/// Shared HTTP client with connection pooling for catalog requests.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("curio/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Fetch one page of the catalog.
///
/// Inputs:
/// - `page`: 1-indexed page number.
/// - `page_size`: Records per page (the app always passes [`PAGE_SIZE`]).
///
/// Output: the page's records in server order plus the grand total.
///
/// # Errors
/// Network failures, non-success status codes, and malformed bodies all
/// surface as errors; the caller decides how to display them.
pub async fn fetch_page(page: usize, page_size: usize) -> Result<ArtworkPage> {
    let url = format!("{API_BASE}?page={page}&limit={page_size}");
    tracing::debug!(url = %url, "fetching catalog page");
    let body: Value = HTTP_CLIENT
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    parse_page(&body)
}

/// What: Turn a catalog response body into an [`ArtworkPage`].
///
/// Details:
/// - `pagination.total` and the `data` array are required; anything else is
///   optional. Records are deserialized individually so one malformed entry
///   (e.g. missing its `id`) is skipped rather than failing the page.
///
/// # Errors
/// Returns an error when the body lacks `pagination.total` or a `data`
/// array.
pub fn parse_page(v: &Value) -> Result<ArtworkPage> {
    let total = v
        .get("pagination")
        .and_then(|p| p.get("total"))
        .and_then(Value::as_u64)
        .ok_or("catalog response missing pagination.total")?;
    let arr = v
        .get("data")
        .and_then(Value::as_array)
        .ok_or("catalog response missing data array")?;

    let mut records = Vec::with_capacity(arr.len());
    for obj in arr {
        match serde_json::from_value::<Artwork>(obj.clone()) {
            Ok(rec) => records.push(rec),
            Err(e) => tracing::debug!(error = %e, "skipping malformed catalog record"),
        }
    }
    Ok(ArtworkPage {
        records,
        total: usize::try_from(total).unwrap_or(usize::MAX),
    })
}
