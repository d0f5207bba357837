//! Core value types used by Curio state.

/// One catalog record.
///
/// The selection engine only ever inspects `id`; every other field exists for
/// display and renders as `"N/A"` when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Artwork {
    /// Stable unique identifier assigned by the catalog.
    pub id: i64,
    /// Artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Geographic origin.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Free-form artist attribution line.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscription text on the work, if recorded.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest creation year.
    #[serde(default)]
    pub date_start: Option<i64>,
    /// Latest creation year.
    #[serde(default)]
    pub date_end: Option<i64>,
}

/// One fetched page of the catalog plus the server-reported grand total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Records on this page, in server (global) order.
    pub records: Vec<Artwork>,
    /// Total number of records across all pages.
    pub total: usize,
}

/// Page fetch request sent to the background fetch worker.
#[derive(Clone, Copy, Debug)]
pub struct PageRequest {
    /// Monotonic identifier used to discard stale responses.
    pub id: u64,
    /// 1-indexed page to fetch.
    pub page: usize,
}

/// Fetch outcome corresponding to a prior [`PageRequest`].
#[derive(Clone, Debug)]
pub struct PageResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed page number.
    pub page: usize,
    /// The fetched page, or a displayable error description.
    pub result: Result<ArtworkPage, String>,
}
