//! Application state: value types, the central [`AppState`] container, and
//! the [`Modal`] dialog union.
//!
//! Split into smaller files with the public API re-exported under
//! `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Artwork, ArtworkPage, PageRequest, PageResponse};
