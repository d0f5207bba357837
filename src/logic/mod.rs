//! Pure application logic, free of I/O and rendering.
//!
//! `paging` holds page-window arithmetic; `selection` holds the selection
//! engine that reconciles manual per-row edits with bulk "first N" targets.
//! Everything here is synchronous and deterministic so it can be unit tested
//! without a terminal or network.

pub mod paging;
pub mod selection;

pub use paging::{PageWindow, page_count};
pub use selection::{SelectionEvent, SelectionMode, SelectionState, parse_bulk_input};
