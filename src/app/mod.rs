//! Application runtime: terminal lifecycle, channel wiring, background fetch
//! worker, and the event loop.

mod channels;
mod handlers;
mod runtime;
mod terminal;

pub use channels::Channels;
pub use handlers::{handle_page_response, request_page};
pub use runtime::run;
