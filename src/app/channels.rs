//! Channel wiring between the event loop and its background workers.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources;
use crate::sources::catalog::PAGE_SIZE;
use crate::state::{PageRequest, PageResponse};

/// All channel endpoints used for runtime communication.
pub struct Channels {
    /// Sender half for the terminal input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cancellation flag observed by the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Page requests consumed by the fetch worker.
    pub fetch_req_tx: mpsc::UnboundedSender<PageRequest>,
    /// Fetch outcomes consumed by the event loop.
    pub page_res_rx: mpsc::UnboundedReceiver<PageResponse>,
}

impl Channels {
    /// Create the channel pairs and spawn the background fetch worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (page_res_tx, page_res_rx) = mpsc::unbounded_channel::<PageResponse>();

        spawn_fetch_worker(fetch_req_rx, page_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            fetch_req_tx,
            page_res_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Background worker serving page fetch requests one at a time.
///
/// Details:
/// - Errors are stringified into the response; the worker never dies on a
///   failed fetch. It exits when either channel closes.
fn spawn_fetch_worker(
    mut req_rx: mpsc::UnboundedReceiver<PageRequest>,
    res_tx: mpsc::UnboundedSender<PageResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let result = sources::fetch_page(req.page, PAGE_SIZE)
                .await
                .map_err(|e| e.to_string());
            if res_tx
                .send(PageResponse {
                    id: req.id,
                    page: req.page,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    });
}

/// What: Dedicated input thread forwarding crossterm events.
///
/// Details:
/// - Polls with a 50 ms timeout so the cancellation flag is observed
///   promptly; exits when the flag is set or the channel closes.
pub(super) fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
