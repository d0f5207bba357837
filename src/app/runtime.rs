//! The main event loop and runtime entrypoint.

use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::{Channels, spawn_event_thread};
use super::{handlers, terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that disables the real terminal (used by tests).
const HEADLESS_ENV: &str = "CURIO_TEST_HEADLESS";

/// What: Process one message from any channel.
///
/// Output: `true` when the event loop should exit.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.fetch_req_tx)
        }
        Some(res) = channels.page_res_rx.recv() => {
            handlers::handle_page_response(app, res);
            false
        }
        else => true,
    }
}

/// Run the event loop: redraw after every message until exit is requested.
async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}

/// What: Runtime entrypoint: wire channels, enter the terminal, fetch the
/// first page, and drive the event loop until exit.
///
/// # Errors
/// Terminal setup/teardown failures propagate; everything else is handled
/// inside the loop.
pub async fn run() -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let mut terminal = if headless {
        None
    } else {
        terminal::setup_terminal()?;
        Some(Terminal::new(ratatui::backend::CrosstermBackend::new(
            std::io::stdout(),
        ))?)
    };

    let mut app = AppState::default();
    handlers::request_page(&mut app, 1, &channels.fetch_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    if terminal.is_some() {
        terminal::restore_terminal()?;
    }
    Ok(())
}
