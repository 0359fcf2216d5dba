//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};

use catworld_app::config::Settings;
use catworld_app::{process_message, signals, AppState, Message};
use catworld_client::CatApi;
use catworld_core::prelude::*;

use crate::{event, render, terminal};

/// Run the page until the user quits
pub async fn run<A>(settings: Settings, api: A) -> Result<()>
where
    A: CatApi + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    info!(
        "Starting CatWorld: variant={}, tick={}ms",
        settings.ui.variant, settings.ui.tick_rate_ms
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel for fetch results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Shutdown signal for background fetches
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let api = Arc::new(api);

    // Mount the initial variant
    process_message(&mut state, Message::Mount, &msg_tx, &api, &shutdown_rx);

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        &msg_tx,
        &api,
        &shutdown_rx,
        tick_rate,
    );

    // Outstanding fetches stop; their results are never delivered
    let _ = shutdown_tx.send(true);

    ratatui::restore();
    info!("CatWorld exited");

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
    shutdown_rx: &watch::Receiver<bool>,
    tick_rate: Duration,
) -> Result<()>
where
    A: CatApi + Send + Sync + 'static,
{
    let mut clock = event::TickClock::new(tick_rate, Instant::now());

    while !state.should_quit() {
        // Process fetch results and signals (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, api, shutdown_rx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Drawing frame")?;

        if let Some(message) = event::poll(clock.timeout(Instant::now()))? {
            process_message(state, message, msg_tx, api, shutdown_rx);
        }

        // Animations advance even while input keeps the poll busy
        if clock.take_due(Instant::now()) {
            process_message(state, Message::Tick, msg_tx, api, shutdown_rx);
        }
    }

    Ok(())
}
