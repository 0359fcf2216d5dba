//! Message processing: run the TEA update loop and dispatch its actions

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use catworld_client::CatApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call, so a single input can
/// chain through several handlers before the next frame is drawn.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    A: CatApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api.clone(), shutdown_rx.clone());
        }

        msg = result.message;
    }
}
