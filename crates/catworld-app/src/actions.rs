//! Action handlers: spawn the background fetches requested by `update`
//!
//! Every fetch runs on its own tokio task and reports back as a [`Message`].
//! Tasks stop early when the shutdown watch flips to `true`; their result is
//! simply never delivered.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use catworld_client::{facts_or_placeholder, fetch_fact_batch, CatApi};
use catworld_core::prelude::*;
use catworld_core::ViewToken;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning its background task
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    shutdown_rx: watch::Receiver<bool>,
) where
    A: CatApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchFacts { token, count } => {
            tokio::spawn(async move {
                if let Some(msg) = until_shutdown(shutdown_rx, fetch_facts(&*api, token, count)).await
                {
                    let _ = msg_tx.send(msg).await;
                }
            });
        }

        UpdateAction::FetchCatOfTheDay => {
            tokio::spawn(async move {
                if let Some(msg) = until_shutdown(shutdown_rx, fetch_cat_of_the_day(&*api)).await {
                    let _ = msg_tx.send(msg).await;
                }
            });
        }
    }
}

/// Fetch one batch of facts and turn the outcome into a message
async fn fetch_facts<A>(api: &A, token: ViewToken, count: usize) -> Message
where
    A: CatApi + Sync,
{
    debug!("Fetching {} fact(s) for {}", count, token);
    let result = fetch_fact_batch(api, count).await;
    let failed = result.is_err();
    Message::FactsLoaded {
        token,
        facts: facts_or_placeholder(result, count),
        failed,
    }
}

async fn fetch_cat_of_the_day<A: CatApi>(api: &A) -> Message {
    debug!("Searching for the cat of the day");
    let url = match api.search_image().await {
        Ok(url) => Some(url),
        Err(e) if e.is_fetch_failure() => {
            warn!("Cat of the day search failed: {}", e);
            None
        }
        Err(e) => {
            error!("Cat of the day search error: {}", e);
            None
        }
    };
    Message::CatOfTheDayLoaded { url }
}

/// Run `fut` unless shutdown is signalled first
async fn until_shutdown<F>(mut shutdown_rx: watch::Receiver<bool>, fut: F) -> Option<F::Output>
where
    F: std::future::Future,
{
    if *shutdown_rx.borrow() {
        return None;
    }

    tokio::select! {
        out = fut => Some(out),
        _ = shutdown_rx.changed() => {
            debug!("Shutdown signalled, abandoning fetch");
            None
        }
    }
}
