//! View lifecycle handlers: mount, teardown, and fetch results

use catworld_core::prelude::*;
use catworld_core::{PageVariant, ViewToken};

use crate::message::Message;
use crate::query_cache::CAT_OF_THE_DAY_KEY;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Mount the current variant: start the fact refresh and chain into the
/// cat-of-the-day mount where the variant has one.
pub fn handle_mount(state: &mut AppState) -> UpdateResult {
    info!("Mounting {} page ({})", state.variant, state.view);

    let mut result = match state.fact_batch_size() {
        Some(count) if state.facts.begin_refresh() => UpdateResult::action(UpdateAction::FetchFacts {
            token: state.view,
            count,
        }),
        _ => UpdateResult::none(),
    };

    if state.variant.has_cat_of_the_day() {
        result = result.then(Message::MountCatOfTheDay);
    }

    result
}

/// Issue the image search unless the query cache already knows the key
pub fn handle_mount_cat_of_the_day(state: &mut AppState) -> UpdateResult {
    if state.query_cache.begin(CAT_OF_THE_DAY_KEY) {
        debug!("Cat of the day: cache miss, fetching");
        UpdateResult::action(UpdateAction::FetchCatOfTheDay)
    } else {
        debug!("Cat of the day: served from cache");
        UpdateResult::none()
    }
}

pub fn handle_switch_variant(state: &mut AppState, variant: PageVariant) -> UpdateResult {
    if variant == state.variant {
        return UpdateResult::none();
    }

    info!("Switching page from {} to {}", state.variant, variant);
    state.teardown_view();
    state.variant = variant;
    state.reset_view_state();
    UpdateResult::message(Message::Mount)
}

pub fn handle_refresh_facts(state: &mut AppState) -> UpdateResult {
    let Some(count) = state.fact_batch_size() else {
        return UpdateResult::none();
    };

    if !state.facts.begin_refresh() {
        debug!("Fact refresh already in flight, ignoring");
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::FetchFacts {
        token: state.view,
        count,
    })
}

pub fn handle_facts_loaded(
    state: &mut AppState,
    token: ViewToken,
    facts: Vec<String>,
    failed: bool,
) -> UpdateResult {
    if token != state.view {
        debug!(
            "Dropping facts for torn-down {} (current {})",
            token, state.view
        );
        return UpdateResult::none();
    }

    debug!("Applying {} fact(s), failed={}", facts.len(), failed);
    state.facts.apply(facts, failed);
    UpdateResult::none()
}

/// Resolve the session-scoped image query.
///
/// The cache outlives any single view, so the result is applied even if the
/// view that issued it has since been torn down.
pub fn handle_cat_of_the_day_loaded(state: &mut AppState, url: Option<String>) -> UpdateResult {
    match &url {
        Some(u) => info!("Cat of the day: {}", u),
        None => warn!("Cat of the day unavailable"),
    }
    state.query_cache.resolve(CAT_OF_THE_DAY_KEY, url);
    UpdateResult::none()
}
