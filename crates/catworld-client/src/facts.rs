//! Batched fact retrieval with ordered, all-or-nothing assembly

use catworld_core::prelude::*;
use futures_util::future::try_join_all;

use crate::api::CatApi;

/// Placeholder shown when a batch of several facts fails
pub const FACTS_PLACEHOLDER: &str = "Failed to fetch cat facts. Please try again later.";

/// Placeholder shown when a single fact fails
pub const FACT_PLACEHOLDER: &str = "Failed to fetch cat fact. Please try again later.";

/// Fetch `count` facts concurrently.
///
/// The returned list is in issue order: slot `i` holds call `i`'s result no
/// matter which call completes first. Any failure fails the whole batch.
pub async fn fetch_fact_batch<A>(api: &A, count: usize) -> Result<Vec<String>>
where
    A: CatApi + Sync,
{
    let count = count.max(1);
    debug!("Fetching {} fact(s)", count);
    try_join_all((0..count).map(|_| api.fetch_fact())).await
}

/// Collapse a batch outcome into the list the page shows.
///
/// Success yields exactly `count` facts; any failure yields exactly one
/// placeholder entry.
pub fn facts_or_placeholder(result: Result<Vec<String>>, count: usize) -> Vec<String> {
    match result {
        Ok(facts) => facts,
        Err(e) => {
            warn!("Fact refresh failed, showing placeholder: {}", e);
            vec![placeholder_for(count).to_string()]
        }
    }
}

/// Placeholder text matching the batch size
pub fn placeholder_for(count: usize) -> &'static str {
    if count > 1 {
        FACTS_PLACEHOLDER
    } else {
        FACT_PLACEHOLDER
    }
}
