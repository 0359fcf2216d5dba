//! Test utilities for the client layer
//!
//! Provides [`FakeCatApi`], a scripted in-memory `CatApi` with call counters
//! and per-call latency, for exercising fetch logic without a network.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use catworld_core::prelude::*;

use crate::api::CatApi;

/// URL returned by a default [`FakeCatApi`] image search
pub const FAKE_IMAGE_URL: &str = "https://cdn.example.test/cat-of-the-day.jpg";

/// Scripted `CatApi`.
///
/// Fact call `i` (counting from zero across the fake's lifetime) returns
/// `"fact #i"` after `fact_delays[i]`, or fails if `i` was marked failing.
#[derive(Debug)]
pub struct FakeCatApi {
    fact_calls: AtomicUsize,
    image_calls: AtomicUsize,
    fact_delays: Vec<Duration>,
    failing_fact_calls: HashSet<usize>,
    image_url: Option<String>,
    image_delay: Duration,
}

impl Default for FakeCatApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCatApi {
    pub fn new() -> Self {
        Self {
            fact_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            fact_delays: Vec::new(),
            failing_fact_calls: HashSet::new(),
            image_url: Some(FAKE_IMAGE_URL.to_string()),
            image_delay: Duration::ZERO,
        }
    }

    pub fn with_fact_delays(mut self, delays: Vec<Duration>) -> Self {
        self.fact_delays = delays;
        self
    }

    /// Make fact call number `index` fail with a network error
    pub fn failing_fact_call(mut self, index: usize) -> Self {
        self.failing_fact_calls.insert(index);
        self
    }

    /// Make every image search fail
    pub fn failing_image(mut self) -> Self {
        self.image_url = None;
        self
    }

    pub fn with_image_delay(mut self, delay: Duration) -> Self {
        self.image_delay = delay;
        self
    }

    pub fn fact_calls(&self) -> usize {
        self.fact_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

impl CatApi for FakeCatApi {
    async fn fetch_fact(&self) -> Result<String> {
        let index = self.fact_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.fact_delays.get(index) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_fact_calls.contains(&index) {
            return Err(Error::network(format!("scripted failure on call {}", index)));
        }

        Ok(format!("fact #{}", index))
    }

    async fn search_image(&self) -> Result<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);

        if !self.image_delay.is_zero() {
            tokio::time::sleep(self.image_delay).await;
        }

        self.image_url
            .clone()
            .ok_or_else(|| Error::bad_response("fake://images", 503))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_counts_calls() {
        let api = FakeCatApi::new();
        assert_eq!(api.fetch_fact().await.unwrap(), "fact #0");
        assert_eq!(api.fetch_fact().await.unwrap(), "fact #1");
        assert_eq!(api.search_image().await.unwrap(), FAKE_IMAGE_URL);
        assert_eq!(api.fact_calls(), 2);
        assert_eq!(api.image_calls(), 1);
    }

    #[tokio::test]
    async fn test_fake_failures() {
        let api = FakeCatApi::new().failing_fact_call(0).failing_image();
        assert!(api.fetch_fact().await.is_err());
        assert!(api.fetch_fact().await.is_ok());
        assert!(api.search_image().await.unwrap_err().is_fetch_failure());
    }
}
