//! # catworld-client - Remote Cat Services
//!
//! Outbound HTTP to the two public services the page consumes: a random
//! fact endpoint and an image-search endpoint.
//!
//! Depends on [`catworld_core`] for error handling.
//!
//! ## Public API
//!
//! - [`CatApi`] - Service trait (`Send` variant generated by `trait_variant`)
//! - [`HttpCatApi`] - reqwest implementation with a bounded timeout
//! - [`fetch_fact_batch()`] - Concurrent, order-preserving fact batch
//! - [`facts_or_placeholder()`] - Collapse a batch failure to one placeholder
//!
//! All transport, status and decoding problems surface as
//! `Error::Network`, `Error::BadResponse` or `Error::MalformedBody`.

pub mod api;
pub mod facts;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{
    CatApi, CatImage, Endpoints, FactResponse, HttpCatApi, LocalCatApi, DEFAULT_FACT_BASE_URL,
    DEFAULT_IMAGE_BASE_URL,
};
pub use facts::{
    facts_or_placeholder, fetch_fact_batch, placeholder_for, FACTS_PLACEHOLDER, FACT_PLACEHOLDER,
};
pub use http::DEFAULT_TIMEOUT;
