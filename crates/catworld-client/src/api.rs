//! The `CatApi` service trait and its HTTP implementation

use std::time::Duration;

use catworld_core::prelude::*;
use serde::Deserialize;
use url::Url;

use crate::http::{self, DEFAULT_TIMEOUT};

/// Default base URL of the random-fact service
pub const DEFAULT_FACT_BASE_URL: &str = "https://catfact.ninja";

/// Default base URL of the image-search service
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://api.thecatapi.com";

/// Body of `GET /fact`
#[derive(Debug, Clone, Deserialize)]
pub struct FactResponse {
    pub fact: String,
}

/// One element of the `GET /v1/images/search` array; only the URL is read
#[derive(Debug, Clone, Deserialize)]
pub struct CatImage {
    pub url: String,
}

/// Outbound calls made by the page
#[trait_variant::make(CatApi: Send)]
pub trait LocalCatApi {
    /// Fetch one random fact
    async fn fetch_fact(&self) -> Result<String>;

    /// Search for a random image and return the first result's URL
    async fn search_image(&self) -> Result<String>;
}

/// Resolved service endpoints
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub fact: Url,
    pub image_search: Url,
}

impl Endpoints {
    pub fn new(fact_base_url: &str, image_base_url: &str) -> Result<Self> {
        let fact_base = http::parse_base_url(fact_base_url)?;
        let image_base = http::parse_base_url(image_base_url)?;
        Ok(Self {
            fact: http::join(&fact_base, "fact")?,
            image_search: http::join(&image_base, "v1/images/search")?,
        })
    }
}

/// `CatApi` backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpCatApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpCatApi {
    /// Client for the public services with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_FACT_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_config(
        fact_base_url: &str,
        image_base_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoints = Endpoints::new(fact_base_url, image_base_url)?;
        let client = http::build_client(timeout)?;
        info!(
            "HTTP client ready: fact={}, images={}, timeout={:?}",
            endpoints.fact, endpoints.image_search, timeout
        );
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl CatApi for HttpCatApi {
    async fn fetch_fact(&self) -> Result<String> {
        let body: FactResponse = http::get_json(&self.client, &self.endpoints.fact).await?;
        Ok(body.fact)
    }

    async fn search_image(&self) -> Result<String> {
        let images: Vec<CatImage> =
            http::get_json(&self.client, &self.endpoints.image_search).await?;

        images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| Error::malformed_body("image search returned an empty array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_defaults() {
        let endpoints = Endpoints::new(DEFAULT_FACT_BASE_URL, DEFAULT_IMAGE_BASE_URL).unwrap();
        assert_eq!(endpoints.fact.as_str(), "https://catfact.ninja/fact");
        assert_eq!(
            endpoints.image_search.as_str(),
            "https://api.thecatapi.com/v1/images/search"
        );
    }

    #[test]
    fn test_fact_response_ignores_extra_fields() {
        let body: FactResponse =
            serde_json::from_str(r#"{"fact":"Cats purr.","length":10,"extra":true}"#).unwrap();
        assert_eq!(body.fact, "Cats purr.");
    }

    #[test]
    fn test_cat_image_requires_url() {
        let result = serde_json::from_str::<Vec<CatImage>>(r#"[{"id":"abc"}]"#);
        assert!(result.is_err());
    }
}
