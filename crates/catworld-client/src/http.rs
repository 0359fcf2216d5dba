//! Shared HTTP plumbing: client construction and response classification
//!
//! Every outbound call funnels through [`get_json`], which maps transport,
//! status and body problems onto the three fetch error variants.

use std::time::Duration;

use catworld_core::prelude::*;
use serde::de::DeserializeOwned;
use url::Url;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("catworld/", env!("CARGO_PKG_VERSION"));

/// Build a reqwest client whose requests are bounded by `timeout`
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))
}

/// Parse a service base URL, normalizing it so relative joins append.
///
/// `https://host/api` becomes `https://host/api/` so that joining `fact`
/// yields `https://host/api/fact` instead of replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| Error::config(format!("invalid URL '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(Error::config(format!("URL '{}' cannot be a base", raw)));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Join a relative path onto a normalized base URL
pub fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::config(format!("cannot join '{}' onto {}: {}", path, base, e)))
}

/// GET `url` and decode the JSON body into `T`
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &Url) -> Result<T> {
    trace!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        debug!("GET {} returned {}", url, status);
        return Err(Error::bad_response(url.as_str(), status.as_u16()));
    }

    let body = response.bytes().await.map_err(|e| transport_error(url, e))?;

    serde_json::from_slice::<T>(&body)
        .map_err(|e| Error::malformed_body(format!("{} from {}", e, url)))
}

fn transport_error(url: &Url, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::network(format!("request to {} timed out", url))
    } else if err.is_connect() {
        Error::network(format!("could not connect to {}: {}", url, err))
    } else {
        Error::network(format!("request to {} failed: {}", url, err))
    }
}
