//! HTTP page fetching for vendor adapters

use std::time::Duration;

use tracing::debug;

use crate::types::{PartPriceError, Result, Vendor};

/// Source of vendor result pages.
///
/// The lookup service only talks to vendors through this trait, so tests can
/// serve canned HTML without a network.
pub trait HtmlFetcher: Send + Sync {
    /// GET `url` and return the response body
    fn fetch(&self, vendor: Vendor, url: &str) -> Result<String>;
}

/// Blocking reqwest fetcher with a browser-like user agent
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher. `timeout = None` waits indefinitely.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| PartPriceError::Config(format!("HTTP client error: {}", e)))?;
        Ok(Self { client })
    }
}

impl HtmlFetcher for HttpFetcher {
    fn fetch(&self, vendor: Vendor, url: &str) -> Result<String> {
        debug!(%vendor, url, "fetching vendor page");

        let network = |e: reqwest::Error| PartPriceError::Network {
            vendor,
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(network)?;

        response.text().map_err(network)
    }
}
