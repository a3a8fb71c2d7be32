//! REST client
//!
//! Fetches JSON documents from the service, consulting the response cache
//! by full request URL before going to the network.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage};

/// Client for the location-area endpoints of the REST service.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that shares `cache`.
    pub fn new(base_url: impl Into<String>, cache: Arc<ResponseCache>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            cache,
        }
    }

    /// The cache consulted by this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// Fetches a page of location areas, the first page when `page_url` is `None`.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch(url).await,
            None => self.fetch(&self.first_location_page_url()).await,
        }
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch(&self.location_area_url(name)).await
    }

    /// Fetches `url` and decodes the body as `T`.
    ///
    /// A cached body is decoded without touching the network. Otherwise the
    /// body of a successful response is cached before decoding, so a body
    /// that fails to decode is not fetched again until it is swept.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_body(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_body(&self, url: &str) -> Result<Arc<[u8]>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body: Arc<[u8]> = response.bytes().await?.to_vec().into();
        self.cache.add(url, Arc::clone(&body));
        Ok(body)
    }
}
