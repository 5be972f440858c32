//! Prott API client holding the login session

use super::cookies::SessionJar;
use super::url::Endpoints;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;

/// Client type the Prott API expects; sent as both User-Agent and App-Type
const APP_TYPE: &str = "sketch";

/// Prott API client
///
/// Every request goes through the same `reqwest::Client`, whose cookie store
/// keeps the session cookie set by a successful login. Cookies scoped to a
/// public suffix are refused.
pub struct ProttClient {
    client: Client,
    endpoints: Endpoints,
}

impl ProttClient {
    /// Create a client for the service rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoints = Endpoints::parse(base_url)?;
        Self::with_endpoints(endpoints)
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .cookie_provider(Arc::new(SessionJar::default()))
            .build()
            .map_err(client_error)?;

        Ok(Self { client, endpoints })
    }

    /// Get the resolved endpoint URLs
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Get a reference to the underlying HTTP client
    pub fn http(&self) -> &Client {
        &self.client
    }
}

fn client_error(e: reqwest::Error) -> Error {
    Error::Client(e.to_string())
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(APP_TYPE));
    headers.insert("App-Type", HeaderValue::from_static(APP_TYPE));
    headers
}
