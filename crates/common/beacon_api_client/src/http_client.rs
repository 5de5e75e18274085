use std::time::Duration;

use anyhow::anyhow;
use reqwest::{
    Client, RequestBuilder, Url,
    header::{ACCEPT, HeaderValue},
};

pub const JSON_ACCEPT_PRIORITY: &str = "application/json;q=1";
const USER_AGENT: &str = concat!("slashwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
}

impl ClientWithBaseUrl {
    pub fn new(url: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| anyhow!("Failed to build HTTP client {err:?}"))?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an absolute API path such as `/eth/v1/events` against the endpoint.
    pub fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    pub fn get_json(&self, path: &str) -> Result<RequestBuilder, url::ParseError> {
        Ok(self
            .client
            .get(self.url(path)?)
            .header(ACCEPT, HeaderValue::from_static(JSON_ACCEPT_PRIORITY)))
    }
}
