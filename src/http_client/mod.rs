//! HTTP client for CDN downloads.

mod response;

pub use response::HttpResponse;

use std::time::Duration;

use reqwest::Client;

/// User agent sent with every CDN request.
pub const USER_AGENT: &str = concat!("jsvendor/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a fixed timeout and no retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request. Redirects are followed; the final status is
    /// returned as-is, including error statuses.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());

        Ok(HttpResponse {
            status: response.status(),
            response,
        })
    }
}
