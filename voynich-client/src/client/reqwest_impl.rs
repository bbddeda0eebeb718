use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_ENCODING, CONTENT_TYPE};
use voynich_core::constants::DEFAULT_TIMEOUT_SECS;

use super::http_trait::HttpClient;
use crate::error::{Error, Result};

/// Async HTTP client implementation using reqwest.
///
/// Responses compressed with gzip or deflate are decoded transparently.
///
/// # Example
///
/// ```ignore
/// use voynich_client::{ReqwestClient, VoynichClient};
///
/// #[tokio::main]
/// async fn main() -> voynich_client::Result<()> {
///     let client = VoynichClient::mainnet(ReqwestClient::new()?)?;
///     let reply = client.supported().await;
///     println!("{}", reply.into_json());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpPost(format!("failed to build reqwest client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, url: &str, json_body: &str) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .body(json_body.to_string())
            .send()
            .await
            .map_err(|e| Error::HttpPost(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::ResponseBody(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::HttpPost(format!("status {}: {}", status, body)));
        }

        Ok(body)
    }
}
