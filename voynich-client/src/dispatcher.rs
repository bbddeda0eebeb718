use serde_json::Value;
use url::Url;
use voynich_core::{Failure, Reply, Request};

use crate::client::HttpClient;
use crate::error::Result;

/// Exchanges one request with the mainnet.
///
/// Exactly one attempt is made. Whatever goes wrong on the way (encoding,
/// transport, a non-2xx status, a body that is not JSON) is logged and turned
/// into the uniform transport failure; it never reaches the caller as an error.
#[derive(Clone, Debug)]
pub struct Dispatcher<H: HttpClient> {
    http_client: H,
    endpoint: Url,
}

impl<H: HttpClient> Dispatcher<H> {
    pub fn new(endpoint: Url, http_client: H) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn send(&self, request: &Request) -> Reply {
        log::debug!("dispatching `{}` to {}", request.action(), self.endpoint);

        match self.round_trip(request).await {
            Ok(body) => Reply::Network(body),
            Err(e) => {
                let failure = Failure::transport();
                log::error!(
                    "voynich mainnet communication error ({:?} failure on `{}`): {}",
                    failure.kind,
                    request.action(),
                    e
                );
                failure.into()
            }
        }
    }

    async fn round_trip(&self, request: &Request) -> Result<Value> {
        let json_body = serde_json::to_string(request)?;
        let body = self
            .http_client
            .post_json(self.endpoint.as_str(), &json_body)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
