use crate::error::Result;
use async_trait::async_trait;

/// Minimal async HTTP client trait that can be implemented with any HTTP library.
///
/// The mainnet only ever receives JSON `POST`s, so that is all the trait asks
/// for. Enable the `reqwest-client` feature for a ready-made implementation,
/// or bring your own:
///
/// ```ignore
/// use async_trait::async_trait;
/// use voynich_client::{HttpClient, Result};
///
/// #[derive(Clone)]
/// struct MyHttpClient;
///
/// #[async_trait]
/// impl HttpClient for MyHttpClient {
///     async fn post_json(&self, url: &str, json_body: &str) -> Result<String> {
///         // send `json_body` with `Content-Type: application/json`
///         Ok("{\"status\":true}".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a POST request with a JSON body.
    ///
    /// Implementations must return an error for transport failures and for
    /// non-2xx responses; the body of a successful response is returned
    /// as-is, already decompressed.
    async fn post_json(&self, url: &str, json_body: &str) -> Result<String>;
}
