use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP POST failed: {0}")]
    HttpPost(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] voynich_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
