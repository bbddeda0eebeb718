mod client;
mod http_trait;
#[cfg(feature = "reqwest-client")]
mod reqwest_impl;

pub use client::VoynichClient;
pub use http_trait::HttpClient;

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::ReqwestClient;
