#![allow(clippy::module_inception)]
mod cache;
mod client;
mod dispatcher;
pub mod error;

pub use cache::SupportCache;
pub use client::{HttpClient, VoynichClient};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};

#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;

// Re-export core types for convenience
pub use voynich_core::{
    constants, ConsentEnvelope, Failure, FailureKind, Period, PowerQuery, Reply, Request,
    Transaction, TransactionAction, Wallet,
};
