pub mod constants;
pub mod error;
mod period;
mod reply;
mod request;
mod signing;
mod transaction;
mod wallet;

pub use error::{Error, Result, ValidationError};
pub use period::Period;
pub use reply::{Failure, FailureKind, Reply};
pub use request::{CloseRequest, PowerQuery, Request};
pub use signing::{
    broker_sign, build_consensus, derive, dual_sign, BrokerConsent, Consensus, ConsentEnvelope,
    Derivation, DigestAlgorithm,
};
pub use transaction::{check, is_formatted, Transaction, TransactionAction};
pub use wallet::Wallet;
