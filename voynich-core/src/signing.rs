//! Proof-of-consent signing.
//!
//! A consent binds a wallet's secret material to one serialized contract in
//! two PBKDF2 stages:
//!
//! 1. `sigil = derive(key, pen)`, independent of any contract;
//! 2. `consent = derive(contract, sigil)`.
//!
//! Two parties sign the same contract independently and their
//! `(address, consent)` pairs travel together as a [`ConsentEnvelope`].

use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_KEY_LENGTH};
use crate::error::{Error, Result};
use crate::wallet::Wallet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    #[default]
    Sha512,
}

/// PBKDF2 parameters. The default matches what the mainnet expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    pub iterations: u32,
    pub key_length: usize,
    pub algorithm: DigestAlgorithm,
}

impl Default for Derivation {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            key_length: DEFAULT_KEY_LENGTH,
            algorithm: DigestAlgorithm::Sha512,
        }
    }
}

impl Derivation {
    /// Derive a hex-encoded key from `value`, salted with `salt`.
    ///
    /// Empty inputs are valid PBKDF2 inputs and derive normally.
    pub fn derive(&self, value: &[u8], salt: &[u8]) -> Result<String> {
        if self.iterations == 0 {
            return Err(Error::InvalidInput("iteration count must be positive".into()));
        }
        if self.key_length == 0 {
            return Err(Error::InvalidInput("key length must be positive".into()));
        }

        let mut out = vec![0u8; self.key_length];
        let res = match self.algorithm {
            DigestAlgorithm::Sha256 => {
                pbkdf2::pbkdf2::<Hmac<Sha256>>(value, salt, self.iterations, &mut out)
            }
            DigestAlgorithm::Sha384 => {
                pbkdf2::pbkdf2::<Hmac<Sha384>>(value, salt, self.iterations, &mut out)
            }
            DigestAlgorithm::Sha512 => {
                pbkdf2::pbkdf2::<Hmac<Sha512>>(value, salt, self.iterations, &mut out)
            }
        };
        res.map_err(|e| Error::InvalidInput(format!("pbkdf2: {}", e)))?;

        Ok(hex::encode(out))
    }
}

/// [`Derivation::derive`] with the default parameters.
pub fn derive(value: &[u8], salt: &[u8]) -> Result<String> {
    Derivation::default().derive(value, salt)
}

/// One party's proof of consent over a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consensus {
    pub address: String,
    pub consent: String,
}

/// Sign `contract` with one wallet.
///
/// The address and contract may be empty; the key and pen may not.
pub fn build_consensus(contract: &str, wallet: &Wallet) -> Result<Consensus> {
    if wallet.key().is_empty() {
        return Err(Error::InvalidInput("wallet key is empty".into()));
    }
    if wallet.pen().is_empty() {
        return Err(Error::InvalidInput("wallet pen is empty".into()));
    }

    let sigil = derive(wallet.key(), wallet.pen())?;
    let consent = derive(contract.as_bytes(), sigil.as_bytes())?;

    Ok(Consensus {
        address: wallet.address().to_string(),
        consent,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentEnvelope {
    pub member_address: String,
    pub member_consent: String,
    pub broker_address: String,
    pub broker_consent: String,
}

/// Counter-party consent on its own, as sent when closing a liability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerConsent {
    pub broker_address: String,
    pub broker_consent: String,
}

impl From<Consensus> for BrokerConsent {
    fn from(c: Consensus) -> Self {
        Self {
            broker_address: c.address,
            broker_consent: c.consent,
        }
    }
}

/// Sign `contract` for both the acting wallet and its counter-party.
pub fn dual_sign(contract: &str, wallet: &Wallet, counterparty: &Wallet) -> Result<ConsentEnvelope> {
    // the two derivations share nothing, run them side by side when we can
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    let (member, broker) = rayon::join(
        || build_consensus(contract, wallet),
        || build_consensus(contract, counterparty),
    );

    // Sequential fallback (WASM or no parallel feature)
    #[cfg(not(all(not(target_arch = "wasm32"), feature = "parallel")))]
    let (member, broker) = (
        build_consensus(contract, wallet),
        build_consensus(contract, counterparty),
    );

    let (member, broker) = (member?, broker?);

    Ok(ConsentEnvelope {
        member_address: member.address,
        member_consent: member.consent,
        broker_address: broker.address,
        broker_consent: broker.consent,
    })
}

pub fn broker_sign(contract: &str, counterparty: &Wallet) -> Result<BrokerConsent> {
    build_consensus(contract, counterparty).map(Into::into)
}
