use std::sync::Arc;

use url::Url;
use voynich_core::{
    broker_sign, check, constants::MAINNET_URL, dual_sign, CloseRequest, Failure, Period,
    PowerQuery, Reply, Request, Transaction, Wallet,
};

use super::http_trait::HttpClient;
use crate::cache::SupportCache;
use crate::dispatcher::Dispatcher;
use crate::error::Result;

/// Client for the voynich mainnet.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// Operations that sign return `voynich_core::Result<Reply>`; the error side
/// only ever carries malformed wallet material. Every other failure, local or
/// remote, comes back as a [`Reply`].
#[derive(Clone)]
pub struct VoynichClient<H: HttpClient> {
    dispatcher: Dispatcher<H>,
    support: Arc<SupportCache>,
}

impl<H: HttpClient> VoynichClient<H> {
    /// Create a new client with a custom HTTP client implementation.
    ///
    /// # Arguments
    /// * `host_url` - Traversal endpoint of the network
    /// * `http_client` - HTTP client implementation
    pub fn new(host_url: String, http_client: H) -> Result<Self> {
        let endpoint = Url::parse(&host_url)?;

        Ok(VoynichClient {
            dispatcher: Dispatcher::new(endpoint, http_client),
            support: Arc::new(SupportCache::new()),
        })
    }

    /// Create a new client talking to the default mainnet endpoint.
    pub fn mainnet(http_client: H) -> Result<Self> {
        Self::new(MAINNET_URL.to_string(), http_client)
    }

    pub fn endpoint(&self) -> &Url {
        self.dispatcher.endpoint()
    }

    pub async fn adopt(&self, address: &str, enigma: &str, email: &str) -> Reply {
        let request = Request::Adopt {
            address: address.to_string(),
            enigma: enigma.to_string(),
            email: email.to_string(),
        };
        self.dispatcher.send(&request).await
    }

    pub async fn validate(&self, address: &str) -> Reply {
        let request = Request::Validate {
            address: address.to_string(),
        };
        self.dispatcher.send(&request).await
    }

    pub async fn holdings(&self, address: &str) -> Reply {
        let request = Request::Holdings {
            address: address.to_string(),
        };
        self.dispatcher.send(&request).await
    }

    /// Assets the network supports. Fetched once, then served from memory.
    pub async fn supported(&self) -> Reply {
        self.support
            .get_or_populate(|| async move { self.dispatcher.send(&Request::Supported).await })
            .await
    }

    /// Voting power of `asset`, optionally for one holder at one hash.
    ///
    /// `address` and `hash` are only sent together; passing one of them alone
    /// queries the asset as a whole.
    pub async fn power(&self, asset: &str, address: Option<&str>, hash: Option<&str>) -> Reply {
        let query = PowerQuery::new(
            asset,
            address.map(str::to_string),
            hash.map(str::to_string),
        );
        self.dispatcher.send(&Request::Power(query)).await
    }

    pub async fn transaction_hash(&self, hash: &str) -> Reply {
        let request = Request::Hash {
            hash: hash.to_string(),
        };
        self.dispatcher.send(&request).await
    }

    /// Validate, co-sign and submit a transaction.
    ///
    /// A malformed transaction is answered with `Invalid Transaction` without
    /// touching the network.
    pub async fn transact(
        &self,
        transaction: Transaction,
        wallet: &Wallet,
        counterparty: &Wallet,
    ) -> voynich_core::Result<Reply> {
        let action = match check(&transaction) {
            Ok(action) => action,
            Err(e) => {
                log::debug!("transaction rejected: {}", e);
                return Ok(Failure::invalid_transaction().into());
            }
        };

        let contract = transaction.contract()?;
        let consent = dual_sign(&contract, wallet, counterparty)?;

        let request = Request::Transact {
            action,
            transaction,
            consent,
        };
        Ok(self.dispatcher.send(&request).await)
    }

    /// Close the monthly report of `wallet`, co-signed by `counterparty`.
    pub async fn close_report(
        &self,
        wallet: &Wallet,
        month: u32,
        year: u32,
        counterparty: &Wallet,
    ) -> voynich_core::Result<Reply> {
        let period = match Period::new(month, year) {
            Ok(period) => period,
            Err(e) => {
                log::debug!("report close rejected: {}", e);
                return Ok(Failure::invalid_request().into());
            }
        };

        let consent = dual_sign(&period.contract()?, wallet, counterparty)?;
        let request = Request::Close(CloseRequest::Report { period, consent });
        Ok(self.dispatcher.send(&request).await)
    }

    /// Close the liability of `address`; only the counter-party signs.
    pub async fn close_liability(
        &self,
        address: &str,
        month: u32,
        year: u32,
        counterparty: &Wallet,
    ) -> voynich_core::Result<Reply> {
        let period = match Period::new(month, year) {
            Ok(period) => period,
            Err(e) => {
                log::debug!("liability close rejected: {}", e);
                return Ok(Failure::invalid_request().into());
            }
        };

        let consent = broker_sign(&period.contract()?, counterparty)?;
        let request = Request::Close(CloseRequest::Liability {
            address: address.to_string(),
            period,
            consent,
        });
        Ok(self.dispatcher.send(&request).await)
    }

    /// KYC compliance check over the pair of addresses.
    pub async fn compliant(&self, wallet: &Wallet, counterparty: &Wallet) -> voynich_core::Result<Reply> {
        let contract = format!("{}{}", wallet.address(), counterparty.address());
        let consent = dual_sign(&contract, wallet, counterparty)?;
        Ok(self.dispatcher.send(&Request::Kyc { consent }).await)
    }
}
