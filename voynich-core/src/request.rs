//! Request bodies sent to the mainnet.
//!
//! Every body is a JSON object. All but one carry a top-level `action`
//! discriminator; a transaction body is just `{transaction, consent}` and the
//! mainnet reads the action from inside the transaction.

use serde::Serialize;

use crate::period::Period;
use crate::signing::{BrokerConsent, ConsentEnvelope};
use crate::transaction::{Transaction, TransactionAction};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Request {
    Adopt {
        address: String,
        enigma: String,
        email: String,
    },
    Validate {
        address: String,
    },
    Holdings {
        address: String,
    },
    Supported,
    Power(PowerQuery),
    Hash {
        hash: String,
    },
    Close(CloseRequest),
    Kyc {
        consent: ConsentEnvelope,
    },
    /// Mint or settle. Must stay the last variant.
    #[serde(untagged)]
    Transact {
        #[serde(skip_serializing)]
        action: TransactionAction,
        transaction: Transaction,
        consent: ConsentEnvelope,
    },
}

impl Request {
    pub fn action(&self) -> &'static str {
        match self {
            Request::Adopt { .. } => "adopt",
            Request::Validate { .. } => "validate",
            Request::Holdings { .. } => "holdings",
            Request::Supported => "supported",
            Request::Power(_) => "power",
            Request::Hash { .. } => "hash",
            Request::Close(_) => "close",
            Request::Kyc { .. } => "kyc",
            Request::Transact { action, .. } => action.as_str(),
        }
    }
}

/// The two shapes of a voting-power query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PowerQuery {
    /// Power of an asset as a whole.
    Asset { asset: String },
    /// Power of an asset held by `address`, pinned to `hash`.
    Holder {
        asset: String,
        address: String,
        hash: String,
    },
}

impl PowerQuery {
    /// Build a query from optional holder parts.
    ///
    /// The holder shape is only used when both `address` and `hash` are given;
    /// either one alone falls back to the asset-only query.
    pub fn new(asset: impl Into<String>, address: Option<String>, hash: Option<String>) -> Self {
        let asset = asset.into();
        match (address, hash) {
            (Some(address), Some(hash)) => PowerQuery::Holder {
                asset,
                address,
                hash,
            },
            (None, None) => PowerQuery::Asset { asset },
            (address, _) => {
                log::warn!(
                    "power query for {} got only {}, querying the asset alone",
                    asset,
                    if address.is_some() { "an address" } else { "a hash" }
                );
                PowerQuery::Asset { asset }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CloseRequest {
    /// Monthly report, signed by both parties.
    Report {
        period: Period,
        consent: ConsentEnvelope,
    },
    /// Liability of `address`, signed by the counter-party only.
    Liability {
        address: String,
        period: Period,
        consent: BrokerConsent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope() -> ConsentEnvelope {
        ConsentEnvelope {
            member_address: "vx1member".into(),
            member_consent: "aa".into(),
            broker_address: "vx1broker".into(),
            broker_consent: "bb".into(),
        }
    }

    #[test]
    fn simple_bodies() {
        let adopt = Request::Adopt {
            address: "vx1member".into(),
            enigma: "riddle".into(),
            email: "member@example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&adopt).unwrap(),
            json!({"action": "adopt", "address": "vx1member", "enigma": "riddle", "email": "member@example.com"})
        );

        assert_eq!(
            serde_json::to_value(Request::Supported).unwrap(),
            json!({"action": "supported"})
        );
        assert_eq!(
            serde_json::to_value(Request::Hash { hash: "h1".into() }).unwrap(),
            json!({"action": "hash", "hash": "h1"})
        );
    }

    #[test]
    fn power_needs_both_holder_parts() {
        let only_hash = PowerQuery::new("ASSET", None, Some("h1".into()));
        let only_address = PowerQuery::new("ASSET", Some("a1".into()), None);
        let neither = PowerQuery::new("ASSET", None, None);
        let both = PowerQuery::new("ASSET", Some("a1".into()), Some("h1".into()));

        let asset_only = json!({"action": "power", "asset": "ASSET"});
        assert_eq!(serde_json::to_value(Request::Power(only_hash)).unwrap(), asset_only);
        assert_eq!(serde_json::to_value(Request::Power(only_address)).unwrap(), asset_only);
        assert_eq!(serde_json::to_value(Request::Power(neither)).unwrap(), asset_only);
        assert_eq!(
            serde_json::to_value(Request::Power(both)).unwrap(),
            json!({"action": "power", "asset": "ASSET", "address": "a1", "hash": "h1"})
        );
    }

    #[test]
    fn close_bodies() {
        let period = Period::new(3, 2025).unwrap();

        let report = Request::Close(CloseRequest::Report {
            period,
            consent: envelope(),
        });
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "action": "close",
                "period": {"month": 3, "year": 2025},
                "consent": {
                    "memberAddress": "vx1member",
                    "memberConsent": "aa",
                    "brokerAddress": "vx1broker",
                    "brokerConsent": "bb",
                },
            })
        );

        let liability = Request::Close(CloseRequest::Liability {
            address: "vx1member".into(),
            period,
            consent: BrokerConsent {
                broker_address: "vx1broker".into(),
                broker_consent: "bb".into(),
            },
        });
        assert_eq!(
            serde_json::to_value(&liability).unwrap(),
            json!({
                "action": "close",
                "address": "vx1member",
                "period": {"month": 3, "year": 2025},
                "consent": {"brokerAddress": "vx1broker", "brokerConsent": "bb"},
            })
        );
    }

    #[test]
    fn transaction_body_has_no_top_level_action() {
        let mut transaction = Transaction::new();
        transaction.insert("action", "settle");
        transaction.insert("uid", "tx-001");
        let request = Request::Transact {
            action: TransactionAction::Settle,
            transaction,
            consent: envelope(),
        };

        assert_eq!(request.action(), "settle");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "transaction": {"action": "settle", "uid": "tx-001"},
                "consent": {
                    "memberAddress": "vx1member",
                    "memberConsent": "aa",
                    "brokerAddress": "vx1broker",
                    "brokerConsent": "bb",
                },
            })
        );
    }
}
