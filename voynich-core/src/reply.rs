use serde_json::{json, Value};

use crate::constants::{INVALID_REQUEST, INVALID_TRANSACTION, TRANSPORT_FAILURE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected locally before anything was signed or sent.
    Validation,
    /// The round trip to the mainnet did not complete.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub log: String,
}

impl Failure {
    pub fn invalid_transaction() -> Self {
        Self {
            kind: FailureKind::Validation,
            log: INVALID_TRANSACTION.to_string(),
        }
    }

    pub fn invalid_request() -> Self {
        Self {
            kind: FailureKind::Validation,
            log: INVALID_REQUEST.to_string(),
        }
    }

    pub fn transport() -> Self {
        Self {
            kind: FailureKind::Transport,
            log: TRANSPORT_FAILURE.to_string(),
        }
    }
}

/// Outcome of an operation, whether it reached the mainnet or not.
///
/// Remote bodies are kept verbatim; their `status`/`log` fields are only read,
/// never checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Network(Value),
    Failure(Failure),
}

impl Reply {
    pub fn status(&self) -> bool {
        match self {
            Reply::Network(body) => body.get("status").and_then(Value::as_bool).unwrap_or(false),
            Reply::Failure(_) => false,
        }
    }

    pub fn log(&self) -> Option<&str> {
        match self {
            Reply::Network(body) => body.get("log").and_then(Value::as_str),
            Reply::Failure(f) => Some(f.log.as_str()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure(_))
    }

    /// The `{status, log, ...}` JSON view callers hand on.
    pub fn into_json(self) -> Value {
        match self {
            Reply::Network(body) => body,
            Reply::Failure(f) => json!({"status": false, "log": f.log}),
        }
    }
}

impl From<Failure> for Reply {
    fn from(f: Failure) -> Self {
        Reply::Failure(f)
    }
}
