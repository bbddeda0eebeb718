use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{NUMERIC_FIELDS, REQUIRED_FIELDS};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    Mint,
    Settle,
}

impl TransactionAction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mint" => Some(Self::Mint),
            "settle" => Some(Self::Settle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Settle => "settle",
        }
    }
}

/// A transaction as supplied by the caller.
///
/// Kept as a raw JSON object: the validator has to see exactly what the caller
/// wrote, including strings or nulls where numbers belong.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(Map<String, Value>);

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Fails if it is not an object.
    pub fn from_value(value: Value) -> std::result::Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ValidationError::NotAnObject),
        }
    }

    /// Parse a transaction from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialized form both parties sign.
    pub fn contract(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<Map<String, Value>> for Transaction {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Transaction {
    type Error = ValidationError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Check every formatting rule in order and report the first one broken.
///
/// On success the transaction's action is returned.
pub fn check(transaction: &Transaction) -> std::result::Result<TransactionAction, ValidationError> {
    let fields = transaction.as_map();

    for key in REQUIRED_FIELDS {
        match fields.get(key) {
            None | Some(Value::Null) => return Err(ValidationError::MissingField(key)),
            Some(_) => {}
        }
    }

    for key in NUMERIC_FIELDS {
        // strings are rejected even when they look numeric
        let number = match fields.get(key) {
            Some(Value::Number(n)) => n,
            _ => return Err(ValidationError::NotNumeric(key)),
        };
        let negative = match number.as_f64() {
            Some(v) => v < 0.0,
            None => true,
        };
        if negative {
            return Err(ValidationError::Negative(key));
        }
    }

    if !matches!(fields.get("fixed"), Some(Value::Bool(_))) {
        return Err(ValidationError::FixedNotBoolean);
    }

    match fields.get("due") {
        Some(Value::String(due)) if is_date(due) => {}
        _ => return Err(ValidationError::UnparsableDue),
    }

    fields
        .get("action")
        .and_then(Value::as_str)
        .and_then(TransactionAction::from_token)
        .ok_or(ValidationError::UnknownAction)
}

pub fn is_formatted(transaction: &Transaction) -> bool {
    match check(transaction) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("transaction rejected: {}", e);
            false
        }
    }
}

// Local date-times, once any `Z` or `±HH:MM` suffix is removed
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

// Non-ISO dates commonly written by hand
const LEGACY_DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// Calendar-valid dates only: `2025-02-30` is rejected.
fn is_date(s: &str) -> bool {
    let s = s.trim();
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    if is_date_only(s) {
        return true;
    }

    let local = strip_offset(s);
    DATE_TIME_FORMATS
        .iter()
        .any(|f| NaiveDateTime::parse_from_str(local, f).is_ok())
        || LEGACY_DATE_FORMATS
            .iter()
            .any(|f| NaiveDate::parse_from_str(s, f).is_ok())
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn is_date_only(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        4 if bytes.iter().all(u8::is_ascii_digit) => s
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .is_some(),
        7 if bytes[4] == b'-' => {
            NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_ok()
        }
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(),
    }
}

fn strip_offset(s: &str) -> &str {
    if let Some(rest) = s.strip_suffix('Z') {
        return rest;
    }
    if s.len() <= 6 || !s.is_char_boundary(s.len() - 6) {
        return s;
    }

    let (head, tail) = s.split_at(s.len() - 6);
    let t = tail.as_bytes();
    let is_offset = (t[0] == b'+' || t[0] == b'-')
        && t[1..3].iter().all(u8::is_ascii_digit)
        && t[3] == b':'
        && t[4..].iter().all(u8::is_ascii_digit);
    if is_offset && head.contains(['T', ' ']) {
        head
    } else {
        s
    }
}
