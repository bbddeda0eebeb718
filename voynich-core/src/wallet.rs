use std::fmt;

/// A party taking part in a signed operation.
///
/// The wallet is owned by the caller and only borrowed for the duration of a
/// signing call; nothing here is persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Wallet {
    address: String,
    key: String,
    pen: String,
}

impl Wallet {
    /// # Arguments
    /// * `address` - Public identifier of the wallet
    /// * `key` - Secret key material
    /// * `pen` - Per-wallet pass-phrase, used as the salt of the wallet's sigil
    pub fn new(address: impl Into<String>, key: impl Into<String>, pen: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            key: key.into(),
            pen: pen.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn key(&self) -> &[u8] {
        self.key.as_bytes()
    }

    pub(crate) fn pen(&self) -> &[u8] {
        self.pen.as_bytes()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("key", &"<redacted>")
            .field("pen", &"<redacted>")
            .finish()
    }
}
