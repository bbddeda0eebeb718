/// Default traversal endpoint of the voynich mainnet.
pub const MAINNET_URL: &str = "https://voynich-mainnet.azurewebsites.net/api/traversal";

/// Default timeout applied by the bundled HTTP clients, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Proof-of-consent derivation defaults
pub const DEFAULT_ITERATIONS: u32 = 1000;
pub const DEFAULT_KEY_LENGTH: usize = 64;

// Uniform failure messages
pub const INVALID_TRANSACTION: &str = "Invalid Transaction";
pub const INVALID_REQUEST: &str = "Invalid Request";
pub const TRANSPORT_FAILURE: &str = "Failed to communicate with voynich mainnet";

/// Keys every transaction must carry with a non-null value.
pub const REQUIRED_FIELDS: [&str; 14] = [
    "derivative",
    "action",
    "face",
    "maturity",
    "collateral",
    "interest",
    "fixed",
    "late",
    "fee",
    "due",
    "cap",
    "asset",
    "uid",
    "hash",
];

/// Keys that must hold a non-negative JSON number.
pub const NUMERIC_FIELDS: [&str; 6] = ["face", "maturity", "interest", "late", "fee", "cap"];

pub const MIN_MONTH: u32 = 1;
pub const MAX_MONTH: u32 = 12;
pub const MIN_YEAR: u32 = 1000;
pub const MAX_YEAR: u32 = 9999;
