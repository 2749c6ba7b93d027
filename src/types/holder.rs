use serde::{Deserialize, Serialize};

/// One collective member eligible to co-sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderKey {
    /// CashAddr of the NFT holder
    pub address: String,
    /// Compressed public key (33 bytes, hex-encoded)
    pub pub_key: String,
}

impl HolderKey {
    pub fn new(address: impl Into<String>, pub_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pub_key: pub_key.into(),
        }
    }
}

/// Resolved holder keys for a Group token
///
/// Addresses that have never signed a transaction expose no public key;
/// they are listed in `keys_not_found` instead of being dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderKeySet {
    pub keys: Vec<HolderKey>,
    pub keys_not_found: Vec<String>,
}

impl HolderKeySet {
    /// Sort keys by public key hex so independent holders derive the same address
    pub fn sort_by_pub_key(&mut self) {
        self.keys.sort_by(|a, b| a.pub_key.cmp(&b.pub_key));
    }

    pub fn is_complete(&self) -> bool {
        self.keys_not_found.is_empty()
    }
}
