use serde::{Deserialize, Serialize};

/// M-of-N P2SH multisig wallet derived from an ordered key list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigWallet {
    /// P2SH CashAddr (`bitcoincash:p...`)
    pub address: String,
    /// Redeem script, hex-encoded
    pub script_hex: String,
    /// Public keys in script order
    pub public_keys: Vec<String>,
    /// Number of required signatures (M in M-of-N)
    pub required_signers: usize,
}

impl MultisigWallet {
    /// Total number of keys (N in M-of-N)
    pub fn total_signers(&self) -> usize {
        self.public_keys.len()
    }

    /// Human readable threshold, e.g. "3-of-5"
    pub fn threshold_label(&self) -> String {
        format!("{}-of-{}", self.required_signers, self.total_signers())
    }
}
