//! Transaction data as exchanged with the wallet collaborator
//!
//! `TransactionRecord` mirrors the verbose transaction JSON returned by a full node.
//! Only the fields the approval scanner reads are typed; everything else is kept
//! verbatim in `extra` so the record round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry in an address's transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHistoryEntry {
    pub tx_hash: String,
    /// Block height, zero or negative for unconfirmed transactions
    pub height: i64,
}

impl TxHistoryEntry {
    pub fn new(tx_hash: impl Into<String>, height: i64) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            height,
        }
    }

    pub fn is_unconfirmed(&self) -> bool {
        self.height <= 0
    }
}

/// Verbose transaction details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub vout: Vec<TxOutput>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionRecord {
    /// Locking script hex of the first output, if the transaction has outputs
    pub fn first_output_script_hex(&self) -> Option<&str> {
        self.vout
            .first()
            .map(|output| output.script_pub_key.hex.as_str())
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Output value in BCH
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

/// Output locking script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptPubKey {
    pub hex: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
