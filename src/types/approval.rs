use super::TransactionRecord;
use serde::{Deserialize, Serialize};

/// Latest approval found in an address's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResult {
    /// Transaction carrying the APPROVE marker
    pub approval_txid: String,
    /// Update transaction the approval ratifies
    pub update_txid: String,
    pub approval_tx_details: TransactionRecord,
    /// First output script decoded as ASCII
    pub op_return: String,
}
