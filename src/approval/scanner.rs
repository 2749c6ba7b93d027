use crate::address::to_cash_address;
use crate::approval::marker::{decode_op_return, is_txid, parse_approval};
use crate::errors::{AppResult, WalletError};
use crate::types::ApprovalResult;
use crate::wallet::{TxDataCache, WalletInterface};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Finds the latest approval transaction in an address's history
pub struct ApprovalScanner {
    wallet: Arc<dyn WalletInterface>,
    tx_cache: TxDataCache,
}

impl ApprovalScanner {
    pub fn new(wallet: Arc<dyn WalletInterface>, tx_cache: TxDataCache) -> Self {
        Self { wallet, tx_cache }
    }

    /// Scan history in wallet order and return the first approval found
    ///
    /// Transactions listed in `filter_txids` are skipped without being fetched.
    /// `Ok(None)` means the history holds no approval; it is not an error.
    pub async fn find_approval(
        &self,
        address: &str,
        filter_txids: Option<&[String]>,
    ) -> AppResult<Option<ApprovalResult>> {
        let address = to_cash_address(address)?;
        let filter: HashSet<&str> = filter_txids
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();

        let history = self.wallet.get_transactions(&address).await.map_err(|e| {
            error!("Error in find_approval(): get_transactions({}): {}", address, e);
            e
        })?;
        debug!("Scanning {} transactions for {}", history.len(), address);

        for entry in &history {
            let txid = entry.tx_hash.as_str();
            if filter.contains(txid) {
                debug!("Skipping filtered transaction {}", txid);
                continue;
            }

            let details = self.tx_cache.get(txid).await.map_err(|e| {
                error!("Error in find_approval(): tx data for {}: {}", txid, e);
                e
            })?;

            let script_hex = details.first_output_script_hex().ok_or_else(|| {
                let e =
                    WalletError::InvalidResponse(format!("transaction {} has no outputs", txid));
                error!("Error in find_approval(): {}", e);
                e
            })?;

            let Some(op_return) = decode_op_return(script_hex) else {
                debug!("First output of {} is not valid hex, skipping", txid);
                continue;
            };

            let Some(update_txid) = parse_approval(&op_return) else {
                continue;
            };

            if !is_txid(&update_txid) {
                warn!(
                    "Approval {} carries a malformed update txid: {:?}",
                    txid, update_txid
                );
            }
            info!("Found approval {} for update {}", txid, update_txid);

            return Ok(Some(ApprovalResult {
                approval_txid: txid.to_string(),
                update_txid,
                approval_tx_details: details,
                op_return,
            }));
        }

        debug!("No approval found for {}", address);
        Ok(None)
    }
}
