//! Approval engine composing the wallet-facing components
//!
//! One engine owns one transaction cache; scanners and resolvers created from it share
//! that cache and the injected wallet.

use crate::approval::ApprovalScanner;
use crate::errors::{AppError, AppResult};
use crate::holders::HolderKeyResolver;
use crate::multisig::MultisigAddressBuilder;
use crate::types::{ApprovalResult, HolderKey, HolderKeySet, MultisigWallet, TransactionRecord};
use crate::wallet::{CacheStats, TxDataCache, WalletInterface};
use std::sync::Arc;

pub struct MultisigApproval {
    tx_cache: TxDataCache,
    scanner: ApprovalScanner,
    holders: HolderKeyResolver,
}

/// Builder for [`MultisigApproval`]; a wallet is mandatory
#[derive(Default)]
pub struct MultisigApprovalBuilder {
    wallet: Option<Arc<dyn WalletInterface>>,
}

impl MultisigApprovalBuilder {
    pub fn wallet(mut self, wallet: Arc<dyn WalletInterface>) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn build(self) -> AppResult<MultisigApproval> {
        let wallet = self.wallet.ok_or_else(|| {
            AppError::Config(
                "a wallet implementation must be supplied when initializing \
                 the multisig approval engine"
                    .to_string(),
            )
        })?;
        Ok(MultisigApproval::new(wallet))
    }
}

impl MultisigApproval {
    pub fn builder() -> MultisigApprovalBuilder {
        MultisigApprovalBuilder::default()
    }

    pub fn new(wallet: Arc<dyn WalletInterface>) -> Self {
        let tx_cache = TxDataCache::new(Arc::clone(&wallet));
        let scanner = ApprovalScanner::new(Arc::clone(&wallet), tx_cache.clone());
        let holders = HolderKeyResolver::new(wallet);
        Self {
            tx_cache,
            scanner,
            holders,
        }
    }

    /// Derive the collective's multisig wallet from ordered holder keys
    pub fn create_multisig_address(
        &self,
        keys: &[HolderKey],
        required_signers: Option<usize>,
    ) -> AppResult<MultisigWallet> {
        MultisigAddressBuilder::build(keys, required_signers)
    }

    /// Latest approval in the history of `address`
    pub async fn get_approval_tx(
        &self,
        address: &str,
        filter_txids: Option<&[String]>,
    ) -> AppResult<Option<ApprovalResult>> {
        self.scanner.find_approval(address, filter_txids).await
    }

    /// Cached transaction details
    pub async fn get_tx_data(&self, txid: &str) -> AppResult<TransactionRecord> {
        self.tx_cache.get(txid).await
    }

    /// Holder keys of a Group token's NFTs
    pub async fn get_nft_holder_info(&self, group_id: &str) -> AppResult<HolderKeySet> {
        self.holders.get_nft_holder_info(group_id).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.tx_cache.get_stats()
    }
}
