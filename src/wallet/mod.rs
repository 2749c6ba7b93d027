//! Wallet collaborator integration module
//!
//! This module provides everything the core needs from the outside world:
//! - **WalletInterface** - async trait the approval engine consumes
//! - **Cache** - memoized transaction detail lookups (`TxDataCache`)
//! - **Rest** - `RestWallet`, a JSON REST implementation of the trait
//! - **Retry** - exponential backoff helper used by the REST client

pub mod cache;
pub mod rest;
pub mod retry;

pub use cache::{CacheStats, TxDataCache};
pub use rest::RestWallet;
pub use retry::calculate_next_backoff;

use crate::errors::WalletResult;
use crate::types::{TokenData, TransactionRecord, TxHistoryEntry};
use async_trait::async_trait;

/// Operations the approval core needs from a wallet backend
#[async_trait]
pub trait WalletInterface: Send + Sync {
    /// Transaction history for an address, most relevant (newest) first
    async fn get_transactions(&self, address: &str) -> WalletResult<Vec<TxHistoryEntry>>;

    /// Verbose transaction details, uncached
    async fn get_tx_data(&self, txid: &str) -> WalletResult<TransactionRecord>;

    /// Token metadata for a Group token or NFT
    async fn get_token_data(&self, token_id: &str) -> WalletResult<TokenData>;

    /// Public key for an address, `None` if the address has never signed
    async fn get_pub_key(&self, address: &str) -> WalletResult<Option<String>>;
}
