//! Scripted in-memory wallet
//!
//! Responses are registered up front; every call is recorded so tests can assert
//! exactly which lookups the code under test performed.

use async_trait::async_trait;
use multisig_approval::errors::{WalletError, WalletResult};
use multisig_approval::types::{GenesisData, TokenData, TransactionRecord, TxHistoryEntry};
use multisig_approval::wallet::WalletInterface;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockWallet {
    history: HashMap<String, Vec<TxHistoryEntry>>,
    records: HashMap<String, TransactionRecord>,
    tokens: HashMap<String, TokenData>,
    pubkeys: HashMap<String, String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register history for an address, in the order it should be returned
    pub fn with_history(mut self, address: &str, txids: &[&str]) -> Self {
        let entries = txids
            .iter()
            .enumerate()
            .map(|(i, txid)| TxHistoryEntry::new(*txid, 1000 - i as i64))
            .collect();
        self.history.insert(address.to_string(), entries);
        self
    }

    pub fn with_record(mut self, record: TransactionRecord) -> Self {
        self.records.insert(record.txid.clone(), record);
        self
    }

    pub fn with_group(mut self, group_id: &str, nfts: &[&str]) -> Self {
        self.tokens.insert(
            group_id.to_string(),
            TokenData {
                genesis_data: GenesisData {
                    nfts: nfts.iter().map(|s| s.to_string()).collect(),
                    nft_holder: None,
                },
            },
        );
        self
    }

    pub fn with_nft(mut self, nft_id: &str, holder: Option<&str>) -> Self {
        self.tokens.insert(
            nft_id.to_string(),
            TokenData {
                genesis_data: GenesisData {
                    nfts: vec![],
                    nft_holder: holder.map(str::to_string),
                },
            },
        );
        self
    }

    pub fn with_pub_key(mut self, address: &str, pub_key: &str) -> Self {
        self.pubkeys.insert(address.to_string(), pub_key.to_string());
        self
    }

    /// Any call whose argument equals `key` fails with a call error
    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    /// Recorded calls as `method:argument`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    fn record_call(&self, method: &str, arg: &str) -> WalletResult<()> {
        self.calls.lock().unwrap().push(format!("{}:{}", method, arg));
        if self.failing.contains(arg) {
            return Err(WalletError::CallFailed {
                method: method.to_string(),
                message: "test error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WalletInterface for MockWallet {
    async fn get_transactions(&self, address: &str) -> WalletResult<Vec<TxHistoryEntry>> {
        self.record_call("get_transactions", address)?;
        Ok(self.history.get(address).cloned().unwrap_or_default())
    }

    async fn get_tx_data(&self, txid: &str) -> WalletResult<TransactionRecord> {
        self.record_call("get_tx_data", txid)?;
        self.records
            .get(txid)
            .cloned()
            .ok_or_else(|| WalletError::TransactionNotFound {
                txid: txid.to_string(),
            })
    }

    async fn get_token_data(&self, token_id: &str) -> WalletResult<TokenData> {
        self.record_call("get_token_data", token_id)?;
        self.tokens
            .get(token_id)
            .cloned()
            .ok_or_else(|| WalletError::InvalidResponse(format!("unknown token {}", token_id)))
    }

    async fn get_pub_key(&self, address: &str) -> WalletResult<Option<String>> {
        self.record_call("get_pub_key", address)?;
        Ok(self.pubkeys.get(address).cloned())
    }
}
