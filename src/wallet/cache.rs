use crate::errors::{AppError, AppResult};
use crate::types::TransactionRecord;
use crate::wallet::WalletInterface;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

/// Cache-backed transaction detail lookup
///
/// Records are keyed by txid and never evicted: a txid is derived from the
/// transaction content, so a stored record cannot go stale. Failed fetches are
/// not cached.
#[derive(Clone)]
pub struct TxDataCache {
    wallet: Arc<dyn WalletInterface>,
    cache: Arc<Mutex<HashMap<String, TransactionRecord>>>,
    stats: Arc<Mutex<CacheStats>>,
}

impl TxDataCache {
    pub fn new(wallet: Arc<dyn WalletInterface>) -> Self {
        Self {
            wallet,
            cache: Arc::new(Mutex::new(HashMap::new())),
            stats: Arc::new(Mutex::new(CacheStats::default())),
        }
    }

    /// Get transaction details, fetching from the wallet on a miss
    pub async fn get(&self, txid: &str) -> AppResult<TransactionRecord> {
        if txid.is_empty() {
            return Err(AppError::MissingArgument(
                "txid (transaction id) required".to_string(),
            ));
        }

        if let Some(record) = self.lookup(txid) {
            return Ok(record);
        }

        // Lock is released before the fetch; two concurrent misses may both fetch
        let record = self.wallet.get_tx_data(txid).await.map_err(|e| {
            error!("Error in TxDataCache::get({}): {}", txid, e);
            e
        })?;

        lock(&self.cache).insert(txid.to_string(), record.clone());
        debug!("Cached transaction: {}", txid);

        Ok(record)
    }

    fn lookup(&self, txid: &str) -> Option<TransactionRecord> {
        let cache = lock(&self.cache);
        let found = cache.get(txid).cloned();
        let mut stats = lock(&self.stats);
        if found.is_some() {
            stats.hits += 1;
            debug!("Cache hit for transaction: {}", txid);
        } else {
            stats.misses += 1;
            debug!("Cache miss for transaction: {}", txid);
        }
        found
    }

    /// Check whether a txid is cached without touching the statistics
    pub fn contains(&self, txid: &str) -> bool {
        lock(&self.cache).contains_key(txid)
    }

    pub fn len(&self) -> usize {
        lock(&self.cache).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn get_stats(&self) -> CacheStats {
        lock(&self.stats).clone()
    }
}

// Entries are written whole, so a poisoned map is still consistent
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cache performance statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            (self.hits as f64 / (self.hits + self.misses) as f64) * 100.0
        }
    }

    /// Get total cache requests
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }
}
