use anyhow::Result;
use multisig_approval::errors::AppError;
use multisig_approval::wallet::TxDataCache;
use std::sync::Arc;

use crate::common::{memo_record, txid, MockWallet};

#[tokio::test]
async fn test_cache_fetches_once_per_txid() -> Result<()> {
    let a = txid(0xaa);
    let wallet = Arc::new(MockWallet::new().with_record(memo_record(&a)));
    let cache = TxDataCache::new(wallet.clone());

    let first = cache.get(&a).await?;
    let second = cache.get(&a).await?;

    assert_eq!(first, second);
    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", a)), 1);
    assert_eq!(cache.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_cache_returns_exact_wallet_response() -> Result<()> {
    let a = txid(0xab);
    let record = memo_record(&a);
    let wallet = Arc::new(MockWallet::new().with_record(record.clone()));
    let cache = TxDataCache::new(wallet);

    assert_eq!(cache.get(&a).await?, record);
    Ok(())
}

#[tokio::test]
async fn test_empty_txid_fails_with_missing_argument() {
    let wallet = Arc::new(MockWallet::new());
    let cache = TxDataCache::new(wallet.clone());

    match cache.get("").await {
        Err(AppError::MissingArgument(msg)) => assert_eq!(msg, "txid (transaction id) required"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(wallet.calls().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_propagates_and_is_not_cached() {
    let a = txid(0xac);
    let wallet = Arc::new(MockWallet::new().failing_on(&a));
    let cache = TxDataCache::new(wallet.clone());

    let err = cache.get(&a).await.unwrap_err();
    assert!(err.is_upstream());
    assert!(err.to_string().contains("test error"));
    assert!(!cache.contains(&a));

    let _ = cache.get(&a).await;
    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", a)), 2);
}

#[tokio::test]
async fn test_clones_share_entries() -> Result<()> {
    let a = txid(0xad);
    let wallet = Arc::new(MockWallet::new().with_record(memo_record(&a)));
    let cache = TxDataCache::new(wallet.clone());
    let shared = cache.clone();

    cache.get(&a).await?;
    shared.get(&a).await?;

    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", a)), 1);
    assert_eq!(shared.get_stats().hits, 1);
    Ok(())
}
