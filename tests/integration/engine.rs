use anyhow::Result;
use multisig_approval::address::{AddressKind, CashAddress};
use multisig_approval::errors::AppError;
use multisig_approval::MultisigApproval;
use std::sync::Arc;

use crate::common::{approval_record, memo_record, txid, MockWallet, PUBKEYS, UPDATE_TXID};

const GROUP: &str = "group";

fn council() -> MockWallet {
    MockWallet::new()
        .with_group(GROUP, &["n1", "n2", "n3", "n4"])
        .with_nft("n1", Some("bitcoincash:h1"))
        .with_nft("n2", Some("bitcoincash:h2"))
        .with_nft("n3", Some("bitcoincash:h3"))
        .with_nft("n4", Some("bitcoincash:h4"))
        .with_pub_key("bitcoincash:h1", PUBKEYS[3])
        .with_pub_key("bitcoincash:h2", PUBKEYS[0])
        .with_pub_key("bitcoincash:h3", PUBKEYS[2])
        .with_pub_key("bitcoincash:h4", PUBKEYS[1])
}

#[test]
fn test_engine_requires_wallet() {
    assert!(matches!(
        MultisigApproval::builder().build(),
        Err(AppError::Config(_))
    ));
}

#[tokio::test]
async fn test_holders_to_multisig_address() -> Result<()> {
    let engine = MultisigApproval::builder()
        .wallet(Arc::new(council()))
        .build()?;

    let mut holders = engine.get_nft_holder_info(GROUP).await?;
    assert_eq!(holders.keys.len(), 4);

    holders.sort_by_pub_key();
    let wallet = engine.create_multisig_address(&holders.keys, None)?;

    assert_eq!(wallet.required_signers, 3);
    assert_eq!(CashAddress::decode(&wallet.address)?.kind, AddressKind::P2SH);

    // Independent holders sorting the same keys reach the same address
    let mut other = engine.get_nft_holder_info(GROUP).await?;
    other.keys.reverse();
    other.sort_by_pub_key();
    assert_eq!(engine.create_multisig_address(&other.keys, None)?, wallet);
    Ok(())
}

#[tokio::test]
async fn test_repeated_scans_reuse_cached_details() -> Result<()> {
    let address = "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq";
    let a = txid(0x0a);
    let b = txid(0x0b);
    let wallet = Arc::new(
        MockWallet::new()
            .with_history(address, &[&a, &b])
            .with_record(memo_record(&a))
            .with_record(approval_record(&b, UPDATE_TXID)),
    );
    let engine = MultisigApproval::builder().wallet(wallet.clone()).build()?;

    let first = engine.get_approval_tx(address, None).await?.expect("approval");
    let second = engine.get_approval_tx(address, None).await?.expect("approval");

    assert_eq!(first, second);
    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", a)), 1);
    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", b)), 1);
    assert_eq!(wallet.call_count(&format!("get_transactions:{}", address)), 2);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);

    // direct lookups go through the same cache
    engine.get_tx_data(&b).await?;
    assert_eq!(wallet.call_count(&format!("get_tx_data:{}", b)), 1);
    Ok(())
}

#[tokio::test]
async fn test_approval_result_json_shape() -> Result<()> {
    let address = "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq";
    let a = txid(0x0a);
    let engine = MultisigApproval::new(Arc::new(
        MockWallet::new()
            .with_history(address, &[&a])
            .with_record(approval_record(&a, UPDATE_TXID)),
    ));

    let result = engine.get_approval_tx(address, None).await?.expect("approval");
    let json = serde_json::to_value(&result)?;

    assert_eq!(json["approvalTxid"], a.as_str());
    assert_eq!(json["updateTxid"], UPDATE_TXID);
    assert_eq!(json["approvalTxDetails"]["confirmations"], 10);
    assert!(json["opReturn"].as_str().unwrap_or_default().contains("APPROVE"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_scans_share_one_cache() -> Result<()> {
    let address = "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq";
    let a = txid(0x0a);
    let b = txid(0x0b);
    let wallet = Arc::new(
        MockWallet::new()
            .with_history(address, &[&a, &b])
            .with_record(memo_record(&a))
            .with_record(approval_record(&b, UPDATE_TXID)),
    );
    let engine = MultisigApproval::new(wallet.clone());

    let (first, second) = tokio::join!(
        engine.get_approval_tx(address, None),
        engine.get_approval_tx(address, None)
    );
    let (first, second) = (first?.expect("approval"), second?.expect("approval"));

    assert_eq!(first, second);
    assert_eq!(first.approval_txid, b);
    assert_eq!(first.update_txid, UPDATE_TXID);
    // racing lookups may both miss, never more
    assert!(wallet.call_count(&format!("get_tx_data:{}", a)) <= 2);
    assert!(wallet.call_count(&format!("get_tx_data:{}", b)) <= 2);

    let stats = engine.cache_stats();
    assert_eq!(stats.hits + stats.misses, 4);
    Ok(())
}
