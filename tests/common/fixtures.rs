//! Transaction and key fixtures

use multisig_approval::types::{HolderKey, TransactionRecord};
use serde_json::json;

/// Update txid carried by the standard approval fixture
pub const UPDATE_TXID: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Valid compressed keys (secp256k1 generator multiples 1G..5G)
pub const PUBKEYS: [&str; 5] = [
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
    "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
    "02e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13",
    "022f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4",
];

/// Deterministic 64-hex txid from a short label
pub fn txid(label: u8) -> String {
    format!("{:02x}", label).repeat(32)
}

pub fn holder_keys(count: usize) -> Vec<HolderKey> {
    PUBKEYS
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, key)| HolderKey::new(format!("bitcoincash:holder{}", i), *key))
        .collect()
}

/// First-output script for an approval of `update_txid`: 6a 07 APPROVE 40 <txid>
pub fn approval_script_hex(update_txid: &str) -> String {
    format!(
        "6a07{}40{}",
        hex::encode("APPROVE"),
        hex::encode(update_txid)
    )
}

/// Plain OP_RETURN memo without the marker
pub fn memo_script_hex(text: &str) -> String {
    format!("6a{:02x}{}", text.len(), hex::encode(text))
}

pub fn record_with_script(txid: &str, script_hex: &str) -> TransactionRecord {
    serde_json::from_value(json!({
        "txid": txid,
        "confirmations": 10,
        "vout": [
            {
                "value": 0.0,
                "n": 0,
                "scriptPubKey": { "hex": script_hex, "type": "nulldata" }
            },
            {
                "value": 0.00001,
                "n": 1,
                "scriptPubKey": {
                    "hex": "76a91476a04053bda0a88bda5177b86a15c3b29f55987388ac",
                    "type": "pubkeyhash"
                }
            }
        ]
    }))
    .expect("fixture record should deserialise")
}

pub fn approval_record(txid: &str, update_txid: &str) -> TransactionRecord {
    record_with_script(txid, &approval_script_hex(update_txid))
}

pub fn memo_record(txid: &str) -> TransactionRecord {
    record_with_script(txid, &memo_script_hex("hello world"))
}
