//! Bitcoin Cash address handling
//!
//! - **CashAddr** - checksum-verified encode/decode of prefixed base32 addresses
//! - **Scheme conversion** - SLP token addresses (`simpleledger:`) to payment
//!   addresses (`bitcoincash:`)

pub mod cashaddr;

pub use cashaddr::{AddressKind, CashAddress};

use crate::errors::{AppError, AppResult};

/// Canonical payment address prefix
pub const BCH_PREFIX: &str = "bitcoincash";

/// SLP token-aware address prefix
pub const SLP_PREFIX: &str = "simpleledger";

/// Normalise an address to the `bitcoincash:` scheme
///
/// `bitcoincash:` input is returned unchanged. `simpleledger:` input is decoded and
/// re-encoded with the payment prefix; both encode the same hash.
pub fn to_cash_address(address: &str) -> AppResult<String> {
    if address.starts_with("bitcoincash:") {
        return Ok(address.to_string());
    }

    if address.starts_with("simpleledger:") {
        let decoded = CashAddress::decode(address)?;
        return Ok(decoded.with_prefix(BCH_PREFIX).encode());
    }

    Err(AppError::InvalidAddress(
        "Input address must start with bitcoincash: or simpleledger:".to_string(),
    ))
}

/// Encode a 20-byte script hash as a P2SH payment address
pub fn p2sh_address(script_hash: [u8; 20]) -> String {
    CashAddress::new(BCH_PREFIX, AddressKind::P2SH, script_hash).encode()
}
