use crate::address::p2sh_address;
use crate::errors::{AppError, AppResult};
use crate::types::{HolderKey, MultisigWallet};
use bitcoin::hashes::{hash160, Hash};
use bitcoin::opcodes::all::OP_CHECKMULTISIG;
use bitcoin::script::Builder;
use bitcoin::PublicKey;
use std::str::FromStr;
use tracing::debug;

/// Consensus limit on keys in a CHECKMULTISIG
pub const MAX_MULTISIG_KEYS: usize = 20;

/// Largest redeem script that fits a single P2SH push
pub const MAX_REDEEM_SCRIPT_SIZE: usize = 520;

/// Strict majority threshold used when no threshold is supplied: `floor(n/2) + 1`
///
/// Note the asymmetry for even counts: 4 keys -> 3-of-4, 5 keys -> 3-of-5.
pub fn default_threshold(key_count: usize) -> usize {
    key_count / 2 + 1
}

/// Derives P2SH multisig wallets from ordered public keys
pub struct MultisigAddressBuilder;

impl MultisigAddressBuilder {
    /// Build a multisig wallet from holder keys, preserving their order
    ///
    /// `required_signers` of `None` or `Some(0)` selects [`default_threshold`].
    pub fn build(keys: &[HolderKey], required_signers: Option<usize>) -> AppResult<MultisigWallet> {
        let pubkeys: Vec<String> = keys.iter().map(|k| k.pub_key.clone()).collect();
        Self::build_from_pubkeys(&pubkeys, required_signers)
    }

    /// Build a multisig wallet from hex-encoded compressed public keys
    pub fn build_from_pubkeys(
        pubkeys: &[String],
        required_signers: Option<usize>,
    ) -> AppResult<MultisigWallet> {
        if pubkeys.is_empty() {
            return Err(AppError::InvalidInput(
                "keys must be an array containing public keys".to_string(),
            ));
        }

        let total = pubkeys.len();
        if total > MAX_MULTISIG_KEYS {
            return Err(AppError::InvalidInput(format!(
                "at most {} public keys are allowed, got {}",
                MAX_MULTISIG_KEYS, total
            )));
        }

        let required = match required_signers {
            Some(m) if m > 0 => m,
            _ => default_threshold(total),
        };
        if required > total {
            return Err(AppError::InvalidInput(format!(
                "required signers ({}) exceeds number of public keys ({})",
                required, total
            )));
        }

        let parsed = pubkeys
            .iter()
            .enumerate()
            .map(|(i, hex_key)| parse_compressed_key(i, hex_key))
            .collect::<AppResult<Vec<_>>>()?;

        let mut builder = Builder::new().push_int(required as i64);
        for key in &parsed {
            builder = builder.push_key(key);
        }
        let script = builder
            .push_int(total as i64)
            .push_opcode(OP_CHECKMULTISIG)
            .into_script();

        if script.len() > MAX_REDEEM_SCRIPT_SIZE {
            return Err(AppError::InvalidInput(format!(
                "redeem script is {} bytes, exceeds {} byte limit",
                script.len(),
                MAX_REDEEM_SCRIPT_SIZE
            )));
        }

        let script_hash = hash160::Hash::hash(script.as_bytes()).to_byte_array();
        let address = p2sh_address(script_hash);

        debug!("Derived {}-of-{} multisig address {}", required, total, address);

        Ok(MultisigWallet {
            address,
            script_hex: hex::encode(script.as_bytes()),
            public_keys: pubkeys.to_vec(),
            required_signers: required,
        })
    }
}

fn parse_compressed_key(index: usize, hex_key: &str) -> AppResult<PublicKey> {
    let key = PublicKey::from_str(hex_key).map_err(|e| {
        AppError::InvalidInput(format!("public key {} is not a valid key: {}", index, e))
    })?;
    if !key.compressed {
        return Err(AppError::InvalidInput(format!(
            "public key {} must be compressed",
            index
        )));
    }
    Ok(key)
}
