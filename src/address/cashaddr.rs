//! CashAddr encoding and decoding
//!
//! Format: `<prefix>:<base32 payload><8 char checksum>`. The payload is a version byte
//! (`type << 3 | size`) followed by the hash. The checksum is a 40-bit BCH code over the
//! lower 5 bits of each prefix character, a zero separator, the payload and eight zero
//! groups.

use crate::errors::{AppError, AppResult};
use bech32::primitives::checksum::{Checksum, Engine};
use bech32::{ByteIterExt, Fe32, Fe32IterExt};
use std::fmt;

const CHECKSUM_LEN: usize = 8;

/// CashAddr BCH code: degree 8 over GF(32), 40-bit midstate
enum CashAddrChecksum {}

impl Checksum for CashAddrChecksum {
    type MidstateRepr = u64;
    const CODE_LENGTH: usize = 1025;
    const CHECKSUM_LENGTH: usize = CHECKSUM_LEN;
    const GENERATOR_SH: [u64; 5] = [
        0x98_f2bc_8e61,
        0x79_b76d_99e2,
        0xf3_3e5f_b3c4,
        0xae_2eab_e2a8,
        0x1e_4f43_e470,
    ];
    const TARGET_RESIDUE: u64 = 1;
}

/// Address type encoded in the version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    P2PKH,
    P2SH,
}

impl AddressKind {
    fn type_bits(self) -> u8 {
        match self {
            AddressKind::P2PKH => 0,
            AddressKind::P2SH => 1,
        }
    }

    fn from_type_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(AddressKind::P2PKH),
            1 => Some(AddressKind::P2SH),
            _ => None,
        }
    }
}

/// Decoded CashAddr with a 160-bit hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashAddress {
    pub prefix: String,
    pub kind: AddressKind,
    pub hash: [u8; 20],
}

impl CashAddress {
    pub fn new(prefix: impl Into<String>, kind: AddressKind, hash: [u8; 20]) -> Self {
        Self {
            prefix: prefix.into(),
            kind,
            hash,
        }
    }

    /// Same hash and type under a different prefix
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self::new(prefix, self.kind, self.hash)
    }

    /// Encode to the lowercase `prefix:payload` form
    pub fn encode(&self) -> String {
        // size bits 0 = 160-bit hash
        let version = self.kind.type_bits() << 3;
        let data: Vec<Fe32> = std::iter::once(version)
            .chain(self.hash.iter().copied())
            .bytes_to_fes()
            .collect();

        checksummed(&self.prefix, data)
    }

    /// Decode a prefixed CashAddr, verifying the checksum
    ///
    /// Mixed-case input is rejected. The prefix is required.
    pub fn decode(address: &str) -> AppResult<Self> {
        let invalid = |reason: &str| AppError::InvalidAddress(format!("{}: {}", reason, address));

        let has_lower = address.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = address.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            return Err(invalid("mixed case"));
        }
        let lowered = address.to_ascii_lowercase();

        let (prefix, body) = lowered
            .split_once(':')
            .ok_or_else(|| invalid("missing prefix"))?;
        if prefix.is_empty() || body.len() <= CHECKSUM_LEN {
            return Err(invalid("too short"));
        }

        let data = body
            .chars()
            .map(Fe32::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("invalid character"))?;

        let mut engine = prefix_engine(prefix);
        for &fe in &data {
            engine.input_fe(fe);
        }
        if *engine.residue() != CashAddrChecksum::TARGET_RESIDUE {
            return Err(invalid("checksum mismatch"));
        }

        let fes = &data[..data.len() - CHECKSUM_LEN];
        let payload: Vec<u8> = fes.iter().copied().fes_to_bytes().collect();
        // padding must be short and zero, so re-encoding reproduces the input
        let reencoded: Vec<Fe32> = payload.iter().copied().bytes_to_fes().collect();
        if reencoded != fes {
            return Err(invalid("invalid padding"));
        }
        if payload.len() != 21 {
            return Err(invalid("unsupported hash size"));
        }

        let version = payload[0];
        if version & 0x80 != 0 || version & 0x07 != 0 {
            return Err(invalid("unsupported version byte"));
        }
        let kind = AddressKind::from_type_bits(version >> 3)
            .ok_or_else(|| invalid("unsupported address type"))?;

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);

        Ok(Self::new(prefix, kind, hash))
    }
}

impl fmt::Display for CashAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Append the checksum to `data` and render `prefix:body`
fn checksummed(prefix: &str, data: Vec<Fe32>) -> String {
    let mut engine = prefix_engine(prefix);
    for &fe in &data {
        engine.input_fe(fe);
    }
    engine.input_target_residue();
    let residue = *engine.residue();

    let checksum = (0..CHECKSUM_LEN)
        .rev()
        .filter_map(|i| Fe32::try_from(((residue >> (5 * i)) & 0x1f) as u8).ok());
    let body: String = data.into_iter().chain(checksum).map(Fe32::to_char).collect();
    format!("{}:{}", prefix, body)
}

/// Checksum engine primed with the lower 5 bits of each prefix byte and a zero separator
fn prefix_engine(prefix: &str) -> Engine<CashAddrChecksum> {
    let mut engine = Engine::new();
    for fe in prefix.bytes().filter_map(|b| Fe32::try_from(b & 0x1f).ok()) {
        engine.input_fe(fe);
    }
    engine.input_fe(Fe32::Q);
    engine
}
