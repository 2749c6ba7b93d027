//! M-of-N multisig derivation
//!
//! Builds the bare `OP_m <keys> OP_n OP_CHECKMULTISIG` redeem script for an ordered key
//! list and derives its P2SH CashAddr. Key order is part of the script, so holders must
//! agree on an order to reach the same address.

pub mod builder;

pub use builder::{
    default_threshold, MultisigAddressBuilder, MAX_MULTISIG_KEYS, MAX_REDEEM_SCRIPT_SIZE,
};
