//! PS009 approval discovery
//!
//! An approval transaction carries the marker in its first output:
//!
//! ```text
//! 6a                OP_RETURN
//! 07 "APPROVE"      marker push
//! 40 <64 ascii hex> update txid push
//! ```
//!
//! Decoded as ASCII the update txid therefore starts at character 10.

pub mod marker;
pub mod scanner;

pub use marker::{
    decode_op_return, is_txid, parse_approval, APPROVAL_MARKER, APPROVAL_TXID_OFFSET, TXID_HEX_LEN,
};
pub use scanner::ApprovalScanner;
