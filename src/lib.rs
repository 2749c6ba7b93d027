//! PS009 Multisig Approval
//!

pub mod address;
pub mod approval;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod holders;
pub mod multisig;
pub mod types;
pub mod wallet;

pub use engine::{MultisigApproval, MultisigApprovalBuilder};
