//! Common Test Utilities
//!
//! Shared mock wallet and fixture builders used across unit and integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_wallet;

pub use fixtures::*;
pub use mock_wallet::MockWallet;
