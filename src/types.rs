//! PS009 Multisig Approval - Type System
//!
//! - `holder`: Collective member keys (HolderKey, HolderKeySet)
//! - `multisig`: Derived M-of-N wallet (MultisigWallet)
//! - `transaction`: Wallet-facing transaction data (TransactionRecord, TxHistoryEntry)
//! - `token`: Group/NFT token metadata (TokenData, GenesisData)
//! - `approval`: Scan outcome (ApprovalResult)

mod approval;
mod holder;
mod multisig;
mod token;
mod transaction;

pub use approval::*;
pub use holder::*;
pub use multisig::*;
pub use token::*;
pub use transaction::*;
