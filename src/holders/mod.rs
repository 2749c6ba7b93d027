//! Collective membership resolution
//!
//! Group token -> child NFTs -> holder addresses -> public keys.

pub mod resolver;

pub use resolver::HolderKeyResolver;
