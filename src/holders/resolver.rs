use crate::errors::AppResult;
use crate::types::{HolderKey, HolderKeySet};
use crate::wallet::WalletInterface;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Resolves the key set of a Group token's NFT holders
pub struct HolderKeyResolver {
    wallet: Arc<dyn WalletInterface>,
}

impl HolderKeyResolver {
    pub fn new(wallet: Arc<dyn WalletInterface>) -> Self {
        Self { wallet }
    }

    /// NFT token ids spawned by a Group token
    pub async fn get_nfts_from_group(&self, group_id: &str) -> AppResult<Vec<String>> {
        let group_data = self.wallet.get_token_data(group_id).await.map_err(|e| {
            error!("Error in get_nfts_from_group({}): {}", group_id, e);
            e
        })?;

        debug!(
            "Group {} has {} NFTs",
            group_id,
            group_data.genesis_data.nfts.len()
        );
        Ok(group_data.genesis_data.nfts)
    }

    /// Current holder address of each NFT, in NFT order
    ///
    /// NFTs without a recorded holder (burned or unspent genesis) are skipped.
    pub async fn get_addrs_from_nfts(&self, nfts: &[String]) -> AppResult<Vec<String>> {
        let mut addrs = Vec::with_capacity(nfts.len());

        for nft in nfts {
            let nft_data = self.wallet.get_token_data(nft).await.map_err(|e| {
                error!("Error in get_addrs_from_nfts({}): {}", nft, e);
                e
            })?;

            match nft_data.genesis_data.nft_holder {
                Some(holder) => addrs.push(holder),
                None => warn!("NFT {} has no holder address", nft),
            }
        }

        Ok(addrs)
    }

    /// Public keys for holder addresses
    ///
    /// Addresses with no on-chain public key go to `keys_not_found`.
    pub async fn get_keys(&self, addrs: &[String]) -> AppResult<HolderKeySet> {
        let mut set = HolderKeySet::default();

        for addr in addrs {
            let pub_key = self.wallet.get_pub_key(addr).await.map_err(|e| {
                error!("Error in get_keys({}): {}", addr, e);
                e
            })?;

            match pub_key {
                Some(pub_key) => set.keys.push(HolderKey::new(addr.clone(), pub_key)),
                None => set.keys_not_found.push(addr.clone()),
            }
        }

        Ok(set)
    }

    /// Full resolution for a Group token
    pub async fn get_nft_holder_info(&self, group_id: &str) -> AppResult<HolderKeySet> {
        let nfts = self.get_nfts_from_group(group_id).await?;
        let addrs = self.get_addrs_from_nfts(&nfts).await?;
        let set = self.get_keys(&addrs).await?;

        info!(
            "Resolved {} holder keys for group {} ({} without public key)",
            set.keys.len(),
            group_id,
            set.keys_not_found.len()
        );
        Ok(set)
    }
}
