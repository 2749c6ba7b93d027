use serde::{Deserialize, Serialize};

/// Token metadata as returned by the wallet's token lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub genesis_data: GenesisData,
}

/// Genesis section of a token lookup
///
/// For a Group token `nfts` lists the child NFT token ids. For an NFT,
/// `nft_holder` is the address currently holding it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisData {
    #[serde(default)]
    pub nfts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft_holder: Option<String>,
}
