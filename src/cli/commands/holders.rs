use crate::cli::commands::{connect_wallet, load_config, print_json};
use crate::engine::MultisigApproval;
use crate::errors::AppResult;
use clap::Args;
use serde_json::json;
use tracing::{info, warn};

/// Resolve Group token NFT holders and build their multisig address
#[derive(Args)]
pub struct HoldersCommand {
    /// Group token id (overrides config.toml)
    #[arg(long)]
    pub group_token: Option<String>,

    /// Required signatures (default: floor(N/2) + 1)
    #[arg(long)]
    pub required: Option<usize>,

    /// Sort holder keys by public key before building
    #[arg(long)]
    pub sort: bool,

    /// Wallet REST API URL (overrides config.toml)
    #[arg(long)]
    pub rest_url: Option<String>,
}

impl HoldersCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = load_config()?;
        let group_token = self
            .group_token
            .clone()
            .unwrap_or(app_config.approval.group_token_id);

        let wallet = connect_wallet(app_config.wallet, self.rest_url.as_deref())?;
        let engine = MultisigApproval::builder().wallet(wallet).build()?;

        info!("Resolving holders of group {}", group_token);
        let mut holders = engine.get_nft_holder_info(&group_token).await?;
        if self.sort {
            holders.sort_by_pub_key();
        }
        if !holders.is_complete() {
            warn!(
                "{} holder addresses have no public key and are excluded",
                holders.keys_not_found.len()
            );
        }

        let wallet = engine.create_multisig_address(&holders.keys, self.required)?;

        print_json(&json!({
            "holders": holders.keys,
            "keysNotFound": holders.keys_not_found,
            "wallet": wallet,
        }))
    }
}
