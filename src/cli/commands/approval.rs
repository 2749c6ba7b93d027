use crate::cli::commands::{connect_wallet, load_config, print_json};
use crate::engine::MultisigApproval;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Find the latest approval transaction for an address
#[derive(Args)]
pub struct ApprovalCommand {
    /// Address to scan (bitcoincash: or simpleledger:)
    pub address: String,

    /// Transaction id to ignore, repeat to ignore several
    #[arg(long = "filter")]
    pub filter_txids: Vec<String>,

    /// Wallet REST API URL (overrides config.toml)
    #[arg(long)]
    pub rest_url: Option<String>,
}

impl ApprovalCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = load_config()?;
        let wallet = connect_wallet(app_config.wallet, self.rest_url.as_deref())?;
        let engine = MultisigApproval::builder().wallet(wallet).build()?;

        let filter = (!self.filter_txids.is_empty()).then_some(self.filter_txids.as_slice());
        let result = engine.get_approval_tx(&self.address, filter).await?;

        let stats = engine.cache_stats();
        info!(
            "Fetched {} transactions ({} cache hits)",
            stats.misses, stats.hits
        );

        match result {
            Some(approval) => print_json(&approval),
            None => {
                println!("No approval transaction found for {}", self.address);
                Ok(())
            }
        }
    }
}
