use crate::cli::commands::{connect_wallet, load_config};
use crate::errors::{AppError, AppResult};
use crate::wallet::WalletInterface;
use clap::Args;
use tracing::{error, info};

/// Test wallet REST API connectivity
#[derive(Args)]
pub struct TestApiCommand {
    /// Address whose history is fetched as the probe
    #[arg(
        long,
        default_value = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
    )]
    pub address: String,

    /// Wallet REST API URL (overrides config.toml)
    #[arg(long)]
    pub rest_url: Option<String>,
}

impl TestApiCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing Wallet REST API Connection ===");

        let app_config = load_config()?;
        let wallet = connect_wallet(app_config.wallet, self.rest_url.as_deref())?;

        match wallet.get_transactions(&self.address).await {
            Ok(history) => {
                println!("Wallet API connection test PASSED");
                println!("{} history entries for {}", history.len(), self.address);
                Ok(())
            }
            Err(e) => {
                error!("Wallet API connection test failed: {}", e);
                println!("Wallet API connection test FAILED");
                println!("Error: {}", e);
                println!("\nTroubleshooting tips:");
                println!("1. Verify the REST URL is correct");
                println!("2. Check that the consumer API is reachable from this host");
                Err(AppError::Config(format!("API test failed: {}", e)))
            }
        }
    }
}
