pub mod approval;
pub mod holders;
pub mod multisig;
pub mod test_api;

use crate::config::{AppConfig, WalletApiConfig};
use crate::errors::{AppError, AppResult};
use crate::wallet::RestWallet;
use std::sync::Arc;
use tracing::{info, warn};

/// Load configuration, falling back to defaults when no config file is usable
pub(crate) fn load_config() -> AppResult<AppConfig> {
    match AppConfig::load() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            Ok(config)
        }
        Err(e) => {
            warn!("Failed to load configuration: {}", e);
            AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))
        }
    }
}

/// Build the REST wallet, letting `--rest-url` override the configured URL
pub(crate) fn connect_wallet(
    mut wallet_config: WalletApiConfig,
    rest_url: Option<&str>,
) -> AppResult<Arc<RestWallet>> {
    if let Some(url) = rest_url {
        wallet_config.rest_url = url.to_string();
    }
    info!("Wallet REST API: {}", wallet_config.rest_url);
    Ok(Arc::new(RestWallet::new(wallet_config)?))
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InvalidInput(format!("Failed to render JSON: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
