use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Minting Council Group token used when none is configured
pub const DEFAULT_GROUP_TOKEN_ID: &str =
    "8e8d90ebdb1791d58eba7acd428ff3b1e21c47fb7aba2ba3b5b815aa0fe7d6d5";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub wallet: WalletApiConfig,
    pub approval: ApprovalConfig,
}

/// Wallet REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletApiConfig {
    pub rest_url: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for WalletApiConfig {
    fn default() -> Self {
        Self {
            rest_url: "https://free-bch.fullstack.cash".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            initial_backoff_ms: 250,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 10,
        }
    }
}

/// Wallet fields set through `WALLET_*` environment variables
#[derive(Debug, Default, Deserialize)]
struct WalletEnvOverrides {
    rest_url: Option<String>,
    timeout_seconds: Option<u64>,
    max_retries: Option<usize>,
    initial_backoff_ms: Option<u64>,
    backoff_multiplier: Option<f64>,
    max_backoff_seconds: Option<u64>,
}

impl WalletEnvOverrides {
    fn apply(self, wallet: &mut WalletApiConfig) {
        if let Some(rest_url) = self.rest_url {
            wallet.rest_url = rest_url;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            wallet.timeout_seconds = timeout_seconds;
        }
        if let Some(max_retries) = self.max_retries {
            wallet.max_retries = max_retries;
        }
        if let Some(initial_backoff_ms) = self.initial_backoff_ms {
            wallet.initial_backoff_ms = initial_backoff_ms;
        }
        if let Some(backoff_multiplier) = self.backoff_multiplier {
            wallet.backoff_multiplier = backoff_multiplier;
        }
        if let Some(max_backoff_seconds) = self.max_backoff_seconds {
            wallet.max_backoff_seconds = max_backoff_seconds;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalConfig {
    /// Group token whose NFT holders form the collective
    pub group_token_id: String,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            group_token_id: DEFAULT_GROUP_TOKEN_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let wallet = WalletApiConfig::default();
        let approval = ApprovalConfig::default();
        let config = Config::builder()
            .set_default("wallet.rest_url", wallet.rest_url)?
            .set_default("wallet.timeout_seconds", wallet.timeout_seconds)?
            .set_default("wallet.max_retries", wallet.max_retries as i64)?
            .set_default("wallet.initial_backoff_ms", wallet.initial_backoff_ms)?
            .set_default("wallet.backoff_multiplier", wallet.backoff_multiplier)?
            .set_default("wallet.max_backoff_seconds", wallet.max_backoff_seconds)?
            .set_default("approval.group_token_id", approval.group_token_id)?
            .add_source(file)
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // WALLET_REST_URL, WALLET_MAX_RETRIES etc. override the wallet section
        let overrides: WalletEnvOverrides = Config::builder()
            .add_source(config::Environment::with_prefix("WALLET").try_parsing(true))
            .build()?
            .try_deserialize()?;
        overrides.apply(&mut app_config.wallet);

        if let Ok(group) = env::var("APPROVAL_GROUP_TOKEN_ID") {
            app_config.approval.group_token_id = group;
        }

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.wallet.rest_url.starts_with("http") {
            return Err(ConfigError::Message(format!(
                "wallet.rest_url must be an http(s) URL, got '{}'",
                self.wallet.rest_url
            )));
        }
        if self.approval.group_token_id.is_empty() {
            return Err(ConfigError::Message(
                "approval.group_token_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                wallet: WalletApiConfig::default(),
                approval: ApprovalConfig::default(),
            }),
        }
    }
}
