use crate::config::WalletApiConfig;
use crate::errors::{WalletError, WalletResult};
use crate::types::{TokenData, TransactionRecord, TxHistoryEntry};
use crate::wallet::retry::{calculate_next_backoff, is_retryable_status};
use crate::wallet::WalletInterface;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};

/// Wallet backed by a JSON REST consumer API
pub struct RestWallet {
    http: reqwest::Client,
    config: WalletApiConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TxHistoryResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    tx_history: Vec<TxHistoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TxDataResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    tx_data: Vec<TransactionRecord>,
}

#[derive(Debug, Deserialize)]
struct PubKeyResponse {
    #[serde(default)]
    success: bool,
    pubkey: Option<PubKeyBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PubKeyBody {
    public_key: String,
}

impl RestWallet {
    pub fn new(config: WalletApiConfig) -> WalletResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                WalletError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.rest_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body, retrying transport failures and retryable statuses
    async fn post_json<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Value,
    ) -> WalletResult<T> {
        let url = self.endpoint(path);
        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            attempts += 1;
            let failure = match self.http.post(&url).json(&body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let text = response.text().await.map_err(|e| WalletError::CallFailed {
                            method: method.to_string(),
                            message: e.to_string(),
                        })?;
                        return serde_json::from_str(&text).map_err(|e| {
                            WalletError::DeserialisationFailed(format!("{}: {}", method, e))
                        });
                    }
                    if !is_retryable_status(status) {
                        return Err(WalletError::CallFailed {
                            method: method.to_string(),
                            message: format!("HTTP {}", status),
                        });
                    }
                    format!("HTTP {}", status)
                }
                Err(e) if e.is_timeout() => {
                    if attempts >= self.config.max_retries {
                        error!("{} timed out after {} attempts", method, attempts);
                        return Err(WalletError::Timeout {
                            timeout_seconds: self.config.timeout_seconds,
                            operation: method.to_string(),
                        });
                    }
                    "timeout".to_string()
                }
                Err(e) => e.to_string(),
            };

            if attempts >= self.config.max_retries {
                error!("{} failed after {} attempts: {}", method, attempts, failure);
                return Err(WalletError::MaxRetriesExceeded {
                    operation: method.to_string(),
                });
            }

            warn!(
                "{} attempt {} failed, retrying in {:?}: {}",
                method, attempts, backoff, failure
            );
            sleep(backoff).await;
            backoff = calculate_next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }
}

/// Order history newest first: unconfirmed entries, then descending height
///
/// The sort is stable, so entries at the same height keep server order.
pub fn sort_history(history: &mut [TxHistoryEntry]) {
    history.sort_by(|a, b| match (a.is_unconfirmed(), b.is_unconfirmed()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        (false, false) => b.height.cmp(&a.height),
    });
}

#[async_trait]
impl WalletInterface for RestWallet {
    async fn get_transactions(&self, address: &str) -> WalletResult<Vec<TxHistoryEntry>> {
        let response: TxHistoryResponse = self
            .post_json("txHistory", "/bch/txHistory", json!({ "address": address }))
            .await?;
        if !response.success {
            return Err(WalletError::InvalidResponse(format!(
                "txHistory reported failure for {}",
                address
            )));
        }

        let mut history = response.tx_history;
        sort_history(&mut history);
        debug!("Fetched {} history entries for {}", history.len(), address);
        Ok(history)
    }

    async fn get_tx_data(&self, txid: &str) -> WalletResult<TransactionRecord> {
        let response: TxDataResponse = self
            .post_json("txData", "/bch/txData", json!({ "txids": [txid] }))
            .await?;
        if !response.success {
            return Err(WalletError::TransactionNotFound {
                txid: txid.to_string(),
            });
        }

        response
            .tx_data
            .into_iter()
            .next()
            .ok_or_else(|| WalletError::TransactionNotFound {
                txid: txid.to_string(),
            })
    }

    async fn get_token_data(&self, token_id: &str) -> WalletResult<TokenData> {
        self.post_json(
            "tokenData",
            "/slp/token/data",
            json!({ "tokenId": token_id, "withTxHistory": false }),
        )
        .await
    }

    async fn get_pub_key(&self, address: &str) -> WalletResult<Option<String>> {
        let response: PubKeyResponse = self
            .post_json("pubkey", "/bch/pubkey", json!({ "address": address }))
            .await?;
        if !response.success {
            debug!("No public key on chain for {}", address);
            return Ok(None);
        }
        Ok(response.pubkey.map(|body| body.public_key))
    }
}
