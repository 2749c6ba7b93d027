use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing collaborator or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed arguments to address building or scanning
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Address with an unrecognised scheme or a bad checksum
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Required argument was empty
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Failure reported by the wallet collaborator
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),
}

impl AppError {
    /// True when the error came from a collaborator fetch rather than from the protocol layer
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::Wallet(_))
    }
}

/// Wallet collaborator error types
#[derive(Error, Debug)]
pub enum WalletError {
    /// Failed to reach the wallet REST API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// API call failed (HTTP status, transport error, etc.)
    #[error("API call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// Failed to deserialise response data
    #[error("Deserialisation failed: {0}")]
    DeserialisationFailed(String),

    /// API returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transaction id is well formed but unknown to the backend
    #[error("Transaction not found: {txid}")]
    TransactionNotFound { txid: String },

    /// Request timed out
    #[error("Request timeout: {timeout_seconds}s for {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },

    /// Retry limit exceeded
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::DeserialisationFailed(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
