//! Wallet client error types.

use thiserror::Error;

/// Failure of a single wallet call.
///
/// The RGS defines no structured error codes, so callers usually only need
/// the `Display` text; the variants keep transport and decode failures apart
/// for logging and tests.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Connection, send or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected payload
    #[error("JSON deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WalletError {
    /// HTTP status of a rejected call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            WalletError::Status { status, .. } => Some(*status),
            WalletError::Transport(e) => e.status().map(|s| s.as_u16()),
            WalletError::Decode(_) => None,
        }
    }
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
