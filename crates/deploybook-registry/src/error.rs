//! Registry error types.

use std::path::PathBuf;

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// `set` called with an empty contract name.
    #[error("contract name must not be empty")]
    EmptyContractName,

    /// No addresses recorded for this contract.
    #[error("no addresses recorded for contract '{name}'")]
    ContractNotFound { name: String },

    /// Address index past the end of a contract's record.
    #[error("address index {index} out of range for contract '{name}' ({len} recorded)")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    /// Underlying store location unreadable or unwritable.
    #[error("address store error at {path}: {detail}")]
    StoreUnavailable { path: PathBuf, detail: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// Whether this error means the requested record does not exist, as
    /// opposed to the store being unusable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ContractNotFound { .. } | RegistryError::IndexOutOfRange { .. }
        )
    }
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
