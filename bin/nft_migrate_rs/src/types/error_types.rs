use provider_utils::mirror_providers::MirrorError;
use thiserror::Error;

use crate::core::LedgerError;

/// Failure while migrating one token.
///
/// Source side failures only skip the token. Ledger failures abort the run,
/// see [`MigrationError::is_fatal`].
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("token {token_id} lookup failed: {source}")]
    SourceUnavailable {
        token_id: String,
        source: MirrorError,
    },
    #[error("token {token_id} is {token_type}, only NON_FUNGIBLE_UNIQUE tokens can be migrated")]
    UnsupportedTokenType { token_id: String, token_type: String },
    #[error("nft page {route} failed after {attempts} attempts: {source}")]
    InventoryUnavailable {
        route: String,
        attempts: u32,
        source: MirrorError,
    },
    #[error("metadata of serial {serial_number} is not base64: {source}")]
    InvalidMetadata {
        serial_number: i64,
        source: base64::DecodeError,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl MigrationError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Ledger(_))
    }
}
