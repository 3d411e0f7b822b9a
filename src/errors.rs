//! Error handling for the lending client.
//!
//! One error enum covers the three failure families of the boundary layer:
//! encoding-side argument errors, RPC transport failures, and cache
//! invariant violations. Transport failures are safe to retry at the
//! whole-sync granularity because the cache is append-only; encoding errors
//! are returned to the caller and never retried.

use solana_signature::Signature;
use thiserror::Error;

/// Main error type for the lending client.
#[derive(Debug, Error)]
pub enum LendingError {
    /// A token amount that does not fit the on-chain `u64` representation.
    /// Amounts are already in the smallest on-chain unit; negative values
    /// and values past `u64::MAX` cannot be encoded.
    #[error("amount {0} is outside the u64 range the program accepts")]
    AmountOutOfRange(i128),

    /// RPC failure while listing signatures or fetching a transaction.
    #[error("rpc transport failure while trying to {operation}: {message}")]
    Transport {
        /// Operation being performed when the failure occurred.
        operation: &'static str,
        /// Underlying client error, flattened for display.
        message: String,
    },

    /// Append-only invariant violation: the signature already has a cache
    /// entry. Unreachable in correct operation; the pipeline only examines
    /// signatures the cache has never seen.
    #[error("signature {0} already has a cache entry")]
    DuplicateInsert(Signature),

    /// The node returned a transaction payload that could not be decoded
    /// into a message.
    #[error("transaction {0} could not be decoded")]
    UndecodableTransaction(Signature),
}

impl LendingError {
    pub(crate) fn transport(operation: &'static str, err: impl std::fmt::Display) -> Self {
        LendingError::Transport {
            operation,
            message: err.to_string(),
        }
    }
}

/// Result type alias for the lending client.
pub type Result<T> = std::result::Result<T, LendingError>;
