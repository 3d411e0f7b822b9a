//! A client-side boundary layer for a Solana lending protocol
//!
//! This crate provides the two pieces of a lending front end that talk to
//! the chain: typed builders that encode borrow/deposit/withdraw/repay
//! intents into the exact byte layout and account ordering the on-chain
//! program expects, and an incremental sync pipeline that classifies a
//! wallet's transaction history by lending opcode behind an append-only,
//! signature-keyed cache.

pub mod cache;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod instruction;
pub mod models;
pub mod sync;

use solana_pubkey::Pubkey;

pub use crate::cache::ClassificationCache;
pub use crate::errors::{LendingError, Result};
pub use crate::models::{CacheEntry, ClassificationRecord, LendingOpcode, RawTransactionRecord};
pub use crate::sync::{
    FetchFailurePolicy, LendingRpc, MissingRecordPolicy, RpcLendingClient, SyncConfig, SyncPipeline,
};

/// One-shot scan of a wallet's lending history against a cluster.
///
/// Builds a pipeline with default configuration and a fresh cache. Callers
/// that sync repeatedly should hold a [`SyncPipeline`] instead, so the cache
/// carries over between calls and already-examined signatures are skipped.
pub async fn sync_wallet_history(
    rpc_url: &str,
    wallet: &Pubkey,
) -> Result<Vec<ClassificationRecord>> {
    let mut pipeline = SyncPipeline::new(RpcLendingClient::new(rpc_url));
    pipeline.sync(Some(wallet)).await
}

/// Version of the lending client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
