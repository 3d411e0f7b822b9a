//! Incremental wallet-history sync against the lending program.
//!
//! One `sync` call lists the wallet's transaction signatures, skips anything
//! the cache has already examined, and fetches and classifies the rest up to
//! a fixed bound. Every examined signature gets a cache entry (record or
//! tombstone) so it is never re-fetched; signatures past the bound wait for
//! the next call.

pub mod rpc;


use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use solana_pubkey::Pubkey;

use crate::cache::ClassificationCache;
use crate::classifier;
use crate::constants::MAX_NEW_SIGNATURES_PER_SYNC;
use crate::errors::Result;
use crate::models::{CacheEntry, ClassificationRecord};

pub use self::rpc::{LendingRpc, RpcLendingClient};

/// What to do when fetching or decoding one transaction fails mid-sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Surface the error and stop. Entries written before the failure stay;
    /// the next sync resumes from the unexamined remainder.
    Abort,
    /// Log, leave the signature unexamined, move on. The signature is
    /// retried on the next sync; a failed fetch is never written as a
    /// tombstone, which would suppress that retry.
    Skip,
}

/// What to do when the node reports no record for a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecordPolicy {
    /// Leave the signature unexamined so a later sync asks again; the gap
    /// may just be a node that has not caught up.
    Retry,
    /// Treat the gap as permanent and tombstone the signature.
    Tombstone,
}

/// Tuning knobs for one pipeline instance.
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Newly examined signatures per `sync` call.
    pub max_new_per_sync: usize,
    pub fetch_failure: FetchFailurePolicy,
    pub missing_record: MissingRecordPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_new_per_sync: MAX_NEW_SIGNATURES_PER_SYNC,
            fetch_failure: FetchFailurePolicy::Skip,
            missing_record: MissingRecordPolicy::Retry,
        }
    }
}

/// Orchestrates the bounded incremental scan of a wallet's history.
///
/// The pipeline exclusively owns its cache; `sync` takes `&mut self`, so two
/// scans over the same cache cannot interleave and every cache write is
/// exactly-once.
pub struct SyncPipeline<R> {
    rpc: R,
    config: SyncConfig,
    cache: ClassificationCache,
    cancel: Arc<AtomicBool>,
}

impl<R: LendingRpc> SyncPipeline<R> {
    pub fn new(rpc: R) -> Self {
        Self::with_config(rpc, SyncConfig::default())
    }

    pub fn with_config(rpc: R, config: SyncConfig) -> Self {
        Self {
            rpc,
            config,
            cache: ClassificationCache::new(),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops an in-flight `sync` between per-signature fetches.
    ///
    /// Each iteration writes its cache entry before the flag is checked
    /// again, so cancellation never leaves a partial entry behind. The flag
    /// is cleared when the next `sync` starts.
    pub fn cancellation_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Examined entries so far, for display layers that read between syncs.
    pub fn cache(&self) -> &ClassificationCache {
        &self.cache
    }

    /// Scan the wallet's history and return every classification on record.
    ///
    /// With no wallet connected the cached records are returned unchanged.
    /// At most `max_new_per_sync` previously unseen signatures are examined
    /// per call; the rest are picked up by subsequent calls.
    pub async fn sync(&mut self, wallet: Option<&Pubkey>) -> Result<Vec<ClassificationRecord>> {
        let Some(wallet) = wallet else {
            debug!("no wallet connected, returning cached records only");
            return Ok(self.collect_records());
        };
        self.cancel.store(false, Ordering::SeqCst);

        let signatures = self.rpc.signatures_for_address(wallet).await?;
        let total = signatures.len();
        // A signature repeated within one listing would trip the append-only
        // guard on the second insert.
        let mut seen = HashSet::new();
        let uncached: Vec<_> = signatures
            .into_iter()
            .filter(|signature| !self.cache.has(signature))
            .filter(|signature| seen.insert(*signature))
            .collect();
        info!(
            "{} of {} signatures for {} not yet examined",
            uncached.len(),
            total,
            wallet
        );

        for signature in uncached.into_iter().take(self.config.max_new_per_sync) {
            if self.cancel.load(Ordering::SeqCst) {
                info!("sync cancelled, {} entries cached so far", self.cache.len());
                break;
            }

            let fetched = match self.rpc.fetch_transaction(&signature).await {
                Ok(fetched) => fetched,
                Err(err) => match self.config.fetch_failure {
                    FetchFailurePolicy::Abort => return Err(err),
                    FetchFailurePolicy::Skip => {
                        warn!("skipping {} this sync: {}", signature, err);
                        continue;
                    }
                },
            };

            match fetched {
                Some(record) => {
                    let entry = match classifier::classify(&record) {
                        Some(classified) => CacheEntry::Classified(classified),
                        None => CacheEntry::Tombstone,
                    };
                    self.cache.put(signature, entry)?;
                }
                None => match self.config.missing_record {
                    MissingRecordPolicy::Retry => {
                        debug!("no record for {}, leaving unexamined", signature);
                    }
                    MissingRecordPolicy::Tombstone => {
                        self.cache.put(signature, CacheEntry::Tombstone)?;
                    }
                },
            }
        }

        Ok(self.collect_records())
    }

    fn collect_records(&self) -> Vec<ClassificationRecord> {
        self.cache.records().cloned().collect()
    }
}
