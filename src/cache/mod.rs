//! Signature-keyed cache of classification outcomes

use std::collections::HashMap;

use log::debug;
use solana_signature::Signature;

use crate::errors::{LendingError, Result};
use crate::models::{CacheEntry, ClassificationRecord};

/// Append-only store of per-signature classification outcomes.
///
/// Once a signature has an entry, record or tombstone, it is never examined
/// again; the cache only grows for the lifetime of the process. Callers that
/// switch wallets keep one cache per wallet.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: HashMap<Signature, CacheEntry>,
    /// Insertion order, which is examination order, not on-chain order.
    order: Vec<Signature>,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the signature has been examined, regardless of outcome.
    pub fn has(&self, signature: &Signature) -> bool {
        self.entries.contains_key(signature)
    }

    /// `None` means the signature was never examined, as opposed to a
    /// `Tombstone`, which means examined and not relevant.
    pub fn get(&self, signature: &Signature) -> Option<&CacheEntry> {
        self.entries.get(signature)
    }

    /// Record the outcome for a newly examined signature.
    ///
    /// The first entry for a signature is final. A second `put` fails with
    /// [`LendingError::DuplicateInsert`]; in correct operation the pipeline
    /// only examines signatures the cache has never seen, so the guard marks
    /// a programming error rather than an expected condition.
    pub fn put(&mut self, signature: Signature, entry: CacheEntry) -> Result<()> {
        if self.entries.contains_key(&signature) {
            return Err(LendingError::DuplicateInsert(signature));
        }

        debug!(
            "cache insert {} ({})",
            signature,
            if entry.is_tombstone() { "tombstone" } else { "record" }
        );
        self.entries.insert(signature, entry);
        self.order.push(signature);
        Ok(())
    }

    /// All classification records in insertion order, tombstones excluded.
    pub fn records(&self) -> impl Iterator<Item = &ClassificationRecord> {
        self.order
            .iter()
            .filter_map(|signature| self.entries.get(signature))
            .filter_map(CacheEntry::as_record)
    }

    /// Number of examined signatures, tombstones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
