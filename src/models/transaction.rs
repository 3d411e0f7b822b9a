//! Decoded transaction records and classification outcomes

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction_status::option_serializer::OptionSerializer;
use solana_transaction_status::EncodedConfirmedTransactionWithStatusMeta;

use super::opcode::LendingOpcode;
use crate::errors::{LendingError, Result};

/// One instruction as submitted inside a confirmed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedInstruction {
    /// Program the instruction is addressed to.
    pub program_id: Pubkey,
    /// Account keys in submitted order.
    pub accounts: Vec<Pubkey>,
    /// Raw instruction payload; the first byte is the opcode for lending
    /// instructions.
    pub data: Vec<u8>,
}

impl ParsedInstruction {
    /// First byte of the payload, the opcode position.
    pub fn opcode_byte(&self) -> Option<u8> {
        self.data.first().copied()
    }
}

/// A wallet transaction as fetched from the cluster, flattened to the parts
/// the classifier and the display layer read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransactionRecord {
    pub signature: Signature,
    pub slot: u64,
    pub block_time: Option<i64>,
    /// Submitted instructions in order.
    pub instructions: Vec<ParsedInstruction>,
    /// Fee paid, in lamports.
    pub fee: u64,
    /// Cluster-side failure, if the transaction errored.
    pub err: Option<String>,
    pub log_messages: Vec<String>,
}

impl RawTransactionRecord {
    /// Flatten a confirmed transaction into an owned record.
    ///
    /// Fails with [`LendingError::UndecodableTransaction`] when the payload
    /// cannot be decoded into a message.
    pub fn from_confirmed(
        signature: Signature,
        confirmed: &EncodedConfirmedTransactionWithStatusMeta,
    ) -> Result<Self> {
        let decoded = confirmed
            .transaction
            .transaction
            .decode()
            .ok_or(LendingError::UndecodableTransaction(signature))?;

        let keys = decoded.message.static_account_keys();
        let instructions = decoded
            .message
            .instructions()
            .iter()
            .map(|ix| ParsedInstruction {
                program_id: *ix.program_id(keys),
                // Indexes past the static keys belong to lookup tables; the
                // classifier only reads program ids and data, so those are
                // dropped rather than resolved.
                accounts: ix
                    .accounts
                    .iter()
                    .filter_map(|&index| keys.get(index as usize).copied())
                    .collect(),
                data: ix.data.clone(),
            })
            .collect();

        let meta = confirmed.transaction.meta.as_ref();
        let log_messages = match meta.map(|m| &m.log_messages) {
            Some(OptionSerializer::Some(logs)) => logs.clone(),
            _ => Vec::new(),
        };

        Ok(Self {
            signature,
            slot: confirmed.slot,
            block_time: confirmed.block_time,
            instructions,
            fee: meta.map(|m| m.fee).unwrap_or_default(),
            err: meta.and_then(|m| m.err.as_ref()).map(|e| e.to_string()),
            log_messages,
        })
    }

    /// Whether the cluster recorded this transaction as failed.
    pub fn is_err(&self) -> bool {
        self.err.is_some()
    }
}

/// Outcome of classifying one transaction that did invoke the lending
/// program with a displayed opcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub signature: Signature,
    /// First displayed opcode by instruction position; the display layer
    /// groups by this.
    pub opcode: LendingOpcode,
    /// Every displayed opcode in the transaction, in instruction order.
    /// Composite transactions carry more than one.
    pub all_opcodes: Vec<LendingOpcode>,
    pub raw: RawTransactionRecord,
}

/// Cache entry for an examined signature.
///
/// `Tombstone` means examined and not relevant: the transaction either does
/// not touch the lending program or carries no displayed opcode. Distinct
/// from "never examined", which is the absence of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CacheEntry {
    Classified(ClassificationRecord),
    Tombstone,
}

impl CacheEntry {
    pub fn as_record(&self) -> Option<&ClassificationRecord> {
        match self {
            CacheEntry::Classified(record) => Some(record),
            CacheEntry::Tombstone => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, CacheEntry::Tombstone)
    }
}
