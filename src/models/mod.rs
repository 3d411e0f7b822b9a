//! Data models for the lending client

pub mod opcode;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use self::opcode::LendingOpcode;
pub use self::transaction::{CacheEntry, ClassificationRecord, ParsedInstruction, RawTransactionRecord};
