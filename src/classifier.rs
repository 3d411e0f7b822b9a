//! Opcode classification for fetched wallet transactions

use log::debug;

use crate::constants::LENDING_PROGRAM_ID;
use crate::models::{ClassificationRecord, LendingOpcode, RawTransactionRecord};

/// Decide whether a transaction invoked the lending program and which
/// displayed opcode it carries.
///
/// Instructions are scanned in submitted order; the first one addressed to
/// the lending program whose leading byte is a displayed opcode decides the
/// primary classification. Later matches are kept in `all_opcodes`, so a
/// composite transaction loses nothing, but the display layer groups by the
/// first match only.
///
/// Returns `None` when no instruction matches the program id or none of the
/// matching instructions carry a displayed opcode; the caller records a
/// tombstone in that case.
pub fn classify(record: &RawTransactionRecord) -> Option<ClassificationRecord> {
    let opcodes: Vec<LendingOpcode> = record
        .instructions
        .iter()
        .filter(|ix| ix.program_id == *LENDING_PROGRAM_ID)
        .filter_map(|ix| ix.opcode_byte())
        .filter_map(|byte| LendingOpcode::try_from(byte).ok())
        .filter(|opcode| opcode.is_displayed())
        .collect();

    let first = *opcodes.first()?;
    debug!(
        "classified {} as {:?} ({} lending instruction(s))",
        record.signature,
        first,
        opcodes.len()
    );
    Some(ClassificationRecord {
        signature: record.signature,
        opcode: first,
        all_opcodes: opcodes,
        raw: record.clone(),
    })
}
