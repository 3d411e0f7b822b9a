use solana_pubkey::Pubkey;
use solana_signature::Signature;

use crate::models::{CacheEntry, ClassificationRecord, LendingOpcode, ParsedInstruction, RawTransactionRecord};

fn record(signature: Signature) -> RawTransactionRecord {
    RawTransactionRecord {
        signature,
        slot: 1,
        block_time: None,
        instructions: Vec::new(),
        fee: 5000,
        err: None,
        log_messages: Vec::new(),
    }
}

#[test]
fn test_opcode_roundtrip() {
    for value in 0u8..=10 {
        let opcode = LendingOpcode::try_from(value).unwrap();
        assert_eq!(u8::from(opcode), value);
    }
}

#[test]
fn test_opcode_unrecognized() {
    assert_eq!(LendingOpcode::try_from(11), Err(11));
    assert_eq!(LendingOpcode::try_from(255), Err(255));
}

#[test]
fn test_display_labels() {
    assert_eq!(
        LendingOpcode::DepositReserveLiquidity.display_label(),
        Some("Deposit")
    );
    assert_eq!(
        LendingOpcode::BorrowLiquidity.display_label(),
        Some("Borrow")
    );
    assert_eq!(
        LendingOpcode::WithdrawObligationCollateral.display_label(),
        Some("WithdrawObligationCollateral")
    );

    // Market setup and interest accrual are invisible to the client.
    assert_eq!(LendingOpcode::InitLendingMarket.display_label(), None);
    assert_eq!(LendingOpcode::InitReserve.display_label(), None);
    assert_eq!(LendingOpcode::InitObligation.display_label(), None);
    assert_eq!(LendingOpcode::AccrueReserveInterest.display_label(), None);
}

#[test]
fn test_displayed_set_matches_labels() {
    for opcode in LendingOpcode::DISPLAYED {
        assert!(opcode.is_displayed());
    }
    let displayed = LendingOpcode::DISPLAYED.len();
    let labeled = (0u8..=10)
        .filter_map(|value| LendingOpcode::try_from(value).ok())
        .filter(|opcode| opcode.is_displayed())
        .count();
    assert_eq!(displayed, labeled);
}

#[test]
fn test_opcode_byte_of_instruction() {
    let instruction = ParsedInstruction {
        program_id: Pubkey::new_unique(),
        accounts: Vec::new(),
        data: vec![9, 0, 0, 0, 0, 0, 0, 0, 0],
    };
    assert_eq!(instruction.opcode_byte(), Some(9));

    let empty = ParsedInstruction {
        program_id: Pubkey::new_unique(),
        accounts: Vec::new(),
        data: Vec::new(),
    };
    assert_eq!(empty.opcode_byte(), None);
}

#[test]
fn test_record_error_flag() {
    let signature = Signature::from([7u8; 64]);
    let mut raw = record(signature);
    assert!(!raw.is_err());

    raw.err = Some("custom program error: 0x23".to_string());
    assert!(raw.is_err());
}

#[test]
fn test_cache_entry_accessors() {
    let signature = Signature::from([1u8; 64]);
    let classified = CacheEntry::Classified(ClassificationRecord {
        signature,
        opcode: LendingOpcode::BorrowLiquidity,
        all_opcodes: vec![LendingOpcode::BorrowLiquidity],
        raw: record(signature),
    });

    assert!(!classified.is_tombstone());
    assert_eq!(
        classified.as_record().map(|r| r.opcode),
        Some(LendingOpcode::BorrowLiquidity)
    );

    let tombstone = CacheEntry::Tombstone;
    assert!(tombstone.is_tombstone());
    assert!(tombstone.as_record().is_none());
}
