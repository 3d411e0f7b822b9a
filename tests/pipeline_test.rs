use std::collections::HashMap;

use solana_lending_client::constants::LENDING_PROGRAM_ID;
use solana_lending_client::models::ParsedInstruction;
use solana_lending_client::{
    ClassificationRecord, LendingOpcode, LendingRpc, RawTransactionRecord, Result, SyncPipeline,
};
use solana_pubkey::Pubkey;
use solana_signature::Signature;

/// A node with a fixed wallet history, exercised through the public API only.
struct FixedHistoryRpc {
    signatures: Vec<Signature>,
    transactions: HashMap<Signature, RawTransactionRecord>,
}

impl LendingRpc for FixedHistoryRpc {
    async fn signatures_for_address(&self, _wallet: &Pubkey) -> Result<Vec<Signature>> {
        Ok(self.signatures.clone())
    }

    async fn fetch_transaction(
        &self,
        signature: &Signature,
    ) -> Result<Option<RawTransactionRecord>> {
        Ok(self.transactions.get(signature).cloned())
    }
}

fn sig(n: u8) -> Signature {
    Signature::from([n; 64])
}

fn transaction(signature: Signature, program_id: Pubkey, opcode_byte: u8) -> RawTransactionRecord {
    RawTransactionRecord {
        signature,
        slot: 250_000_000,
        block_time: Some(1_700_000_000),
        instructions: vec![ParsedInstruction {
            program_id,
            accounts: vec![Pubkey::new_unique(), Pubkey::new_unique()],
            data: vec![opcode_byte, 16, 39, 0, 0, 0, 0, 0, 0],
        }],
        fee: 5000,
        err: None,
        log_messages: vec!["Program log: ok".to_string()],
    }
}

fn wallet_history() -> FixedHistoryRpc {
    let other_program = Pubkey::new_unique();
    let records = vec![
        transaction(sig(1), *LENDING_PROGRAM_ID, 3), // deposit
        transaction(sig(2), other_program, 3),
        transaction(sig(3), *LENDING_PROGRAM_ID, 5), // borrow
        transaction(sig(4), other_program, 9),
        transaction(sig(5), other_program, 200),
    ];
    FixedHistoryRpc {
        signatures: records.iter().map(|r| r.signature).collect(),
        transactions: records.into_iter().map(|r| (r.signature, r)).collect(),
    }
}

#[tokio::test]
async fn test_sync_classifies_wallet_history() {
    let mut pipeline = SyncPipeline::new(wallet_history());
    let wallet = Pubkey::new_unique();

    let records = pipeline.sync(Some(&wallet)).await.unwrap();

    // Five signatures examined: two records, three tombstones.
    assert_eq!(pipeline.cache().len(), 5);
    assert_eq!(records.len(), 2);

    let opcodes: Vec<LendingOpcode> = records.iter().map(|r| r.opcode).collect();
    assert_eq!(
        opcodes,
        [
            LendingOpcode::DepositReserveLiquidity,
            LendingOpcode::BorrowLiquidity,
        ]
    );

    // Grouping by display label, the way a transaction list renders them.
    let deposits: Vec<&ClassificationRecord> = records
        .iter()
        .filter(|r| r.opcode == LendingOpcode::DepositReserveLiquidity)
        .collect();
    assert_eq!(deposits.len(), 1);
    assert_eq!(deposits[0].signature, sig(1));
    assert_eq!(deposits[0].opcode.display_label(), Some("Deposit"));
}

#[tokio::test]
async fn test_second_sync_adds_nothing() {
    let mut pipeline = SyncPipeline::new(wallet_history());
    let wallet = Pubkey::new_unique();

    let first = pipeline.sync(Some(&wallet)).await.unwrap();
    let second = pipeline.sync(Some(&wallet)).await.unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(pipeline.cache().len(), 5);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.opcode, b.opcode);
    }
}
