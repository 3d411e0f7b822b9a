use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::*;
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::LendingError;

fn keys(n: usize) -> Vec<Pubkey> {
    (0..n).map(|_| Pubkey::new_unique()).collect()
}

#[test]
fn test_deposit_obligation_collateral_wire_layout() {
    let k = keys(9);
    let ix = deposit_obligation_collateral(
        1000, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7], k[8],
    )
    .unwrap();

    assert_eq!(ix.program_id, *LENDING_PROGRAM_ID);
    assert_eq!(
        ix.data,
        [
            9, // opcode = DepositObligationCollateral
            232, 3, 0, 0, 0, 0, 0, 0, // collateral_amount = 1000, little endian
        ]
    );

    // Ten accounts, positions 0..9 in argument order, token program last.
    assert_eq!(ix.accounts.len(), 10);
    for (position, key) in k.iter().enumerate() {
        assert_eq!(ix.accounts[position].pubkey, *key);
    }
    assert_eq!(ix.accounts[9].pubkey, *TOKEN_PROGRAM_ID);

    // Only the user transfer authority signs.
    let signers: Vec<usize> = ix
        .accounts
        .iter()
        .enumerate()
        .filter(|(_, meta)| meta.is_signer)
        .map(|(position, _)| position)
        .collect();
    assert_eq!(signers, [8]);

    let writable: Vec<usize> = ix
        .accounts
        .iter()
        .enumerate()
        .filter(|(_, meta)| meta.is_writable)
        .map(|(position, _)| position)
        .collect();
    assert_eq!(writable, [0, 1, 3, 4, 5]);
}

#[test]
fn test_withdraw_reserve_liquidity_wire_layout() {
    let k = keys(8);
    let ix = withdraw_reserve_liquidity(1, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7]).unwrap();

    assert_eq!(
        ix.data,
        [
            4, // opcode = WithdrawReserveLiquidity
            1, 0, 0, 0, 0, 0, 0, 0, // collateral_amount = 1
        ]
    );
    assert_eq!(ix.accounts.len(), 10);
    assert_eq!(ix.accounts[8].pubkey, clock::id());
    assert_eq!(ix.accounts[9].pubkey, *TOKEN_PROGRAM_ID);

    let writable: Vec<usize> = ix
        .accounts
        .iter()
        .enumerate()
        .filter(|(_, meta)| meta.is_writable)
        .map(|(position, _)| position)
        .collect();
    assert_eq!(writable, [0, 1, 2, 3, 4]);
    assert!(ix.accounts[7].is_signer);
}

#[test]
fn test_deposit_reserve_liquidity_wire_layout() {
    let k = keys(8);
    let ix = deposit_reserve_liquidity(
        u64::MAX as i128,
        k[0],
        k[1],
        k[2],
        k[3],
        k[4],
        k[5],
        k[6],
        k[7],
    )
    .unwrap();

    assert_eq!(ix.data[0], 3); // opcode = DepositReserveLiquidity
    assert_eq!(ix.data[1..], u64::MAX.to_le_bytes());
    assert_eq!(ix.accounts.len(), 10);
    assert!(ix.accounts[7].is_signer);
}

#[test]
fn test_borrow_liquidity_wire_layout() {
    let k = keys(15);
    let ix = borrow_liquidity(
        500_000,
        BorrowAmountType::LiquidityBorrowAmount,
        k[0],
        k[1],
        k[2],
        k[3],
        k[4],
        k[5],
        k[6],
        k[7],
        k[8],
        k[9],
        k[10],
        k[11],
        k[12],
        k[13],
        k[14],
        None,
    )
    .unwrap();

    // Opcode byte, little-endian u64 amount, then the amount-type tag.
    assert_eq!(ix.data.len(), 10);
    assert_eq!(ix.data[0], 5); // opcode = BorrowLiquidity
    assert_eq!(ix.data[1..9], 500_000u64.to_le_bytes());
    assert_eq!(ix.data[9], 0); // BorrowAmountType::LiquidityBorrowAmount
    assert_eq!(ix.accounts.len(), 17);
    assert!(ix.accounts[11].is_signer);
}

#[test]
fn test_borrow_liquidity_host_fee_receiver_appended() {
    let k = keys(15);
    let host = Pubkey::new_unique();
    let ix = borrow_liquidity(
        1,
        BorrowAmountType::CollateralDepositAmount,
        k[0],
        k[1],
        k[2],
        k[3],
        k[4],
        k[5],
        k[6],
        k[7],
        k[8],
        k[9],
        k[10],
        k[11],
        k[12],
        k[13],
        k[14],
        Some(host),
    )
    .unwrap();

    assert_eq!(ix.data[9], 1); // BorrowAmountType::CollateralDepositAmount
    assert_eq!(ix.accounts.len(), 18);
    assert_eq!(ix.accounts[17].pubkey, host);
    assert!(ix.accounts[17].is_writable);
    assert!(!ix.accounts[17].is_signer);
}

#[test]
fn test_repay_obligation_liquidity_wire_layout() {
    let k = keys(12);
    let ix = repay_obligation_liquidity(
        42, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7], k[8], k[9], k[10], k[11],
    )
    .unwrap();

    assert_eq!(ix.data[0], 6); // opcode = RepayObligationLiquidity
    assert_eq!(ix.accounts.len(), 14);
    // The withdraw reserve is read-only in the repay path.
    assert!(!ix.accounts[4].is_writable);
    assert!(ix.accounts[11].is_signer);
    assert_eq!(ix.accounts[12].pubkey, clock::id());
    assert_eq!(ix.accounts[13].pubkey, *TOKEN_PROGRAM_ID);
}

#[test]
fn test_withdraw_obligation_collateral_wire_layout() {
    let k = keys(13);
    let ix = withdraw_obligation_collateral(
        7, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7], k[8], k[9], k[10], k[11], k[12],
    )
    .unwrap();

    assert_eq!(ix.data[0], 10); // opcode = WithdrawObligationCollateral
    assert_eq!(ix.accounts.len(), 15);
    assert!(ix.accounts[9].is_signer);
    assert_eq!(ix.accounts[13].pubkey, clock::id());
    assert_eq!(ix.accounts[14].pubkey, *TOKEN_PROGRAM_ID);
}

#[test]
fn test_encoding_is_deterministic() {
    let k = keys(9);
    let encode = || {
        deposit_obligation_collateral(
            123_456_789,
            k[0],
            k[1],
            k[2],
            k[3],
            k[4],
            k[5],
            k[6],
            k[7],
            k[8],
        )
        .unwrap()
    };

    let first = encode();
    let second = encode();
    assert_eq!(first.data, second.data);
    assert_eq!(first.accounts, second.accounts);
    assert_eq!(first.program_id, second.program_id);
}

#[test]
fn test_positional_fidelity() {
    let k = keys(9);
    let base =
        deposit_obligation_collateral(1, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7], k[8])
            .unwrap();
    // Swap the two leading accounts; output positions must move in lockstep.
    let swapped =
        deposit_obligation_collateral(1, k[1], k[0], k[2], k[3], k[4], k[5], k[6], k[7], k[8])
            .unwrap();

    assert_eq!(base.accounts[0].pubkey, swapped.accounts[1].pubkey);
    assert_eq!(base.accounts[1].pubkey, swapped.accounts[0].pubkey);
    assert_eq!(base.accounts[2..], swapped.accounts[2..]);
    // Flags stay with the position, not the address.
    assert!(base.accounts[0].is_writable && swapped.accounts[0].is_writable);
}

#[test]
fn test_amount_range_check() {
    let k = keys(9);
    let encode = |amount: i128| {
        deposit_obligation_collateral(amount, k[0], k[1], k[2], k[3], k[4], k[5], k[6], k[7], k[8])
    };

    assert!(encode(0).is_ok());
    assert!(encode(u64::MAX as i128).is_ok());

    assert!(matches!(
        encode(-1),
        Err(LendingError::AmountOutOfRange(-1))
    ));
    let too_big = u64::MAX as i128 + 1;
    assert!(matches!(
        encode(too_big),
        Err(LendingError::AmountOutOfRange(n)) if n == too_big
    ));
}
