use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// How the borrow amount argument is interpreted by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BorrowAmountType {
    /// Amount is the liquidity to borrow.
    LiquidityBorrowAmount = 0,
    /// Amount is the collateral to deposit against the borrow.
    CollateralDepositAmount = 1,
}

/// Borrow liquidity from a reserve by depositing collateral tokens. The
/// obligation tracks the position until it is repaid.
///
///   0. `[writable]` Source collateral token account;
///      `transfer_authority` can transfer `amount`
///   1. `[writable]` Destination liquidity token account
///   2. `[]` Deposit reserve account
///   3. `[writable]` Deposit reserve collateral supply SPL Token account
///   4. `[writable]` Borrow reserve account
///   5. `[writable]` Borrow reserve liquidity supply SPL Token account
///   6. `[writable]` Obligation
///   7. `[writable]` Obligation token mint
///   8. `[writable]` Obligation token output
///   9. `[]` Lending market account
///   10. `[]` Derived lending market authority
///   11. `[signer]` User transfer authority
///   12. `[]` Dex market
///   13. `[]` Dex market order book side
///   14. `[]` Temporary memory
///   15. `[]` Clock sysvar
///   16. `[]` Token program id
///   17. `[writable]` Host fee receiver, if any
#[allow(clippy::too_many_arguments)]
pub fn borrow_liquidity(
    amount: i128,
    amount_type: BorrowAmountType,
    source_collateral: Pubkey,
    destination_liquidity: Pubkey,
    deposit_reserve: Pubkey,
    deposit_reserve_collateral_supply: Pubkey,
    borrow_reserve: Pubkey,
    borrow_reserve_liquidity_supply: Pubkey,
    obligation: Pubkey,
    obligation_mint: Pubkey,
    obligation_token_output: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
    dex_market: Pubkey,
    dex_order_book_side: Pubkey,
    memory: Pubkey,
    host_fee_receiver: Option<Pubkey>,
) -> Result<Instruction> {
    let amount = checked_amount(amount)?;
    let mut data = amount_payload(LendingOpcode::BorrowLiquidity, amount);
    data.push(amount_type as u8);

    let mut accounts = vec![
        AccountMeta::new(source_collateral, false),
        AccountMeta::new(destination_liquidity, false),
        AccountMeta::new_readonly(deposit_reserve, false),
        AccountMeta::new(deposit_reserve_collateral_supply, false),
        AccountMeta::new(borrow_reserve, false),
        AccountMeta::new(borrow_reserve_liquidity_supply, false),
        AccountMeta::new(obligation, false),
        AccountMeta::new(obligation_mint, false),
        AccountMeta::new(obligation_token_output, false),
        AccountMeta::new_readonly(lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(transfer_authority, true),
        AccountMeta::new_readonly(dex_market, false),
        AccountMeta::new_readonly(dex_order_book_side, false),
        AccountMeta::new_readonly(memory, false),
        AccountMeta::new_readonly(clock::id(), false),
        AccountMeta::new_readonly(*TOKEN_PROGRAM_ID, false),
    ];
    if let Some(host_fee_receiver) = host_fee_receiver {
        accounts.push(AccountMeta::new(host_fee_receiver, false));
    }

    Ok(Instruction {
        program_id: *LENDING_PROGRAM_ID,
        accounts,
        data,
    })
}
