use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// Withdraw excess collateral from an obligation. The loan must remain
/// healthy.
///
///   0. `[writable]` Source withdraw reserve collateral supply SPL Token
///      account
///   1. `[writable]` Destination collateral token account, minted by the
///      withdraw reserve collateral mint; `transfer_authority` can transfer
///      `collateral_amount`
///   2. `[]` Withdraw reserve account
///   3. `[]` Borrow reserve account
///   4. `[writable]` Obligation
///   5. `[writable]` Obligation token mint
///   6. `[writable]` Obligation token input
///   7. `[]` Lending market account
///   8. `[]` Derived lending market authority
///   9. `[signer]` User transfer authority
///   10. `[]` Dex market
///   11. `[]` Dex market order book side
///   12. `[]` Temporary memory
///   13. `[]` Clock sysvar
///   14. `[]` Token program id
#[allow(clippy::too_many_arguments)]
pub fn withdraw_obligation_collateral(
    collateral_amount: i128,
    source_collateral_supply: Pubkey,
    destination_collateral: Pubkey,
    withdraw_reserve: Pubkey,
    borrow_reserve: Pubkey,
    obligation: Pubkey,
    obligation_mint: Pubkey,
    obligation_token_input: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
    dex_market: Pubkey,
    dex_order_book_side: Pubkey,
    memory: Pubkey,
) -> Result<Instruction> {
    let amount = checked_amount(collateral_amount)?;
    let data = amount_payload(LendingOpcode::WithdrawObligationCollateral, amount);

    let accounts = vec![
        AccountMeta::new(source_collateral_supply, false),
        AccountMeta::new(destination_collateral, false),
        AccountMeta::new_readonly(withdraw_reserve, false),
        AccountMeta::new_readonly(borrow_reserve, false),
        AccountMeta::new(obligation, false),
        AccountMeta::new(obligation_mint, false),
        AccountMeta::new(obligation_token_input, false),
        AccountMeta::new_readonly(lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(transfer_authority, true),
        AccountMeta::new_readonly(dex_market, false),
        AccountMeta::new_readonly(dex_order_book_side, false),
        AccountMeta::new_readonly(memory, false),
        AccountMeta::new_readonly(clock::id(), false),
        AccountMeta::new_readonly(*TOKEN_PROGRAM_ID, false),
    ];

    Ok(Instruction {
        program_id: *LENDING_PROGRAM_ID,
        accounts,
        data,
    })
}
