use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// Repay loaned tokens to a reserve and receive collateral tokens back. The
/// obligation balance is reduced accordingly.
///
///   0. `[writable]` Source liquidity token account;
///      `transfer_authority` can transfer `liquidity_amount`
///   1. `[writable]` Destination collateral token account
///   2. `[writable]` Repay reserve account
///   3. `[writable]` Repay reserve liquidity supply SPL Token account
///   4. `[]` Withdraw reserve account
///   5. `[writable]` Withdraw reserve collateral supply SPL Token account
///   6. `[writable]` Obligation
///   7. `[writable]` Obligation token mint
///   8. `[writable]` Obligation token input
///   9. `[]` Lending market account
///   10. `[]` Derived lending market authority
///   11. `[signer]` User transfer authority
///   12. `[]` Clock sysvar
///   13. `[]` Token program id
#[allow(clippy::too_many_arguments)]
pub fn repay_obligation_liquidity(
    liquidity_amount: i128,
    source_liquidity: Pubkey,
    destination_collateral: Pubkey,
    repay_reserve: Pubkey,
    repay_reserve_liquidity_supply: Pubkey,
    withdraw_reserve: Pubkey,
    withdraw_reserve_collateral_supply: Pubkey,
    obligation: Pubkey,
    obligation_mint: Pubkey,
    obligation_token_input: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
) -> Result<Instruction> {
    let amount = checked_amount(liquidity_amount)?;
    let data = amount_payload(LendingOpcode::RepayObligationLiquidity, amount);

    let accounts = vec![
        AccountMeta::new(source_liquidity, false),
        AccountMeta::new(destination_collateral, false),
        AccountMeta::new(repay_reserve, false),
        AccountMeta::new(repay_reserve_liquidity_supply, false),
        AccountMeta::new_readonly(withdraw_reserve, false),
        AccountMeta::new(withdraw_reserve_collateral_supply, false),
        AccountMeta::new(obligation, false),
        AccountMeta::new(obligation_mint, false),
        AccountMeta::new(obligation_token_input, false),
        AccountMeta::new_readonly(lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(transfer_authority, true),
        AccountMeta::new_readonly(clock::id(), false),
        AccountMeta::new_readonly(*TOKEN_PROGRAM_ID, false),
    ];

    Ok(Instruction {
        program_id: *LENDING_PROGRAM_ID,
        accounts,
        data,
    })
}
