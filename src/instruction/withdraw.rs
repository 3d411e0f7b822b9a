use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// Withdraw tokens from a reserve. The input is a collateral token
/// representing ownership of the reserve liquidity pool.
///
///   0. `[writable]` Source collateral token account;
///      `transfer_authority` can transfer `collateral_amount`
///   1. `[writable]` Destination liquidity token account
///   2. `[writable]` Reserve account
///   3. `[writable]` Reserve collateral SPL Token mint
///   4. `[writable]` Reserve liquidity supply SPL Token account
///   5. `[]` Lending market account
///   6. `[]` Derived lending market authority
///   7. `[signer]` User transfer authority
///   8. `[]` Clock sysvar
///   9. `[]` Token program id
#[allow(clippy::too_many_arguments)]
pub fn withdraw_reserve_liquidity(
    collateral_amount: i128,
    source_collateral: Pubkey,
    destination_liquidity: Pubkey,
    reserve: Pubkey,
    reserve_collateral_mint: Pubkey,
    reserve_liquidity_supply: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
) -> Result<Instruction> {
    let amount = checked_amount(collateral_amount)?;
    let data = amount_payload(LendingOpcode::WithdrawReserveLiquidity, amount);

    let accounts = vec![
        AccountMeta::new(source_collateral, false),
        AccountMeta::new(destination_liquidity, false),
        AccountMeta::new(reserve, false),
        AccountMeta::new(reserve_collateral_mint, false),
        AccountMeta::new(reserve_liquidity_supply, false),
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
