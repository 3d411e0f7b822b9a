use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;
use solana_sdk_ids::sysvar::clock;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// Deposit liquidity into a reserve in exchange for collateral representing
/// ownership of the reserve liquidity pool.
///
///   0. `[writable]` Source liquidity token account;
///      `transfer_authority` can transfer `liquidity_amount`
///   1. `[writable]` Destination collateral token account, minted by the
///      reserve collateral mint
///   2. `[writable]` Reserve account
///   3. `[writable]` Reserve liquidity supply SPL Token account
///   4. `[writable]` Reserve collateral SPL Token mint
///   5. `[]` Lending market account
///   6. `[]` Derived lending market authority
///   7. `[signer]` User transfer authority
///   8. `[]` Clock sysvar
///   9. `[]` Token program id
#[allow(clippy::too_many_arguments)]
pub fn deposit_reserve_liquidity(
    liquidity_amount: i128,
    source_liquidity: Pubkey,
    destination_collateral: Pubkey,
    reserve: Pubkey,
    reserve_liquidity_supply: Pubkey,
    reserve_collateral_mint: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
) -> Result<Instruction> {
    let amount = checked_amount(liquidity_amount)?;
    let data = amount_payload(LendingOpcode::DepositReserveLiquidity, amount);

    let accounts = vec![
        AccountMeta::new(source_liquidity, false),
        AccountMeta::new(destination_collateral, false),
        AccountMeta::new(reserve, false),
        AccountMeta::new(reserve_liquidity_supply, false),
        AccountMeta::new(reserve_collateral_mint, false),
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
