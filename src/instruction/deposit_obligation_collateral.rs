use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use super::{amount_payload, checked_amount};
use crate::constants::{LENDING_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::Result;
use crate::models::LendingOpcode;

/// Deposit additional collateral to an obligation.
///
///   0. `[writable]` Source collateral token account, minted by the deposit
///      reserve collateral mint; `transfer_authority` can transfer
///      `collateral_amount`
///   1. `[writable]` Destination deposit reserve collateral supply SPL Token
///      account
///   2. `[]` Deposit reserve account
///   3. `[writable]` Obligation
///   4. `[writable]` Obligation token mint
///   5. `[writable]` Obligation token output
///   6. `[]` Lending market account
///   7. `[]` Derived lending market authority
///   8. `[signer]` User transfer authority
///   9. `[]` Token program id
#[allow(clippy::too_many_arguments)]
pub fn deposit_obligation_collateral(
    collateral_amount: i128,
    source_collateral: Pubkey,
    destination_collateral_supply: Pubkey,
    deposit_reserve: Pubkey,
    obligation: Pubkey,
    obligation_mint: Pubkey,
    obligation_token_output: Pubkey,
    lending_market: Pubkey,
    lending_market_authority: Pubkey,
    transfer_authority: Pubkey,
) -> Result<Instruction> {
    let amount = checked_amount(collateral_amount)?;
    let data = amount_payload(LendingOpcode::DepositObligationCollateral, amount);

    let accounts = vec![
        AccountMeta::new(source_collateral, false),
        AccountMeta::new(destination_collateral_supply, false),
        AccountMeta::new_readonly(deposit_reserve, false),
        AccountMeta::new(obligation, false),
        AccountMeta::new(obligation_mint, false),
        AccountMeta::new(obligation_token_output, false),
        AccountMeta::new_readonly(lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(transfer_authority, true),
        AccountMeta::new_readonly(*TOKEN_PROGRAM_ID, false),
    ];

    Ok(Instruction {
        program_id: *LENDING_PROGRAM_ID,
        accounts,
        data,
    })
}
