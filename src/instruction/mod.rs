//! Builders for the lending program's client-initiated instructions.
//!
//! Each builder produces the exact wire payload the program expects: one
//! opcode byte followed by little-endian fixed-width arguments, no padding
//! and no length prefix, plus the ordered account list with signer/writable
//! flags. The program addresses accounts purely by position, so the key
//! tables in this module are part of the wire contract and must never be
//! reordered.
//!
//! Builders are pure: no network, no shared state, byte-identical output for
//! identical input. Semantic correctness of which address lands in which
//! slot is the caller's responsibility; the builders guarantee position and
//! flags only.

mod borrow;
mod deposit;
mod deposit_obligation_collateral;
mod repay;
mod withdraw;
mod withdraw_obligation_collateral;

#[cfg(test)]
mod tests;

pub use self::borrow::{borrow_liquidity, BorrowAmountType};
pub use self::deposit::deposit_reserve_liquidity;
pub use self::deposit_obligation_collateral::deposit_obligation_collateral;
pub use self::repay::repay_obligation_liquidity;
pub use self::withdraw::withdraw_reserve_liquidity;
pub use self::withdraw_obligation_collateral::withdraw_obligation_collateral;

use crate::errors::{LendingError, Result};
use crate::models::LendingOpcode;

/// Narrow an amount coming out of the caller's arithmetic to the `u64` the
/// program encodes. Amounts are already in the smallest on-chain unit; zero
/// is valid, negative values and values past `u64::MAX` are not.
pub(crate) fn checked_amount(amount: i128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| LendingError::AmountOutOfRange(amount))
}

/// Opcode byte followed by one little-endian u64 amount, the payload shape
/// shared by every builder in this module.
pub(crate) fn amount_payload(opcode: LendingOpcode, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(1 + 8);
    data.push(opcode as u8);
    data.extend_from_slice(&amount.to_le_bytes());
    data
}
