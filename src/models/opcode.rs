//! Instruction opcodes understood by the on-chain lending program

use serde::{Deserialize, Serialize};

/// Instruction kinds of the lending program.
///
/// The numeric value is the first byte of every instruction payload and is a
/// stable ABI: new kinds extend the list, existing values are never
/// renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LendingOpcode {
    InitLendingMarket = 0,
    InitReserve = 1,
    InitObligation = 2,
    DepositReserveLiquidity = 3,
    WithdrawReserveLiquidity = 4,
    BorrowLiquidity = 5,
    RepayObligationLiquidity = 6,
    LiquidateObligation = 7,
    AccrueReserveInterest = 8,
    DepositObligationCollateral = 9,
    WithdrawObligationCollateral = 10,
}

impl LendingOpcode {
    /// The opcodes the client surfaces in its transaction list, in display
    /// order.
    pub const DISPLAYED: [LendingOpcode; 7] = [
        LendingOpcode::DepositReserveLiquidity,
        LendingOpcode::WithdrawReserveLiquidity,
        LendingOpcode::BorrowLiquidity,
        LendingOpcode::RepayObligationLiquidity,
        LendingOpcode::LiquidateObligation,
        LendingOpcode::DepositObligationCollateral,
        LendingOpcode::WithdrawObligationCollateral,
    ];

    /// Human-readable name for the opcodes the client displays.
    ///
    /// Opcodes without a label are valid program instructions the client has
    /// no view for; they classify to a tombstone, never to an error.
    pub fn display_label(self) -> Option<&'static str> {
        match self {
            LendingOpcode::InitLendingMarket => None,
            LendingOpcode::InitReserve => None,
            LendingOpcode::InitObligation => None,
            LendingOpcode::DepositReserveLiquidity => Some("Deposit"),
            LendingOpcode::WithdrawReserveLiquidity => Some("Withdraw"),
            LendingOpcode::BorrowLiquidity => Some("Borrow"),
            LendingOpcode::RepayObligationLiquidity => Some("Repay"),
            LendingOpcode::LiquidateObligation => Some("Liquidate"),
            LendingOpcode::AccrueReserveInterest => None,
            LendingOpcode::DepositObligationCollateral => Some("DepositObligationCollateral"),
            LendingOpcode::WithdrawObligationCollateral => Some("WithdrawObligationCollateral"),
        }
    }

    /// Whether the client's transaction list shows this opcode.
    pub fn is_displayed(self) -> bool {
        self.display_label().is_some()
    }
}

impl TryFrom<u8> for LendingOpcode {
    type Error = u8;

    /// Unknown bytes are not an error condition, they simply report as
    /// unrecognized; the original byte is handed back for logging.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => LendingOpcode::InitLendingMarket,
            1 => LendingOpcode::InitReserve,
            2 => LendingOpcode::InitObligation,
            3 => LendingOpcode::DepositReserveLiquidity,
            4 => LendingOpcode::WithdrawReserveLiquidity,
            5 => LendingOpcode::BorrowLiquidity,
            6 => LendingOpcode::RepayObligationLiquidity,
            7 => LendingOpcode::LiquidateObligation,
            8 => LendingOpcode::AccrueReserveInterest,
            9 => LendingOpcode::DepositObligationCollateral,
            10 => LendingOpcode::WithdrawObligationCollateral,
            other => return Err(other),
        })
    }
}

impl From<LendingOpcode> for u8 {
    fn from(opcode: LendingOpcode) -> Self {
        opcode as u8
    }
}
