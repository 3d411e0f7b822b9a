//! Program ids and limits shared across the client

use once_cell::sync::Lazy;
use solana_pubkey::Pubkey;
use std::str::FromStr;

/// The on-chain lending program every encoded instruction targets and every
/// classified transaction is matched against.
pub static LENDING_PROGRAM_ID: Lazy<Pubkey> =
    Lazy::new(|| Pubkey::from_str("LendZqTs7gn5CTSJU1jWKhKuVpjJGom45nnwPb2AMTi").unwrap());

/// SPL Token program, the last entry of every instruction's key table.
pub static TOKEN_PROGRAM_ID: Lazy<Pubkey> =
    Lazy::new(|| Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap());

/// Upper bound on newly examined signatures per sync call. Keeps one call's
/// latency and RPC volume predictable; signatures past the bound are picked
/// up by the next call.
pub const MAX_NEW_SIGNATURES_PER_SYNC: usize = 100;

/// Default cluster for the CLI and the one-shot entry point.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
