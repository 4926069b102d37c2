//! Mint view — a synthetic token-mint descriptor for a compressed asset.
//!
//! Compressed assets have no mint account. The view describes a
//! non-divisible, single-unit token whose authorities are the asset itself.

mod convert;

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Decimals of every compressed asset mint.
pub const MINT_DECIMALS: u8 = 0;

/// Supply of every compressed asset mint.
pub const MINT_SUPPLY: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    pub address: Pubkey,
    pub mint_authority_address: Pubkey,
    pub freeze_authority_address: Pubkey,
    pub decimals: u8,
    pub supply: u64,
    pub is_wrapped_sol: bool,
    pub currency: Currency,
}

/// Currency descriptor attached to token amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub decimals: u8,
    pub namespace: String,
}

impl Currency {
    /// The generic SPL token currency.
    pub fn spl_token(decimals: u8) -> Self {
        Self {
            symbol: "Token".to_string(),
            decimals,
            namespace: "spl-token".to_string(),
        }
    }
}
