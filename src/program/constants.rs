//! Constants for the Bubblegum compressed-NFT program.
//!
//! Program IDs and PDA seeds matching the on-chain program exactly.

use solana_pubkey::Pubkey;
use std::str::FromStr;

// ============================================================================
// Program IDs
// ============================================================================

lazy_static::lazy_static! {
    /// Metaplex Bubblegum Program ID
    pub static ref BUBBLEGUM_PROGRAM_ID: Pubkey = Pubkey::from_str("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY").unwrap();
}

// ============================================================================
// PDA Seeds
// ============================================================================

/// Leaf asset ID PDA seed
pub const ASSET_SEED: &[u8] = b"asset";
