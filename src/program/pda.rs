//! PDA (Program Derived Address) derivation functions.
//!
//! Compressed assets have no account of their own; their address is a PDA of
//! the Merkle tree and the leaf index, derived under the Bubblegum program.

use solana_pubkey::Pubkey;

use crate::program::constants::ASSET_SEED;

/// Get the asset PDA for a leaf of a Merkle tree.
///
/// Seeds: ["asset", tree, leaf_index (8 bytes LE)]
pub fn get_asset_pda(tree: &Pubkey, leaf_index: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ASSET_SEED, tree.as_ref(), &leaf_index.to_le_bytes()],
        program_id,
    )
}
