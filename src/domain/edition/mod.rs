//! Edition view — print-edition info derived from an asset.

mod convert;

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Edition info of a compressed asset. Compressed assets are always originals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub address: Pubkey,
    pub is_original: bool,
    pub supply: u64,
    pub max_supply: Option<u64>,
}
