//! On-chain program constants and PDA derivation.

pub mod constants;
pub mod pda;

pub use constants::{ASSET_SEED, BUBBLEGUM_PROGRAM_ID};
pub use pda::get_asset_pda;
