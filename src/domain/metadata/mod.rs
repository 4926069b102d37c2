//! Metadata view — token-metadata shaped info derived from an asset.

mod convert;

use crate::domain::asset::{AssetCompression, AssetContentMetadata, AssetCreator};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Metadata of a compressed asset.
///
/// `address` is the asset's leaf PDA (there is no metadata account).
/// `compression` carries the tree/leaf identifiers for consumers that need them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub address: Pubkey,
    pub mint_address: Pubkey,
    pub update_authority_address: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub json: AssetContentMetadata,
    pub json_loaded: bool,
    pub is_mutable: bool,
    pub primary_sale_happened: bool,
    pub seller_fee_basis_points: u16,
    pub edition_nonce: Option<u8>,
    pub creators: Vec<AssetCreator>,
    pub token_standard: TokenStandard,
    pub collection: Option<Collection>,
    pub compression: AssetCompression,
}

/// Collection reference. The read API cannot tell whether membership was
/// verified, so `verified` is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub address: Pubkey,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
    ProgrammableNonFungible,
}
