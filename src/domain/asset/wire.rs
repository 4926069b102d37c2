//! Wire types for read API asset responses.
//!
//! Field names follow the read API's snake_case JSON exactly.

use crate::shared::serde_util::null_as_default;
use crate::shared::PubkeyStr;
use serde::{Deserialize, Serialize};

// ─── Asset ──────────────────────────────────────────────────────────────────

/// A compressed asset as returned by `getAsset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    #[serde(default)]
    pub interface: String,
    pub id: PubkeyStr,
    pub content: AssetContent,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub authorities: Vec<AssetAuthority>,
    pub compression: AssetCompression,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub grouping: Vec<AssetGrouping>,
    pub royalty: AssetRoyalty,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub creators: Vec<AssetCreator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<AssetOwnership>,
    pub supply: AssetSupply,
    pub mutable: bool,
    #[serde(default)]
    pub burnt: bool,
}

// ─── Content ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetContent {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub json_uri: String,
    #[serde(default)]
    pub metadata: AssetContentMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<serde_json::Value>,
}

/// Off-chain JSON metadata as indexed by the read API.
///
/// `name` and `symbol` are lifted out; every other key (description,
/// attributes, ...) is kept in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetContentMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Authorities ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetAuthority {
    pub address: PubkeyStr,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub scopes: Vec<AuthorityScope>,
}

/// Scope granted to an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityScope {
    Full,
    Royalty,
    Metadata,
    Extension,
    #[serde(other)]
    Unknown,
}

// ─── Compression ────────────────────────────────────────────────────────────

/// Tree/leaf identifiers of a compressed asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetCompression {
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub compressed: bool,
    #[serde(default)]
    pub data_hash: String,
    #[serde(default)]
    pub creator_hash: String,
    #[serde(default)]
    pub asset_hash: String,
    pub tree: PubkeyStr,
    #[serde(default)]
    pub seq: u64,
    pub leaf_id: u64,
}

// ─── Grouping ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetGrouping {
    pub group_key: String,
    pub group_value: String,
}

// ─── Royalty / creators ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRoyalty {
    #[serde(default)]
    pub royalty_model: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub percent: f64,
    pub basis_points: u16,
    pub primary_sale_happened: bool,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetCreator {
    pub address: PubkeyStr,
    pub share: u8,
    pub verified: bool,
}

// ─── Ownership / supply ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetOwnership {
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub delegated: bool,
    #[serde(default)]
    pub delegate: Option<PubkeyStr>,
    #[serde(default)]
    pub ownership_model: String,
    pub owner: PubkeyStr,
}

/// Print-edition supply counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetSupply {
    #[serde(default)]
    pub print_max_supply: Option<u64>,
    #[serde(default)]
    pub print_current_supply: u64,
    #[serde(default)]
    pub edition_nonce: Option<u8>,
}

// ─── Proof / lists ──────────────────────────────────────────────────────────

/// Merkle proof bundle as returned by `getAssetProof`. Passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetProof {
    pub root: String,
    pub proof: Vec<String>,
    pub node_index: u64,
    pub leaf: String,
    pub tree_id: PubkeyStr,
}

/// A page of assets from `getAssetsByOwner` / `getAssetsByGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetList {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub items: Vec<Asset>,
}
