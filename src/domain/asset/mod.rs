//! Asset domain — read API asset records and lookups over them.

pub mod query;
pub mod wire;

pub use query::{AssetSortBy, AssetSortDirection, AssetSortField, Pagination};
pub use wire::{
    Asset, AssetAuthority, AssetCompression, AssetContent, AssetContentMetadata, AssetCreator,
    AssetGrouping, AssetList, AssetOwnership, AssetProof, AssetRoyalty, AssetSupply,
    AuthorityScope,
};

use serde::{Deserialize, Serialize};

/// Grouping key under which the read API reports collection membership.
pub const COLLECTION_GROUP_KEY: &str = "collection";

impl Asset {
    /// First authority holding the `full` scope.
    pub fn full_authority(&self) -> Option<&AssetAuthority> {
        self.authorities
            .iter()
            .find(|a| a.scopes.contains(&AuthorityScope::Full))
    }

    /// First grouping entry with the given key.
    pub fn group(&self, group_key: &str) -> Option<&AssetGrouping> {
        self.grouping.iter().find(|g| g.group_key == group_key)
    }

    /// The `collection` grouping entry, if the asset belongs to one.
    pub fn collection_group(&self) -> Option<&AssetGrouping> {
        self.group(COLLECTION_GROUP_KEY)
    }
}

/// An asset paired with its current Merkle proof.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetWithProof {
    pub asset: Asset,
    pub proof: AssetProof,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Asset;
    use serde_json::json;

    /// A complete `getAsset` result with one full-scope authority and one collection grouping.
    pub fn asset_json(id: &str, authority: &str, collection: &str, tree: &str) -> serde_json::Value {
        json!({
            "interface": "V1_NFT",
            "id": id,
            "content": {
                "$schema": "https://schema.metaplex.com/nft1.0.json",
                "json_uri": "https://example.com/nft.json",
                "files": [],
                "metadata": {
                    "name": "Compressed #1",
                    "symbol": "CNFT",
                    "description": "a compressed asset"
                },
                "links": {}
            },
            "authorities": [
                { "address": authority, "scopes": ["full"] }
            ],
            "compression": {
                "eligible": false,
                "compressed": true,
                "data_hash": "data",
                "creator_hash": "creator",
                "asset_hash": "asset",
                "tree": tree,
                "seq": 3,
                "leaf_id": 2
            },
            "grouping": [
                { "group_key": "collection", "group_value": collection }
            ],
            "royalty": {
                "royalty_model": "creators",
                "target": null,
                "percent": 0.05,
                "basis_points": 500,
                "primary_sale_happened": false,
                "locked": false
            },
            "creators": [
                { "address": authority, "share": 100, "verified": true }
            ],
            "ownership": {
                "frozen": false,
                "delegated": false,
                "delegate": null,
                "ownership_model": "single",
                "owner": authority
            },
            "supply": {
                "print_max_supply": 0,
                "print_current_supply": 0,
                "edition_nonce": 254
            },
            "mutable": true,
            "burnt": false
        })
    }

    pub fn asset(id: &str, authority: &str, collection: &str, tree: &str) -> Asset {
        serde_json::from_value(asset_json(id, authority, collection, tree)).unwrap()
    }
}
