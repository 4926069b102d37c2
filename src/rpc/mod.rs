//! Read API capability set and JSON-RPC plumbing.

pub mod envelope;
pub mod transport;

pub use envelope::{JsonRpcRequest, JsonRpcResponse, DEFAULT_REQUEST_ID, JSONRPC_VERSION};
pub use transport::RpcTransport;

use crate::domain::asset::{Asset, AssetList, AssetProof, AssetSortBy, AssetWithProof, Pagination};
use crate::error::ReadApiResult;
use async_trait::async_trait;
use solana_pubkey::Pubkey;

/// Method names on the wire.
pub mod methods {
    pub const GET_ASSET: &str = "getAsset";
    pub const GET_ASSET_PROOF: &str = "getAssetProof";
    pub const GET_ASSETS_BY_OWNER: &str = "getAssetsByOwner";
    pub const GET_ASSETS_BY_GROUP: &str = "getAssetsByGroup";
}

/// The read API operations other layers depend on.
#[async_trait]
pub trait ReadApi: Send + Sync {
    /// Fetch one asset. Fails with `NoResult` when the asset is unknown.
    async fn get_asset(&self, asset_address: &Pubkey) -> ReadApiResult<Asset>;

    /// Fetch the current Merkle proof of an asset.
    async fn get_asset_proof(&self, asset_address: &Pubkey) -> ReadApiResult<AssetProof>;

    /// List assets held by `owner_address`.
    ///
    /// Pagination is validated before anything is sent.
    async fn get_assets_by_owner(
        &self,
        owner_address: &Pubkey,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> ReadApiResult<AssetList>;

    /// List assets in a group (e.g. `("collection", <collection address>)`).
    ///
    /// Pagination is validated before anything is sent.
    async fn get_assets_by_group(
        &self,
        group_key: &str,
        group_value: &str,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> ReadApiResult<AssetList>;

    /// Fetch an asset and its proof.
    async fn get_asset_with_proof(&self, asset_address: &Pubkey) -> ReadApiResult<AssetWithProof> {
        let asset = self.get_asset(asset_address).await?;
        let proof = self.get_asset_proof(asset_address).await?;
        Ok(AssetWithProof { asset, proof })
    }
}
