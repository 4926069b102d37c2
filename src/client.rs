//! High-level client — `ReadApiClient`, the primary entry point.
//!
//! Holds the request id and a transport; implements [`ReadApi`]. No state
//! changes between calls, so one client can serve many concurrent callers.

use crate::domain::asset::query::{AssetIdParams, GetAssetsByGroupParams, GetAssetsByOwnerParams};
use crate::domain::asset::{Asset, AssetList, AssetProof, AssetSortBy, Pagination};
use crate::error::{ReadApiError, ReadApiResult};
use crate::rpc::{methods, JsonRpcRequest, JsonRpcResponse, ReadApi, RpcTransport};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use solana_pubkey::Pubkey;
use std::sync::Arc;

#[cfg(feature = "http")]
use crate::error::SdkError;
#[cfg(feature = "http")]
use crate::http::{HttpTransport, RetryPolicy, RetryingTransport};
#[cfg(feature = "http")]
use crate::rpc::DEFAULT_REQUEST_ID;

/// JSON-RPC client for the compressed-asset read API.
#[derive(Clone)]
pub struct ReadApiClient {
    transport: Arc<dyn RpcTransport>,
    request_id: String,
}

impl ReadApiClient {
    /// Client over HTTP with default settings.
    #[cfg(feature = "http")]
    pub fn new(endpoint: &str) -> Result<Self, SdkError> {
        Self::builder(endpoint).build()
    }

    #[cfg(feature = "http")]
    pub fn builder(endpoint: &str) -> ReadApiClientBuilder {
        ReadApiClientBuilder::new(endpoint)
    }

    /// Client over any transport.
    pub fn with_transport(transport: impl RpcTransport + 'static, request_id: &str) -> Self {
        Self {
            transport: Arc::new(transport),
            request_id: request_id.to_string(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Send one JSON-RPC call and decode its `result`.
    ///
    /// The four read API methods are built on this; it is public so callers can
    /// reach other methods of the same service with the same error contract.
    pub async fn request<P, R>(&self, method: &str, params: &P) -> ReadApiResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params).map_err(|source| ReadApiError::Encode {
            method: method.to_string(),
            source,
        })?;
        let request = JsonRpcRequest::new(method, &self.request_id, params);

        tracing::debug!(method, id = %self.request_id, "Read API request");
        let body = self.transport.send(&request).await?;

        let response: JsonRpcResponse =
            serde_json::from_value(body).map_err(|source| ReadApiError::Decode {
                method: method.to_string(),
                source,
            })?;
        let result = response.into_result(method)?;

        serde_json::from_value(result).map_err(|source| ReadApiError::Decode {
            method: method.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ReadApi for ReadApiClient {
    async fn get_asset(&self, asset_address: &Pubkey) -> ReadApiResult<Asset> {
        let params = AssetIdParams {
            id: asset_address.to_string(),
        };
        self.request(methods::GET_ASSET, &params).await
    }

    async fn get_asset_proof(&self, asset_address: &Pubkey) -> ReadApiResult<AssetProof> {
        let params = AssetIdParams {
            id: asset_address.to_string(),
        };
        self.request(methods::GET_ASSET_PROOF, &params).await
    }

    async fn get_assets_by_owner(
        &self,
        owner_address: &Pubkey,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> ReadApiResult<AssetList> {
        let params =
            GetAssetsByOwnerParams::new(owner_address.to_string(), pagination, sort_by, limit)?;
        self.request(methods::GET_ASSETS_BY_OWNER, &params).await
    }

    async fn get_assets_by_group(
        &self,
        group_key: &str,
        group_value: &str,
        pagination: Pagination,
        sort_by: Option<AssetSortBy>,
        limit: Option<u32>,
    ) -> ReadApiResult<AssetList> {
        let params = GetAssetsByGroupParams::new(
            group_key.to_string(),
            group_value.to_string(),
            pagination,
            sort_by,
            limit,
        )?;
        self.request(methods::GET_ASSETS_BY_GROUP, &params).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub struct ReadApiClientBuilder {
    endpoint: String,
    request_id: String,
    http_client: Option<reqwest::Client>,
    retry: RetryPolicy,
}

#[cfg(feature = "http")]
impl ReadApiClientBuilder {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            request_id: DEFAULT_REQUEST_ID.to_string(),
            http_client: None,
            retry: RetryPolicy::None,
        }
    }

    /// JSON-RPC `id` sent with every request.
    pub fn request_id(mut self, id: &str) -> Self {
        self.request_id = id.to_string();
        self
    }

    /// Use a pre-configured HTTP client (timeouts, headers, TLS).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Wrap the transport in a retry layer. Off by default.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<ReadApiClient, SdkError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(SdkError::Validation("endpoint cannot be empty".to_string()));
        }
        if self.request_id.is_empty() {
            return Err(SdkError::Validation("request id cannot be empty".to_string()));
        }

        let http = match self.http_client {
            Some(client) => HttpTransport::with_client(endpoint, client),
            None => HttpTransport::new(endpoint)?,
        };

        Ok(match self.retry.config() {
            Some(config) => {
                ReadApiClient::with_transport(RetryingTransport::new(http, config), &self.request_id)
            }
            None => ReadApiClient::with_transport(http, &self.request_id),
        })
    }
}
