//! Transport seam between the read API client and the wire.

use crate::error::ReadApiResult;
use crate::rpc::envelope::JsonRpcRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Delivers one JSON-RPC request and returns the decoded response body.
///
/// Implementations report network and HTTP-status failures; unwrapping
/// `result` is left to the caller.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: &JsonRpcRequest) -> ReadApiResult<serde_json::Value>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn send(&self, request: &JsonRpcRequest) -> ReadApiResult<serde_json::Value> {
        (**self).send(request).await
    }
}
