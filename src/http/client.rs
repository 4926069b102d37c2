//! Low-level HTTP transport — `HttpTransport`.
//!
//! POSTs the JSON-RPC envelope to a single endpoint and hands back the parsed
//! body. Unwrapping `result` happens in [`ReadApiClient`](crate::client::ReadApiClient).

use crate::error::{ReadApiError, ReadApiResult};
use crate::rpc::{JsonRpcRequest, RpcTransport};

use async_trait::async_trait;
use reqwest::Client;

/// JSON-RPC over HTTP POST.
///
/// Sets no timeout of its own: pass a configured [`reqwest::Client`] to
/// [`HttpTransport::with_client`] to control timeouts, TLS or headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> ReadApiResult<Self> {
        Ok(Self::with_client(endpoint, Client::builder().build()?))
    }

    pub fn with_client(endpoint: &str, client: Client) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &JsonRpcRequest) -> ReadApiResult<serde_json::Value> {
        tracing::debug!(method = %request.method, endpoint = %self.endpoint, "POST read API request");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(
                method = %request.method,
                status = status.as_u16(),
                "Read API returned non-success status"
            );
            return Err(ReadApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ReadApiError::Decode {
            method: request.method.clone(),
            source,
        })
    }
}
