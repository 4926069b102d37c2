//! JSON-RPC 2.0 envelope types.

use crate::error::ReadApiError;
use serde::{Deserialize, Serialize};

/// Protocol version sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id used when the client is not configured with one.
pub const DEFAULT_REQUEST_ID: &str = "rpd-op-123";

/// Outgoing request: `{jsonrpc, method, id, params}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub id: String,
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    pub fn new(method: &str, id: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            id: id.to_string(),
            params,
        }
    }
}

/// Incoming response. Only `result` is consumed; `error` only feeds the
/// message of a [`ReadApiError::NoResult`].
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JsonRpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Extract `result`, or fail with [`ReadApiError::NoResult`].
    pub fn into_result(self, method: &str) -> Result<serde_json::Value, ReadApiError> {
        if let Some(result) = self.result {
            return Ok(result);
        }

        let message = match self.error {
            Some(err) => {
                tracing::warn!(method, code = err.code, message = %err.message, "Read API returned an error object");
                format!("{} (code {})", err.message, err.code)
            }
            None => "response contained no result".to_string(),
        };

        Err(ReadApiError::NoResult {
            method: method.to_string(),
            message,
        })
    }
}
