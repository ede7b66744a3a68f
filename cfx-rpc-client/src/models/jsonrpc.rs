use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
///
/// This structure represents a standard JSON-RPC request with generic parameters.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: &'static str,

    /// Method name to call
    pub method: &'a str,

    /// Method parameters
    pub params: T,

    /// Request identifier
    pub id: u64,
}

impl<'a, T> JsonRpcRequest<'a, T> {
    /// Create a new JSON-RPC request
    ///
    /// # Arguments
    ///
    /// * `id` - Request identifier
    /// * `method` - Method name, e.g. `cfx_getBalance`
    /// * `params` - Method parameters
    pub fn new(id: u64, method: &'a str, params: T) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope
///
/// Exactly one of `result` and `error` is expected to be present.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC protocol version (should be "2.0")
    pub jsonrpc: String,

    /// Request identifier (matching the request)
    pub id: serde_json::Value,

    /// Method result on success
    #[serde(default)]
    pub result: Option<serde_json::Value>,

    /// Error details on failure
    #[serde(default)]
    pub error: Option<JsonRpcErrorDetail>,
}

/// JSON-RPC 2.0 error detail
///
/// This structure contains the detailed error information in a JSON-RPC error response.
#[derive(Debug, Deserialize)]
pub struct JsonRpcErrorDetail {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
