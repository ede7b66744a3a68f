use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use tracing::debug;

use crate::error::TransportError;
use crate::models::jsonrpc::{JsonRpcRequest, JsonRpcResponse};

/// Executes a named RPC call with parameters and returns the raw decoded payload
///
/// The seam between the pure decoding core and the network: implementations
/// complete with exactly one of a result value or an error. The trait is
/// object-safe so clients can hold `Arc<dyn Transport>`, and mockable so the
/// client can be tested without a node.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `method` with `params` and return the `result` payload.
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError>;
}

/// JSON-RPC 2.0 transport over HTTP
///
/// Posts each call to a single endpoint with an incrementing request id. Node
/// error objects surface as [`TransportError::Rpc`]; envelope violations as
/// [`TransportError::InvalidResponse`].
pub struct HttpTransport {
    /// Shared HTTP connection pool
    http: reqwest::Client,

    /// Endpoint URL of the node
    url: reqwest::Url,

    /// Id for the next request
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Create a transport for the given endpoint URL.
    ///
    /// # Arguments
    ///
    /// * `url` - URL of the Conflux RPC endpoint
    ///
    /// # Returns
    ///
    /// * `Result<Self, TransportError>` - New transport or a URL error
    pub fn new(url: &str) -> Result<Self, TransportError> {
        let url = url
            .parse()
            .map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            url,
            next_id: AtomicU64::new(1),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, &params);
        debug!("Sending RPC request id={} method={}", id, method);

        let response: JsonRpcResponse = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(TransportError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or_else(|| {
            TransportError::InvalidResponse("response carries neither result nor error".to_string())
        })
    }
}
