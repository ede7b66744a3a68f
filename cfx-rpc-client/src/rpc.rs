use std::sync::Arc;

use alloy_primitives::{hex, U256};
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use crate::address::{Address, Network};
use crate::codec::to_minimal_hex;
use crate::config::Config;
use crate::decode::{
    decode_balance, decode_epoch_number, decode_gas_estimate, decode_gas_price,
    decode_next_nonce, EstimateGasAndCollateral,
};
use crate::error::{AddressError, ClientError, DecodeError};
use crate::transaction::RawTransaction;
use crate::transport::{HttpTransport, Transport};

/// Conflux RPC client for chain state queries and transaction submission
///
/// The client dispatches named `cfx_*` methods through its [`Transport`] and
/// decodes the results into native integers. It holds no mutable state, so it
/// is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct ConfluxClient {
    /// Transport executing the actual RPC calls
    transport: Arc<dyn Transport>,

    /// Network this client talks to; address arguments must be bound to it
    network: Network,
}

impl ConfluxClient {
    /// Create a client over an existing transport.
    pub fn new(transport: Arc<dyn Transport>, network: Network) -> Self {
        Self { transport, network }
    }

    /// Create a client with an HTTP transport and verify the connection is
    /// working by fetching the current epoch number.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - URL of the Conflux RPC endpoint
    /// * `network` - Network the endpoint serves, e.g. [`Network::Main`]
    ///
    /// # Returns
    ///
    /// * `Result<Self, ClientError>` - New client instance or an error
    pub async fn connect_http(rpc_url: &str, network: Network) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(rpc_url)?;
        let client = Self::new(Arc::new(transport), network);

        let epoch = client.epoch_number().await?;
        info!("Connected! Current epoch number: {epoch}");

        Ok(client)
    }

    /// Create a client from environment configuration.
    pub async fn connect(config: &Config) -> Result<Self, ClientError> {
        Self::connect_http(&config.rpc_url, Network::from_id(config.network_id)).await
    }

    /// The network this client is bound to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Fetch the current epoch number (`cfx_epochNumber`).
    #[instrument(skip(self), err)]
    pub async fn epoch_number(&self) -> Result<u64, ClientError> {
        let result = self.request_str("cfx_epochNumber", "epochNumber", vec![]).await?;
        Ok(decode_epoch_number(&result)?)
    }

    /// Fetch the drip balance of an account (`cfx_getBalance`).
    ///
    /// `address` is untrusted text; it is parsed and network-checked before
    /// anything reaches the wire.
    #[instrument(skip(self), err)]
    pub async fn balance(&self, address: &str) -> Result<U256, ClientError> {
        let address = self.checked_address(address)?;
        let result = self
            .request_str("cfx_getBalance", "balance", vec![json!(address.to_string())])
            .await?;
        Ok(decode_balance(&result)?)
    }

    /// Fetch the next usable nonce of an account (`cfx_getNextNonce`).
    #[instrument(skip(self), err)]
    pub async fn next_nonce(&self, address: &str) -> Result<u64, ClientError> {
        let address = self.checked_address(address)?;
        let result = self
            .request_str("cfx_getNextNonce", "nextNonce", vec![json!(address.to_string())])
            .await?;
        Ok(decode_next_nonce(&result)?)
    }

    /// Fetch the current gas price in drip (`cfx_gasPrice`).
    #[instrument(skip(self), err)]
    pub async fn gas_price(&self) -> Result<U256, ClientError> {
        let result = self.request_str("cfx_gasPrice", "gasPrice", vec![]).await?;
        Ok(decode_gas_price(&result)?)
    }

    /// Submit a signed, hex-encoded transaction (`cfx_sendRawTransaction`).
    ///
    /// Returns the transaction hash reported by the node.
    #[instrument(skip(self, raw_transaction), err)]
    pub async fn send_raw_transaction(&self, raw_transaction: &str) -> Result<String, ClientError> {
        self.request_str(
            "cfx_sendRawTransaction",
            "transactionHash",
            vec![json!(raw_transaction)],
        )
        .await
    }

    /// Execute a read-only contract call (`cfx_call`) with pre-encoded call
    /// data and return the raw hex output.
    ///
    /// ABI encoding of `data` is the caller's concern; a numeric output can be
    /// interpreted with [`decode_call_output`](crate::decode::decode_call_output).
    #[instrument(skip(self, data), err)]
    pub async fn call(&self, to: &str, data: &str) -> Result<String, ClientError> {
        let to = self.checked_address(to)?;
        let params = json!({
            "to": to.to_string(),
            "data": data,
        });
        self.request_str("cfx_call", "callOutput", vec![params]).await
    }

    /// Ask the node for gas and storage collateral estimates for a
    /// transaction (`cfx_estimateGasAndCollateral`).
    ///
    /// Assembles the call record from the transaction: `to` in its base32
    /// text form (rebuilt from canonical bytes and the chain id), `gasPrice`,
    /// `nonce` and `value` as minimal hex. The `data` key is included only
    /// when the transaction carries a non-empty payload, and `from` only when
    /// a sender is supplied.
    #[instrument(skip(self, tx, from), err)]
    pub async fn estimate_gas_and_collateral(
        &self,
        tx: &RawTransaction,
        from: Option<&Address>,
    ) -> Result<EstimateGasAndCollateral, ClientError> {
        let mut call = serde_json::Map::new();
        if let Some(from) = from {
            call.insert("from".to_string(), json!(from.to_string()));
        }
        call.insert("to".to_string(), json!(tx.to_address().to_string()));
        call.insert("gasPrice".to_string(), json!(to_minimal_hex(tx.gas_price)));
        call.insert("nonce".to_string(), json!(to_minimal_hex(tx.nonce)));
        call.insert("value".to_string(), json!(to_minimal_hex(tx.value)));
        if !tx.data.is_empty() {
            call.insert(
                "data".to_string(),
                json!(format!("0x{}", hex::encode(&tx.data))),
            );
        }
        debug!("Estimating gas and collateral for call record: {:?}", call);

        let result = self
            .transport
            .request("cfx_estimateGasAndCollateral", vec![Value::Object(call)])
            .await?;
        Ok(decode_gas_estimate(result)?)
    }

    /// Parse an address argument and check it is bound to this client's
    /// network, so a testnet address can never be sent to a mainnet node.
    fn checked_address(&self, text: &str) -> Result<Address, AddressError> {
        let address = Address::parse(text)?;
        if address.network() != self.network {
            return Err(AddressError::NetworkMismatch {
                expected: self.network.to_string(),
                found: address.network().to_string(),
            });
        }
        Ok(address)
    }

    /// Dispatch a method whose result is expected to be a JSON string.
    async fn request_str(
        &self,
        method: &'static str,
        field: &'static str,
        params: Vec<Value>,
    ) -> Result<String, ClientError> {
        let value = self.transport.request(method, params).await?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or(ClientError::Decode(DecodeError::UnexpectedType { field }))
    }
}
