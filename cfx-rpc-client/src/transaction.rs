use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::address::{Address, Network, RawAddress};
use crate::codec::parse_drip;
use crate::error::{AddressError, TransactionError};

/// An unsigned Conflux transaction
///
/// The exact field set the signing and estimation steps consume. All numeric
/// fields are unsigned by type; `to` is stored as canonical 20-byte form with
/// no back-reference to the textual address it was parsed from. Values are
/// built once per intended transaction and never mutated.
///
/// The serde mapping is the storage/transport record: fixed camelCase field
/// names, `to` as its canonical byte form, `value`/`storageLimit`/
/// `epochHeight` as arbitrary-precision quantities, `data` as a raw byte
/// payload. Serializing and deserializing reproduces an equal transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Transfer amount in drip (the smallest unit, 10^18 per CFX)
    pub value: U256,

    /// Recipient in canonical byte form
    pub to: RawAddress,

    /// Gas price in drip per gas unit
    pub gas_price: u64,

    /// Maximum gas the transaction may consume
    pub gas_limit: u64,

    /// Sender account nonce
    pub nonce: u64,

    /// Chain id the transaction is valid on
    pub chain_id: u32,

    /// Storage collateral bound, in bytes of state storage
    pub storage_limit: U256,

    /// Epoch height after which the transaction expires
    pub epoch_height: U256,

    /// Opaque call payload; empty for plain transfers
    pub data: Bytes,
}

impl RawTransaction {
    /// Build a transaction from an integer drip value.
    ///
    /// `to` is parsed as a CIP-37 address and stored by value; an unparsable
    /// address fails the build, nothing is partially constructed. `data`
    /// defaults to empty.
    ///
    /// # Arguments
    ///
    /// * `value` - Transfer amount in drip
    /// * `to` - Recipient address text, e.g. `cfx:aarc9...`
    /// * `gas_price` - Gas price in drip
    /// * `gas_limit` - Gas bound
    /// * `nonce` - Sender nonce
    /// * `storage_limit` - Storage collateral bound
    /// * `epoch_height` - Expiry epoch
    /// * `chain_id` - Target chain id
    ///
    /// # Returns
    ///
    /// * `Result<RawTransaction, AddressError>` - The transaction or the
    ///   address failure
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        value: U256,
        to: &str,
        gas_price: u64,
        gas_limit: u64,
        nonce: u64,
        storage_limit: U256,
        epoch_height: U256,
        chain_id: u32,
    ) -> Result<Self, AddressError> {
        let to = Address::parse(to)?;
        Ok(Self {
            value,
            to: to.raw_bytes(),
            gas_price,
            gas_limit,
            nonce,
            chain_id,
            storage_limit,
            epoch_height,
            data: Bytes::new(),
        })
    }

    /// Build a transaction from a decimal drip string.
    ///
    /// The amount is parsed in base 10 through [`parse_drip`] — a distinct
    /// numeric domain from the hex RPC layer, so `"0x10"` is rejected rather
    /// than silently read as hex. Carries an explicit `data` payload for
    /// contract interactions.
    #[allow(clippy::too_many_arguments)]
    pub fn from_drip(
        drip: &str,
        to: &str,
        gas_price: u64,
        gas_limit: u64,
        nonce: u64,
        data: Bytes,
        storage_limit: U256,
        epoch_height: U256,
        chain_id: u32,
    ) -> Result<Self, TransactionError> {
        let value = parse_drip(drip)?;
        let to = Address::parse(to)?;
        Ok(Self {
            value,
            to: to.raw_bytes(),
            gas_price,
            gas_limit,
            nonce,
            chain_id,
            storage_limit,
            epoch_height,
            data,
        })
    }

    /// The recipient re-attached to the network implied by `chain_id`, for
    /// rendering as an RPC parameter.
    pub fn to_address(&self) -> Address {
        Address::from_raw(self.to, Network::from_id(self.chain_id))
    }
}
