use alloy_primitives::U256;
use serde::Deserialize;

use crate::codec::{parse_hex_u256, parse_hex_u256_or_zero, parse_hex_u64};
use crate::error::{DecodeError, NumericParseError};

/// Decoders mapping raw JSON-RPC string results into typed integers.
///
/// Every numeric RPC result arrives as a hex string, optionally unprefixed and
/// in either case. Node-reported scalars are structurally required and decode
/// strictly: malformed or empty input is a typed [`DecodeError`] naming the
/// field, never a silent zero. The one lenient site is
/// [`decode_call_output`], where an empty `0x` return is a legitimate
/// "no data" value.

/// Decode a `cfx_epochNumber` result.
pub fn decode_epoch_number(result: &str) -> Result<u64, DecodeError> {
    required_u64("epochNumber", result)
}

/// Decode a `cfx_getBalance` result.
pub fn decode_balance(result: &str) -> Result<U256, DecodeError> {
    required_u256("balance", result)
}

/// Decode a `cfx_getNextNonce` result.
///
/// Nonces are bounded: a magnitude beyond 64 bits fails decode rather than
/// truncating.
pub fn decode_next_nonce(result: &str) -> Result<u64, DecodeError> {
    required_u64("nextNonce", result)
}

/// Decode a `cfx_gasPrice` result.
pub fn decode_gas_price(result: &str) -> Result<U256, DecodeError> {
    required_u256("gasPrice", result)
}

/// Interpret a `cfx_call` output numerically.
///
/// A call may legitimately return no data, so the empty `0x` output decodes
/// as zero; malformed digits are still rejected.
pub fn decode_call_output(result: &str) -> Result<U256, DecodeError> {
    parse_hex_u256_or_zero(result).map_err(|source| DecodeError::Malformed {
        field: "callOutput",
        source,
    })
}

/// Gas and storage quantities reported by `cfx_estimateGasAndCollateral`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateGasAndCollateral {
    /// Gas limit the node recommends attaching
    pub gas_limit: U256,
    /// Gas the execution actually used
    pub gas_used: U256,
    /// Storage collateral the transaction would reserve, in bytes
    pub storage_collateralized: U256,
}

/// Wire form of the estimate response: three hex-string fields.
#[derive(Debug, Deserialize)]
pub(crate) struct EstimateGasAndCollateralWire {
    #[serde(rename = "gasLimit")]
    gas_limit: String,
    #[serde(rename = "gasUsed")]
    gas_used: String,
    #[serde(rename = "storageCollateralized")]
    storage_collateralized: String,
}

/// Decode a `cfx_estimateGasAndCollateral` result from its JSON form.
pub fn decode_gas_estimate(result: serde_json::Value) -> Result<EstimateGasAndCollateral, DecodeError> {
    let wire: EstimateGasAndCollateralWire = serde_json::from_value(result)
        .map_err(|_| DecodeError::UnexpectedType {
            field: "estimateGasAndCollateral",
        })?;
    Ok(EstimateGasAndCollateral {
        gas_limit: required_u256("gasLimit", &wire.gas_limit)?,
        gas_used: required_u256("gasUsed", &wire.gas_used)?,
        storage_collateralized: required_u256(
            "storageCollateralized",
            &wire.storage_collateralized,
        )?,
    })
}

/// Strict decode of a structurally required `U256` field.
fn required_u256(field: &'static str, s: &str) -> Result<U256, DecodeError> {
    parse_hex_u256(s).map_err(|source| match source {
        NumericParseError::Empty => DecodeError::Missing { field },
        source => DecodeError::Malformed { field, source },
    })
}

/// Strict decode of a structurally required bounded field.
fn required_u64(field: &'static str, s: &str) -> Result<u64, DecodeError> {
    parse_hex_u64(s).map_err(|source| match source {
        NumericParseError::Empty => DecodeError::Missing { field },
        source => DecodeError::Malformed { field, source },
    })
}
