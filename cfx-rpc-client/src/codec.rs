use std::fmt::LowerHex;
use std::num::IntErrorKind;

use alloy_primitives::{hex, Bytes, U256};

use crate::error::NumericParseError;

/// Helper functions to convert between the node's hex-encoded wire form and
/// native integers, using alloy primitives.
///
/// Conflux nodes return quantities as variable-width hex strings, sometimes
/// without the `0x` prefix and in either case. All parsers here normalize case
/// and strip the prefix before interpreting the digits in base 16. Decimal
/// drip amounts are a separate numeric domain and go through [`parse_drip`],
/// never through the hex parsers.

/// Strip a single leading `0x`/`0X` prefix if present.
///
/// Case-insensitive on the prefix only; the remaining characters are returned
/// unchanged.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a hexadecimal string into a `U256` value.
///
/// The prefix is optional and case is ignored. An empty string (or a bare
/// prefix) is rejected: use [`parse_hex_u256_or_zero`] at call sites where
/// absent data means zero.
///
/// # Arguments
///
/// * `s` - The hexadecimal string, with or without `0x`
///
/// # Returns
///
/// * `Result<U256, NumericParseError>` - Parsed value or a typed error
pub fn parse_hex_u256(s: &str) -> Result<U256, NumericParseError> {
    let digits = strip_hex_prefix(s).to_ascii_lowercase();
    if digits.is_empty() {
        return Err(NumericParseError::Empty);
    }
    // The underlying parser tolerates digit separators; the wire format does not.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NumericParseError::InvalidHex(s.to_string()));
    }
    U256::from_str_radix(&digits, 16).map_err(|_| NumericParseError::InvalidHex(s.to_string()))
}

/// Parse a hexadecimal string into a `U256`, treating an empty string as zero.
///
/// Absence of data (a bare `0x`, or no digits at all) decodes as the value
/// `0`. Malformed digits are still rejected.
pub fn parse_hex_u256_or_zero(s: &str) -> Result<U256, NumericParseError> {
    match parse_hex_u256(s) {
        Err(NumericParseError::Empty) => Ok(U256::ZERO),
        other => other,
    }
}

/// Parse a hexadecimal string into a `u64` value.
///
/// Fixed-width variant of [`parse_hex_u256`]: a magnitude that does not fit in
/// 64 bits fails with [`NumericParseError::Overflow`] rather than truncating
/// or wrapping.
pub fn parse_hex_u64(s: &str) -> Result<u64, NumericParseError> {
    let digits = strip_hex_prefix(s).to_ascii_lowercase();
    if digits.is_empty() {
        return Err(NumericParseError::Empty);
    }
    u64::from_str_radix(&digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => NumericParseError::Overflow {
            literal: s.to_string(),
            width: 64,
        },
        _ => NumericParseError::InvalidHex(s.to_string()),
    })
}

/// Parse a hexadecimal string into a `Bytes` value.
///
/// If the string contains no digits after prefix stripping (i.e. `0x` or the
/// empty string), an empty `Bytes` value is returned.
pub fn parse_hex_bytes(s: &str) -> Result<Bytes, NumericParseError> {
    let digits = strip_hex_prefix(s);
    if digits.is_empty() {
        return Ok(Bytes::new());
    }
    let data = hex::decode(digits).map_err(|_| NumericParseError::InvalidHex(s.to_string()))?;
    Ok(Bytes::from(data))
}

/// Format an unsigned integer as a minimal hexadecimal string prefixed with `0x`.
///
/// Minimal means lowercase with no leading zeros; the zero value renders as
/// `0x0`. Works for `U256` and the bounded widths alike.
pub fn to_minimal_hex<T: LowerHex>(value: T) -> String {
    format!("0x{value:x}")
}

/// Parse a decimal drip amount into a `U256` value.
///
/// Drip amounts are user-facing base-10 strings (1 CFX = 10^18 drip). This is
/// a distinct numeric domain from the hex RPC layer: a `0x`-prefixed or
/// otherwise non-decimal string is rejected, and negative amounts cannot be
/// expressed at all.
pub fn parse_drip(s: &str) -> Result<U256, NumericParseError> {
    if s.is_empty() {
        return Err(NumericParseError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericParseError::InvalidDecimal(s.to_string()));
    }
    U256::from_str_radix(s, 10).map_err(|_| NumericParseError::InvalidDecimal(s.to_string()))
}
