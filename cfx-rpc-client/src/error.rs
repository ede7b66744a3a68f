use thiserror::Error;

/// Errors produced while parsing a textual Conflux address
///
/// Parsing is total: any input either yields a fully constructed address or
/// exactly one of these variants. No partially constructed value escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The `prefix:payload` separator is missing
    #[error("address has no network prefix separator")]
    MissingSeparator,

    /// The network prefix is not `cfx`, `cfxtest` or `net<id>`
    #[error("unknown network prefix: {0}")]
    UnknownPrefix(String),

    /// Upper- and lowercase characters were mixed in one address
    #[error("address mixes upper- and lowercase characters")]
    MixedCase,

    /// A payload character is outside the base32 alphabet
    #[error("invalid base32 character: {0}")]
    InvalidChar(char),

    /// The payload is not the expected 42 symbols
    #[error("invalid payload length: {0} symbols")]
    InvalidLength(usize),

    /// The BCH checksum did not verify
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    /// The version byte is reserved or unknown
    #[error("unsupported address version byte: {0:#04x}")]
    UnsupportedVersion(u8),

    /// The address parsed, but is bound to a different network than the one
    /// being talked to
    #[error("address network {found} does not match expected {expected}")]
    NetworkMismatch { expected: String, found: String },
}

/// Errors produced while parsing a numeric literal (hex or decimal)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericParseError {
    /// The literal was empty after prefix stripping
    #[error("empty numeric literal")]
    Empty,

    /// The literal contains non-hex characters
    #[error("invalid hex literal: {0}")]
    InvalidHex(String),

    /// The literal contains non-decimal characters (drip amounts are base 10)
    #[error("invalid decimal literal: {0}")]
    InvalidDecimal(String),

    /// The parsed magnitude does not fit the target integer width
    #[error("value {literal} exceeds {width}-bit field")]
    Overflow { literal: String, width: u32 },
}

/// Errors produced while interpreting an RPC result as a typed value
///
/// The variants let callers tell "the node sent garbage" (`Malformed`,
/// `UnexpectedType`) apart from "the node sent nothing" (`Missing`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The result string did not parse as the expected number
    #[error("malformed {field} in RPC result: {source}")]
    Malformed {
        field: &'static str,
        source: NumericParseError,
    },

    /// The result was empty where a value is structurally required
    #[error("missing or empty {field} in RPC result")]
    Missing { field: &'static str },

    /// The result JSON was not of the expected shape (e.g. a number where a
    /// hex string is expected)
    #[error("unexpected JSON type for {field} in RPC result")]
    UnexpectedType { field: &'static str },
}

/// Errors produced while building a [`RawTransaction`](crate::transaction::RawTransaction)
/// from a decimal drip amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// The `to` address did not parse
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The drip amount did not parse as a non-negative decimal
    #[error(transparent)]
    Numeric(#[from] NumericParseError),
}

/// Errors produced by the JSON-RPC transport layer
#[derive(Error, Debug)]
pub enum TransportError {
    /// The endpoint URL did not parse
    #[error("invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request itself failed (connection, timeout, status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a JSON-RPC error object
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response was not a valid JSON-RPC 2.0 envelope
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

/// Union error type returned by [`ConfluxClient`](crate::rpc::ConfluxClient) methods
///
/// `Address` means the caller supplied invalid input; `Transport` and `Decode`
/// mean the node (or the path to it) misbehaved.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
