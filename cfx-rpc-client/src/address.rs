use std::fmt;
use std::str::FromStr;

use alloy_primitives::hex;

use crate::error::AddressError;

/// The canonical 20-byte form an address resolves to, independent of its
/// textual casing and network prefix.
pub use alloy_primitives::Address as RawAddress;

/// Base32 alphabet used by Conflux addresses (CIP-37). Excludes `i`, `l`, `o`
/// and `q` to avoid visual ambiguity.
const CHARSET: &str = "abcdefghjkmnprstuvwxyz0123456789";

/// Number of base32 symbols in a payload: 34 for the version byte plus 20
/// address bytes, 8 for the checksum.
const PAYLOAD_LEN: usize = 42;
const CHECKSUM_LEN: usize = 8;

/// Conflux network identifier, mapped to and from the address prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Conflux mainnet, prefix `cfx`, network id 1029
    Main,
    /// Conflux testnet, prefix `cfxtest`, network id 1
    Test,
    /// Any other network, prefix `net<id>`
    Other(u32),
}

impl Network {
    /// Network id used by the mainnet prefix.
    pub const MAIN_ID: u32 = 1029;

    /// Network id used by the testnet prefix.
    pub const TEST_ID: u32 = 1;

    /// Map a numeric network id (e.g. a transaction `chainId`) to its network.
    pub fn from_id(id: u32) -> Self {
        match id {
            Self::MAIN_ID => Network::Main,
            Self::TEST_ID => Network::Test,
            id => Network::Other(id),
        }
    }

    /// The numeric network id.
    pub fn id(&self) -> u32 {
        match self {
            Network::Main => Self::MAIN_ID,
            Network::Test => Self::TEST_ID,
            Network::Other(id) => *id,
        }
    }

    /// Parse a lowercase address prefix.
    ///
    /// The reserved ids 1 and 1029 must use their named prefixes; `net1` and
    /// `net1029` are rejected.
    fn from_prefix(prefix: &str) -> Result<Self, AddressError> {
        match prefix {
            "cfx" => Ok(Network::Main),
            "cfxtest" => Ok(Network::Test),
            _ => prefix
                .strip_prefix("net")
                .and_then(|id| id.parse::<u32>().ok())
                .filter(|id| *id != Self::MAIN_ID && *id != Self::TEST_ID)
                .map(Network::Other)
                .ok_or_else(|| AddressError::UnknownPrefix(prefix.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => write!(f, "cfx"),
            Network::Test => write!(f, "cfxtest"),
            Network::Other(id) => write!(f, "net{id}"),
        }
    }
}

/// A parsed Conflux base32 address (CIP-37)
///
/// Holds the canonical 20 raw bytes together with the network the textual
/// form was bound to. Every valid textual address maps to exactly one such
/// value; construction from untrusted text happens through [`Address::parse`]
/// and is total. Values are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    raw: RawAddress,
    network: Network,
}

impl Address {
    /// Parse a textual Conflux address into its canonical form.
    ///
    /// Accepts the compact form (`cfx:aak2...`) and the verbose form with
    /// annotation segments (`CFX:TYPE.USER:AAK2...`); annotations are ignored.
    /// All-lowercase and all-uppercase spellings are both valid, mixed case is
    /// not. The checksum and version byte are verified before any value is
    /// constructed.
    ///
    /// # Arguments
    ///
    /// * `text` - The address string, e.g. `cfx:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5`
    ///
    /// # Returns
    ///
    /// * `Result<Address, AddressError>` - Parsed address or a typed error
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let has_upper = text.bytes().any(|b| b.is_ascii_uppercase());
        let has_lower = text.bytes().any(|b| b.is_ascii_lowercase());
        if has_upper && has_lower {
            return Err(AddressError::MixedCase);
        }
        let lowered = text.to_ascii_lowercase();

        let mut parts = lowered.split(':');
        let prefix = parts.next().unwrap_or_default();
        let payload = parts.next_back().ok_or(AddressError::MissingSeparator)?;

        let network = Network::from_prefix(prefix)?;

        if payload.len() != PAYLOAD_LEN {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        let mut values = [0u8; PAYLOAD_LEN];
        for (slot, c) in values.iter_mut().zip(payload.chars()) {
            *slot = charset_index(c).ok_or(AddressError::InvalidChar(c))?;
        }

        let mut checked: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
        checked.push(0);
        checked.extend_from_slice(&values);
        if polymod(&checked) != 0 {
            return Err(AddressError::ChecksumMismatch);
        }

        // 34 symbols carry 170 bits for a 168-bit payload; the final two
        // padding bits must be zero or the encoding is non-canonical.
        let bytes = from_five_bit(&values[..PAYLOAD_LEN - CHECKSUM_LEN])
            .ok_or(AddressError::ChecksumMismatch)?;
        let version = bytes[0];
        if version != 0 {
            return Err(AddressError::UnsupportedVersion(version));
        }

        Ok(Self {
            raw: RawAddress::from_slice(&bytes[1..]),
            network,
        })
    }

    /// Rebuild an address from canonical raw bytes and a network.
    ///
    /// Used to re-render a stored 20-byte field (such as a transaction's `to`)
    /// in its textual form.
    pub fn from_raw(raw: RawAddress, network: Network) -> Self {
        Self { raw, network }
    }

    /// The canonical 20 raw bytes, for embedding in a transaction field.
    pub fn raw_bytes(&self) -> RawAddress {
        self.raw
    }

    /// The network the address is bound to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The `0x`-prefixed lowercase hex form, for embedding as a contract-call
    /// argument.
    pub fn hex_form(&self) -> String {
        format!("0x{}", hex::encode(self.raw.as_slice()))
    }
}

impl fmt::Display for Address {
    /// Render the canonical lowercase base32 form, `prefix:payload+checksum`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.network.to_string();

        let mut payload = [0u8; 21];
        payload[1..].copy_from_slice(self.raw.as_slice());
        let values = to_five_bit(&payload);

        let mut checked: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
        checked.push(0);
        checked.extend_from_slice(&values);
        checked.extend_from_slice(&[0; CHECKSUM_LEN]);
        let pm = polymod(&checked);

        let charset = CHARSET.as_bytes();
        write!(f, "{prefix}:")?;
        for v in &values {
            write!(f, "{}", charset[*v as usize] as char)?;
        }
        for i in 0..CHECKSUM_LEN {
            let v = (pm >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f;
            write!(f, "{}", charset[v as usize] as char)?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Position of a character in the base32 alphabet.
fn charset_index(c: char) -> Option<u8> {
    CHARSET.find(c).map(|i| i as u8)
}

/// BCH checksum over 5-bit groups (the cashaddr polymod CIP-37 reuses).
/// Returns zero for a payload whose trailing checksum symbols are valid.
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x0007_ffff_ffff) << 5) ^ u64::from(d);
        if c0 & 0x01 != 0 {
            c ^= 0x98_f2bc_8e61;
        }
        if c0 & 0x02 != 0 {
            c ^= 0x79_b76d_99e2;
        }
        if c0 & 0x04 != 0 {
            c ^= 0xf3_3e5f_b3c4;
        }
        if c0 & 0x08 != 0 {
            c ^= 0xae_2eab_e2a8;
        }
        if c0 & 0x10 != 0 {
            c ^= 0x1e_4f43_e470;
        }
    }
    c ^ 1
}

/// Regroup bytes into 5-bit values, zero-padding the tail.
fn to_five_bit(bytes: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    for &b in bytes {
        acc = (acc << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Regroup 5-bit values back into bytes; `None` if the leftover padding bits
/// are not zero.
fn from_five_bit(values: &[u8]) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity(values.len() * 5 / 8);
    for &v in values {
        acc = (acc << 5) | u32::from(v);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits > 0 && (acc & ((1 << bits) - 1)) != 0 {
        return None;
    }
    Some(out)
}
