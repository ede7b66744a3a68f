//! CIP-37 address parsing and rendering
//!
//! Fixed encodings are cross-checked against the examples published with the
//! Conflux address specification.

use cfx_rpc_client::address::{Address, Network, RawAddress};
use cfx_rpc_client::error::AddressError;

/// `0x1a2f80e4d2dde57010e38933fa51f11b6f1e1b26` on three networks.
const USER_HEX: &str = "0x1a2f80e4d2dde57010e38933fa51f11b6f1e1b26";
const USER_MAIN: &str = "cfx:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5";
const USER_TEST: &str = "cfxtest:aarc9ahe4ns8m6au6sexh8wv8er08hu5e2695nn8uv";
const USER_NET1921: &str = "net1921:aarc9ahe4ns8m6au6sexh8wv8er08hu5e2erjjgxjk";

/// The admin-control builtin contract, `0x0888...0002`.
const BUILTIN_MAIN: &str = "cfx:aaejuaaaaaaaaaaaaaaaaaaaaaaaaaaaajrwuc9jnb";

/// A contract address (first nibble 0x8), `0x84980a94d94f54ac335109393c08c866a21b1b0e`.
const CONTRACT_MAIN: &str = "cfx:acckucyy5fhzknbxmeexwtaj3bxmeg25b2b50pta6v";

fn user_raw() -> RawAddress {
    USER_HEX.parse().unwrap()
}

#[test]
fn parses_mainnet_address_to_canonical_bytes() {
    let address = Address::parse(USER_MAIN).unwrap();
    assert_eq!(address.raw_bytes(), user_raw());
    assert_eq!(address.network(), Network::Main);
    assert_eq!(address.hex_form(), USER_HEX);
}

#[test]
fn same_bytes_encode_differently_per_network() {
    for (text, network) in [
        (USER_MAIN, Network::Main),
        (USER_TEST, Network::Test),
        (USER_NET1921, Network::Other(1921)),
    ] {
        let address = Address::parse(text).unwrap();
        assert_eq!(address.raw_bytes(), user_raw(), "bytes differ for {text}");
        assert_eq!(address.network(), network);
        assert_eq!(address.to_string(), text, "render differs for {text}");
    }
}

#[test]
fn builtin_and_contract_addresses_parse() {
    assert_eq!(
        Address::parse(BUILTIN_MAIN).unwrap().hex_form(),
        "0x0888000000000000000000000000000000000002"
    );
    assert_eq!(
        Address::parse(CONTRACT_MAIN).unwrap().hex_form(),
        "0x84980a94d94f54ac335109393c08c866a21b1b0e"
    );
}

#[test]
fn rebuilds_textual_form_from_raw_bytes() {
    let rebuilt = Address::from_raw(user_raw(), Network::Test);
    assert_eq!(rebuilt.to_string(), USER_TEST);
}

#[test]
fn uppercase_spelling_is_valid_and_renders_lowercase() {
    let upper = USER_MAIN.to_ascii_uppercase();
    let address = Address::parse(&upper).unwrap();
    assert_eq!(address.raw_bytes(), user_raw());
    assert_eq!(address.to_string(), USER_MAIN);
}

#[test]
fn mixed_case_is_rejected() {
    let mut mixed = USER_MAIN.to_string();
    mixed.replace_range(4..5, "A");
    assert_eq!(Address::parse(&mixed), Err(AddressError::MixedCase));
}

#[test]
fn verbose_annotation_segments_are_ignored() {
    let verbose = USER_MAIN.replace("cfx:", "cfx:type.user:");
    let address = Address::parse(&verbose).unwrap();
    assert_eq!(address.raw_bytes(), user_raw());
}

#[test]
fn corrupted_checksum_is_rejected() {
    // Swap the final symbol for another alphabet member.
    let mut corrupted = USER_MAIN.to_string();
    corrupted.pop();
    corrupted.push('4');
    assert_eq!(
        Address::parse(&corrupted),
        Err(AddressError::ChecksumMismatch)
    );
}

#[test]
fn characters_outside_the_alphabet_are_rejected() {
    // 'o' is excluded from the base32 alphabet.
    let mut bad = USER_MAIN.to_string();
    bad.pop();
    bad.push('o');
    assert_eq!(Address::parse(&bad), Err(AddressError::InvalidChar('o')));
}

#[test]
fn structural_failures_are_typed() {
    assert_eq!(
        Address::parse("aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5"),
        Err(AddressError::MissingSeparator)
    );
    assert_eq!(
        Address::parse("btc:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5"),
        Err(AddressError::UnknownPrefix("btc".to_string()))
    );
    assert_eq!(Address::parse("cfx:aarc9"), Err(AddressError::InvalidLength(5)));
}

#[test]
fn reserved_network_ids_must_use_their_named_prefix() {
    assert_eq!(
        Address::parse("net1029:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5"),
        Err(AddressError::UnknownPrefix("net1029".to_string()))
    );
    assert_eq!(
        Address::parse("net1:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5"),
        Err(AddressError::UnknownPrefix("net1".to_string()))
    );
}

#[test]
fn network_maps_chain_ids_to_prefixes() {
    assert_eq!(Network::from_id(1029), Network::Main);
    assert_eq!(Network::from_id(1), Network::Test);
    assert_eq!(Network::from_id(10086), Network::Other(10086));
    assert_eq!(Network::Main.id(), 1029);
    assert_eq!(Network::Other(10086).to_string(), "net10086");
}

#[test]
fn zero_address_round_trips() {
    let zero = Address::from_raw(RawAddress::ZERO, Network::Main);
    let text = zero.to_string();
    assert_eq!(Address::parse(&text).unwrap().raw_bytes(), RawAddress::ZERO);
}
