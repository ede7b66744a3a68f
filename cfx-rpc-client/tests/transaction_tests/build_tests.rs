//! Constructor behavior for both build paths

use alloy_primitives::{Bytes, U256};

use cfx_rpc_client::error::{AddressError, NumericParseError, TransactionError};
use cfx_rpc_client::transaction::RawTransaction;

const TO_MAIN: &str = "cfx:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5";
const TO_TEST: &str = "cfxtest:aarc9ahe4ns8m6au6sexh8wv8er08hu5e2695nn8uv";

fn value_tx(value: U256, to: &str) -> Result<RawTransaction, AddressError> {
    RawTransaction::new(value, to, 1, 21_000, 0, U256::ZERO, U256::from(100_000u64), 1029)
}

#[test]
fn builds_from_integer_value_with_empty_data() {
    let tx = value_tx(U256::from(5u64), TO_MAIN).unwrap();
    assert_eq!(tx.value, U256::from(5u64));
    assert_eq!(
        tx.to_address().to_string(),
        TO_MAIN,
        "canonical bytes plus chain id reproduce the textual form"
    );
    assert!(tx.data.is_empty());
    assert_eq!(tx.chain_id, 1029);
}

#[test]
fn invalid_recipient_fails_for_any_value() {
    for value in [U256::ZERO, U256::from(u64::MAX), U256::MAX] {
        assert!(matches!(
            value_tx(value, "invalid-address"),
            Err(AddressError::MissingSeparator)
        ));
    }
}

#[test]
fn builds_from_decimal_drip_string() {
    // One CFX expressed in its 18-decimal smallest unit.
    let tx = RawTransaction::from_drip(
        "1000000000000000000",
        TO_MAIN,
        1,
        21_000,
        7,
        Bytes::new(),
        U256::ZERO,
        U256::from(100_000u64),
        1029,
    )
    .unwrap();
    assert_eq!(tx.value, U256::from(1_000_000_000_000_000_000u64));
    assert_eq!(tx.nonce, 7);
}

#[test]
fn drip_path_rejects_hex_spellings() {
    let err = RawTransaction::from_drip(
        "0x10",
        TO_MAIN,
        1,
        21_000,
        0,
        Bytes::new(),
        U256::ZERO,
        U256::ZERO,
        1029,
    )
    .unwrap_err();
    assert_eq!(
        err,
        TransactionError::Numeric(NumericParseError::InvalidDecimal("0x10".to_string()))
    );
}

#[test]
fn drip_path_still_validates_the_recipient() {
    let err = RawTransaction::from_drip(
        "1000",
        "cfx:not-long-enough",
        1,
        21_000,
        0,
        Bytes::new(),
        U256::ZERO,
        U256::ZERO,
        1029,
    )
    .unwrap_err();
    assert!(matches!(err, TransactionError::Address(_)));
}

#[test]
fn drip_path_carries_an_explicit_payload() {
    let data = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
    let tx = RawTransaction::from_drip(
        "1",
        TO_MAIN,
        1,
        50_000,
        0,
        data.clone(),
        U256::from(64u64),
        U256::ZERO,
        1029,
    )
    .unwrap();
    assert_eq!(tx.data, data);
}

#[test]
fn recipient_network_follows_chain_id() {
    let tx = RawTransaction::new(
        U256::from(1u64),
        TO_TEST,
        1,
        21_000,
        0,
        U256::ZERO,
        U256::ZERO,
        1,
    )
    .unwrap();
    assert_eq!(tx.to_address().to_string(), TO_TEST);
}
