//! Structured-record serialization of transactions

use alloy_primitives::{Bytes, U256};
use serde_json::Value;

use cfx_rpc_client::transaction::RawTransaction;

const TO_MAIN: &str = "cfx:aarc9ahe4ns8m6au6sexh8wv8er08hu5e20yj5ryy5";
const TO_HEX: &str = "0x1a2f80e4d2dde57010e38933fa51f11b6f1e1b26";

fn sample_tx(data: Bytes) -> RawTransaction {
    RawTransaction::from_drip(
        "1000000000000000000",
        TO_MAIN,
        1_000_000_000,
        21_000,
        42,
        data,
        U256::from(128u64),
        U256::from(77_000_000u64),
        1029,
    )
    .unwrap()
}

#[test]
fn round_trips_with_empty_data() {
    let tx = sample_tx(Bytes::new());
    let record = serde_json::to_value(&tx).unwrap();
    let back: RawTransaction = serde_json::from_value(record).unwrap();
    assert_eq!(back, tx);
}

#[test]
fn round_trips_with_payload() {
    let tx = sample_tx(Bytes::from(vec![0xca, 0xfe, 0x00, 0x01]));
    let record = serde_json::to_value(&tx).unwrap();
    let back: RawTransaction = serde_json::from_value(record).unwrap();
    assert_eq!(back, tx);
}

#[test]
fn record_uses_the_fixed_field_set() {
    let record = serde_json::to_value(sample_tx(Bytes::new())).unwrap();
    let object = record.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "chainId",
            "data",
            "epochHeight",
            "gasLimit",
            "gasPrice",
            "nonce",
            "storageLimit",
            "to",
            "value",
        ],
        "field names are part of the storage contract"
    );
}

#[test]
fn recipient_serializes_from_canonical_bytes_not_text() {
    let record = serde_json::to_value(sample_tx(Bytes::new())).unwrap();
    assert_eq!(record["to"], Value::String(TO_HEX.to_string()));
}

#[test]
fn large_quantities_survive_the_record() {
    let mut tx = sample_tx(Bytes::new());
    tx.storage_limit = U256::from(1u64) << 120;
    tx.epoch_height = U256::MAX;
    let back: RawTransaction =
        serde_json::from_value(serde_json::to_value(&tx).unwrap()).unwrap();
    assert_eq!(back, tx);
}
