//! Wire payload factories shared by the unit tests.

use serde_json::{json, Value};

use crate::wire::{RpcHeader, RpcReceipt, RpcTransaction};

pub(crate) fn hash_hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(32))
}

pub(crate) fn address_hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(20))
}

pub(crate) fn bloom_hex() -> String {
    format!("0x{}", "00".repeat(256))
}

/// Post-Cancun mainnet-shaped header.
pub(crate) fn cancun_header_json() -> Value {
    json!({
        "number": "0x12a05f2",
        "parentHash": hash_hex(0x01),
        "mixHash": hash_hex(0x02),
        "nonce": "0x0000000000000000",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "logsBloom": bloom_hex(),
        "transactionsRoot": hash_hex(0x03),
        "stateRoot": hash_hex(0x04),
        "receiptsRoot": hash_hex(0x05),
        "miner": address_hex(0x95),
        "difficulty": "0x0",
        "extraData": "0x6265617665726275696c642e6f7267",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0xe4e1c0",
        "timestamp": "0x65f1b057",
        "baseFeePerGas": "0x4a817c800",
        "withdrawalsRoot": hash_hex(0x06),
        "blobGasUsed": "0x20000",
        "excessBlobGas": "0x0",
        "parentBeaconBlockRoot": hash_hex(0x07)
    })
}

/// Pre-London (Homestead era) header with no fork fields.
pub(crate) fn frontier_header_json() -> Value {
    json!({
        "number": "0xf4240",
        "parentHash": hash_hex(0x11),
        "mixHash": hash_hex(0x12),
        "nonce": "0x8b1e2ab8c8a2d3a1",
        "sha3Uncles": hash_hex(0x13),
        "logsBloom": bloom_hex(),
        "transactionsRoot": hash_hex(0x14),
        "stateRoot": hash_hex(0x15),
        "receiptsRoot": hash_hex(0x16),
        "miner": address_hex(0x2a),
        "difficulty": "0x1d95715bd14",
        "extraData": "0x",
        "gasLimit": "0x2fefd8",
        "gasUsed": "0x5208",
        "timestamp": "0x56bfb41a"
    })
}

pub(crate) fn rpc_header(value: Value) -> RpcHeader {
    serde_json::from_value(value).expect("header fixture should deserialize")
}

pub(crate) fn legacy_tx_json() -> Value {
    json!({
        "hash": hash_hex(0xa1),
        "from": address_hex(0xf1),
        "gas": "0x5208",
        "gasPrice": "0x4a817c800",
        "type": "0x0",
        "input": "0x",
        "nonce": "0x9",
        "to": address_hex(0x35),
        "value": "0xde0b6b3a7640000",
        "v": "0x25",
        "r": "0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276",
        "s": "0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
    })
}

pub(crate) fn access_list_tx_json() -> Value {
    json!({
        "hash": hash_hex(0xa2),
        "from": address_hex(0xf2),
        "gas": "0x7a120",
        "gasPrice": "0x3b9aca00",
        "type": "0x1",
        "accessList": [
            {
                "address": address_hex(0xcc),
                "storageKeys": [hash_hex(0x02), hash_hex(0x01)]
            }
        ],
        "chainId": "0x1",
        "input": "0xa9059cbb",
        "nonce": "0x0",
        "to": address_hex(0xcc),
        "value": "0x0",
        "v": "0x1",
        "r": "0x1",
        "s": "0x2"
    })
}

pub(crate) fn fee_market_tx_json() -> Value {
    json!({
        "hash": hash_hex(0xa3),
        "from": address_hex(0xf3),
        "gas": "0x30d40",
        "gasPrice": "0x5d21dba00",
        "maxFeePerGas": "0x6fc23ac00",
        "maxPriorityFeePerGas": "0x3b9aca00",
        "type": "0x2",
        "accessList": [],
        "chainId": "0x1",
        "input": "0x095ea7b3",
        "nonce": "0x2a",
        "to": address_hex(0xdd),
        "value": "0x0",
        "v": "0x0",
        "r": "0x5",
        "s": "0x6"
    })
}

pub(crate) fn rpc_tx(value: Value) -> RpcTransaction {
    serde_json::from_value(value).expect("transaction fixture should deserialize")
}

pub(crate) fn rpc_receipt(value: Value) -> RpcReceipt {
    serde_json::from_value(value).expect("receipt fixture should deserialize")
}
