//! Shared test helpers and utilities.
//!
//! Provides factory functions for JSON-RPC payloads shaped like real mainnet
//! responses, plus a sealing helper that stands in for a node's hashing and
//! signature recovery.

#![allow(dead_code)]

use alloy::primitives::{keccak256, Address, B256};
use rpc_codec::{
    CanonicalBlock, RpcBlock, RpcReceipt, RpcTransaction, SealedBlock, SealedTransaction,
};
use serde_json::{json, Value};

/// `0x` followed by `byte` repeated to fill a 32-byte hash.
pub fn hash_hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(32))
}

/// `0x` followed by `byte` repeated to fill a 20-byte address.
pub fn address_hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(20))
}

pub fn empty_bloom() -> String {
    format!("0x{}", "00".repeat(256))
}

/// Header fields of a post-Cancun block (all optional fork fields present).
pub fn cancun_header() -> Value {
    json!({
        "number": "0x12a05f2",
        "parentHash": hash_hex(0x01),
        "mixHash": hash_hex(0x02),
        "nonce": "0x0000000000000000",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "logsBloom": empty_bloom(),
        "transactionsRoot": hash_hex(0x03),
        "stateRoot": hash_hex(0x04),
        "receiptsRoot": hash_hex(0x05),
        "miner": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
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

/// Header fields of a pre-London block: no base fee, withdrawals, blob or
/// beacon root fields.
pub fn homestead_header() -> Value {
    json!({
        "number": "0xf4240",
        "parentHash": hash_hex(0x11),
        "mixHash": hash_hex(0x12),
        "nonce": "0x8b1e2ab8c8a2d3a1",
        "sha3Uncles": hash_hex(0x13),
        "logsBloom": empty_bloom(),
        "transactionsRoot": hash_hex(0x14),
        "stateRoot": hash_hex(0x15),
        "receiptsRoot": hash_hex(0x16),
        "miner": address_hex(0x2a),
        "difficulty": "0x1d95715bd14",
        "extraData": "0xd783010203844765746887676f312e352e31856c696e7578",
        "gasLimit": "0x2fefd8",
        "gasUsed": "0xa410",
        "timestamp": "0x5667a1c8"
    })
}

/// A pre-EIP-155 legacy transfer (no chain id).
pub fn legacy_tx(seed: u8) -> Value {
    json!({
        "hash": hash_hex(seed),
        "from": address_hex(0xf1),
        "gas": "0x5208",
        "gasPrice": "0xba43b7400",
        "input": "0x",
        "nonce": format!("0x{seed:x}"),
        "to": address_hex(0x35),
        "value": "0xde0b6b3a7640000",
        "v": "0x1c",
        "r": "0x9c7e3bd8e1c4f4b8d7a34e0ac0e1e0c0a0b4e4f8f1b7d4f1d1a2e3b4c5d6e7f8",
        "s": "0x2b7d3bd8e1c4f4b8d7a34e0ac0e1e0c0a0b4e4f8f1b7d4f1d1a2e3b4c5d6e7f8"
    })
}

/// An EIP-2930 transaction with a single access list entry.
pub fn access_list_tx(seed: u8) -> Value {
    json!({
        "hash": hash_hex(seed),
        "from": address_hex(0xf2),
        "gas": "0x7a120",
        "gasPrice": "0x4a817c800",
        "type": "0x1",
        "accessList": [{
            "address": address_hex(0xcc),
            "storageKeys": [hash_hex(0x02), hash_hex(0x01)]
        }],
        "chainId": "0x1",
        "input": "0xa9059cbb",
        "nonce": "0x3",
        "to": address_hex(0xcc),
        "value": "0x0",
        "v": "0x0",
        "r": "0x1",
        "s": "0x2"
    })
}

/// An EIP-1559 transaction as a node reports it: effective `gasPrice`
/// alongside the fee-market fields.
pub fn fee_market_tx(seed: u8) -> Value {
    json!({
        "hash": hash_hex(seed),
        "from": address_hex(0xf3),
        "gas": "0x186a0",
        "gasPrice": "0x5d21dba00",
        "maxFeePerGas": "0x6fc23ac00",
        "maxPriorityFeePerGas": "0x3b9aca00",
        "type": "0x2",
        "accessList": [],
        "chainId": "0x1",
        "input": "0x",
        "nonce": "0x2a",
        "to": "0x70997970c51812e339d9b73b0245ad59e15ebbf9",
        "value": "0x1",
        "v": "0x1",
        "r": "0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276",
        "s": "0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
    })
}

/// A full-transaction RPC block with one transaction of each variant.
pub fn cancun_block() -> Value {
    let mut block = cancun_header();
    block["hash"] = hash_hex(0xbb).into();
    block["totalDifficulty"] = "0xc70d815d562d3cfa955".into();
    block["size"] = "0x1234".into();
    block["transactions"] = json!([legacy_tx(0xa1), access_list_tx(0xa2), fee_market_tx(0xa3)]);
    block["uncles"] = json!([]);
    block
}

pub fn rpc_block(value: Value) -> RpcBlock {
    serde_json::from_value(value).expect("block fixture should deserialize")
}

pub fn rpc_tx(value: Value) -> RpcTransaction {
    serde_json::from_value(value).expect("transaction fixture should deserialize")
}

pub fn rpc_receipt(value: Value) -> RpcReceipt {
    serde_json::from_value(value).expect("receipt fixture should deserialize")
}

/// Seals a decoded block with deterministic hashes and senders.
///
/// Transaction hashes are `keccak256` of the position; the sender is
/// `0xf0..f0` for every transaction.
pub fn seal(block: CanonicalBlock, block_hash: B256) -> SealedBlock {
    let transactions = block
        .transactions
        .into_iter()
        .enumerate()
        .map(|(i, tx)| {
            SealedTransaction::new(tx, keccak256((i as u64).to_be_bytes()), Address::repeat_byte(0xf0))
        })
        .collect();
    SealedBlock::new(block.header, transactions, block_hash)
}
