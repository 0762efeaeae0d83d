//! Header translation.
//!
//! Hash and byte fields are renamed onto their canonical counterparts with a
//! width check; numeric fields are decoded as 256-bit quantities. Fork fields
//! pass through as-is: present stays present, absent stays `None`. Whether a
//! fork is active at this height is for the domain model to decide.

use crate::encoding::{
    decode_address, decode_bloom, decode_bytes, decode_hash, decode_nonce,
    decode_optional_hash, decode_optional_quantity, decode_quantity, encode_bytes,
    encode_quantity,
};
use crate::error::Result;
use crate::types::CanonicalHeader;
use crate::wire::RpcHeader;

/// Builds a canonical header from the header fields of an RPC block.
pub fn from_wire(raw: &RpcHeader) -> Result<CanonicalHeader> {
    Ok(CanonicalHeader {
        parent_hash: decode_hash("parentHash", &raw.parent_hash)?,
        ommers_hash: decode_hash("sha3Uncles", &raw.sha3_uncles)?,
        coinbase: decode_address("miner", &raw.miner)?,
        state_root: decode_hash("stateRoot", &raw.state_root)?,
        transactions_root: decode_hash("transactionsRoot", &raw.transactions_root)?,
        receipts_root: decode_hash("receiptsRoot", &raw.receipts_root)?,
        logs_bloom: decode_bloom("logsBloom", &raw.logs_bloom)?,
        difficulty: decode_quantity("difficulty", &raw.difficulty)?,
        number: decode_quantity("number", &raw.number)?,
        gas_limit: decode_quantity("gasLimit", &raw.gas_limit)?,
        gas_used: decode_quantity("gasUsed", &raw.gas_used)?,
        timestamp: decode_quantity("timestamp", &raw.timestamp)?,
        extra_data: decode_bytes("extraData", &raw.extra_data)?,
        mix_hash: decode_hash("mixHash", &raw.mix_hash)?,
        nonce: decode_nonce("nonce", &raw.nonce)?,
        base_fee_per_gas: decode_optional_quantity(
            "baseFeePerGas",
            raw.base_fee_per_gas.as_deref(),
        )?,
        withdrawals_root: decode_optional_hash("withdrawalsRoot", raw.withdrawals_root.as_deref())?,
        blob_gas_used: decode_optional_quantity("blobGasUsed", raw.blob_gas_used.as_deref())?,
        excess_blob_gas: decode_optional_quantity("excessBlobGas", raw.excess_blob_gas.as_deref())?,
        parent_beacon_block_root: decode_optional_hash(
            "parentBeaconBlockRoot",
            raw.parent_beacon_block_root.as_deref(),
        )?,
    })
}

/// Re-encodes a canonical header into RPC header fields.
///
/// Used by [`crate::block::to_wire`]; fork fields are emitted only when set.
pub fn to_wire(header: &CanonicalHeader) -> RpcHeader {
    RpcHeader {
        number: encode_quantity(header.number),
        parent_hash: encode_bytes(header.parent_hash),
        mix_hash: encode_bytes(header.mix_hash),
        nonce: encode_bytes(header.nonce),
        sha3_uncles: encode_bytes(header.ommers_hash),
        logs_bloom: encode_bytes(header.logs_bloom.as_slice()),
        transactions_root: encode_bytes(header.transactions_root),
        state_root: encode_bytes(header.state_root),
        receipts_root: encode_bytes(header.receipts_root),
        miner: encode_bytes(header.coinbase),
        difficulty: encode_quantity(header.difficulty),
        extra_data: encode_bytes(&header.extra_data),
        gas_limit: encode_quantity(header.gas_limit),
        gas_used: encode_quantity(header.gas_used),
        timestamp: encode_quantity(header.timestamp),
        base_fee_per_gas: header.base_fee_per_gas.map(encode_quantity),
        withdrawals_root: header.withdrawals_root.map(encode_bytes),
        blob_gas_used: header.blob_gas_used.map(encode_quantity),
        excess_blob_gas: header.excess_blob_gas.map(encode_quantity),
        parent_beacon_block_root: header.parent_beacon_block_root.map(encode_bytes),
    }
}
