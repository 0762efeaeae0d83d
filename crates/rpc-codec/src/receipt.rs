//! Receipt translation (inbound only).
//!
//! A receipt is pre-Byzantium when it carries a non-empty `root`, otherwise
//! post-Byzantium when it carries a `status`. A receipt with neither is
//! rejected: guessing would corrupt gas accounting downstream.

use alloy::primitives::U256;

use crate::encoding::{decode_address, decode_bloom, decode_bytes, decode_hash, decode_quantity};
use crate::error::{ConvertError, Result};
use crate::types::{CanonicalReceipt, Log, ReceiptOutcome};
use crate::wire::{RpcLog, RpcReceipt};

fn log_from_wire(raw: &RpcLog) -> Result<Log> {
    Ok(Log {
        address: decode_address("logs.address", &raw.address)?,
        topics: raw
            .topics
            .iter()
            .map(|topic| decode_hash("logs.topics", topic))
            .collect::<Result<_>>()?,
        data: decode_bytes("logs.data", &raw.data)?,
    })
}

/// A `root` of `""` or `"0x"` (the empty byte string) counts as absent.
fn outcome(raw: &RpcReceipt) -> Result<ReceiptOutcome> {
    match (raw.root.as_deref(), raw.status.as_deref()) {
        (Some(root), _) if !root.is_empty() && root != "0x" => {
            decode_hash("root", root).map(ReceiptOutcome::StateRoot)
        }
        (_, Some(status)) => {
            let code = decode_quantity("status", status)?;
            if code > U256::from(1u64) {
                return Err(ConvertError::quantity("status", status));
            }
            Ok(ReceiptOutcome::Status(code == U256::from(1u64)))
        }
        _ => Err(ConvertError::UnsupportedReceiptFormat),
    }
}

/// Builds a canonical receipt from an RPC receipt object.
pub fn from_wire(raw: &RpcReceipt) -> Result<CanonicalReceipt> {
    let outcome = outcome(raw)?;
    Ok(CanonicalReceipt {
        cumulative_gas_used: decode_quantity("cumulativeGasUsed", &raw.cumulative_gas_used)?,
        logs_bloom: decode_bloom("logsBloom", &raw.logs_bloom)?,
        logs: raw.logs.iter().map(log_from_wire).collect::<Result<_>>()?,
        outcome,
    })
}
