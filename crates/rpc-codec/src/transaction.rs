//! Transaction translation.
//!
//! Inbound, fee-market fields select the fee-market variant whatever the
//! `type` tag says, since some sources omit or get it wrong. Between legacy and
//! access-list the tag is followed when present. Outbound, the hash and sender
//! come from the domain model via [`TransactionView`].

use alloy::primitives::{Address, U256};

use crate::encoding::{
    decode_address, decode_bytes, decode_hash, decode_optional_quantity, decode_padded_address,
    decode_quantity, encode_bytes, encode_quantity,
};
use crate::error::{ConvertError, Result};
use crate::sealed::{Inclusion, TransactionView};
use crate::types::{
    AccessListItem, AccessListTransaction, CanonicalTransaction, FeeMarketTransaction,
    LegacyTransaction, TxSignature,
};
use crate::wire::{RpcAccessListItem, RpcTransaction};

/// Fee fields that decide the variant.
#[derive(Debug, PartialEq, Eq)]
enum FeeShape {
    Legacy {
        gas_price: U256,
    },
    AccessList {
        gas_price: U256,
    },
    FeeMarket {
        max_fee_per_gas: U256,
        max_priority_fee_per_gas: U256,
    },
}

/// The single place where a wire transaction is assigned a variant.
///
/// Fee-market fields take priority over `gasPrice`: nodes report the
/// effective price in `gasPrice` for EIP-1559 transactions, so seeing both is
/// normal and not treated as a conflict.
///
/// Without fee-market fields, a declared `type` of `0x0` or `0x1` picks
/// between legacy and access-list. Only when no such tag is present does the
/// presence of `accessList` decide.
fn fee_shape(raw: &RpcTransaction, declared_type: Option<U256>) -> Result<FeeShape> {
    if raw.max_fee_per_blob_gas.is_some() || raw.blob_versioned_hashes.is_some() {
        return Err(ConvertError::UnsupportedTransactionType(
            "blob transaction (EIP-4844)".to_string(),
        ));
    }
    if raw.authorization_list.is_some() {
        return Err(ConvertError::UnsupportedTransactionType(
            "set-code transaction (EIP-7702)".to_string(),
        ));
    }

    let max_fee = decode_optional_quantity("maxFeePerGas", raw.max_fee_per_gas.as_deref())?;
    let max_priority = decode_optional_quantity(
        "maxPriorityFeePerGas",
        raw.max_priority_fee_per_gas.as_deref(),
    )?;

    match (max_fee, max_priority) {
        (Some(max_fee_per_gas), Some(max_priority_fee_per_gas)) => {
            return Ok(FeeShape::FeeMarket {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            })
        }
        (Some(_), None) => {
            return Err(ConvertError::InconsistentTransactionShape(
                "maxFeePerGas without maxPriorityFeePerGas".to_string(),
            ))
        }
        (None, Some(_)) => {
            return Err(ConvertError::InconsistentTransactionShape(
                "maxPriorityFeePerGas without maxFeePerGas".to_string(),
            ))
        }
        (None, None) => {}
    }

    let gas_price = decode_optional_quantity("gasPrice", raw.gas_price.as_deref())?.ok_or_else(
        || {
            ConvertError::InconsistentTransactionShape(
                "neither gasPrice nor fee-market fields present".to_string(),
            )
        },
    )?;

    match declared_type {
        Some(ty) if ty == U256::ZERO => {
            if raw.access_list.as_ref().is_some_and(|list| !list.is_empty()) {
                return Err(ConvertError::InconsistentTransactionShape(
                    "legacy transaction with a non-empty accessList".to_string(),
                ));
            }
            Ok(FeeShape::Legacy { gas_price })
        }
        Some(ty) if ty == U256::from(1u64) => Ok(FeeShape::AccessList { gas_price }),
        _ if raw.access_list.is_some() => Ok(FeeShape::AccessList { gas_price }),
        _ => Ok(FeeShape::Legacy { gas_price }),
    }
}

/// `to` absent, `null` or empty means contract creation; never the zero address.
fn decode_to(raw: Option<&str>) -> Result<Option<Address>> {
    match raw {
        None | Some("") | Some("0x") => Ok(None),
        Some(value) => decode_padded_address("to", value).map(Some),
    }
}

fn decode_access_list(items: &[RpcAccessListItem]) -> Result<Vec<AccessListItem>> {
    items
        .iter()
        .map(|item| {
            Ok(AccessListItem {
                address: decode_address("accessList.address", &item.address)?,
                storage_keys: item
                    .storage_keys
                    .iter()
                    .map(|key| decode_hash("accessList.storageKeys", key))
                    .collect::<Result<_>>()?,
            })
        })
        .collect()
}

fn encode_access_list(items: &[AccessListItem]) -> Vec<RpcAccessListItem> {
    items
        .iter()
        .map(|item| RpcAccessListItem {
            address: encode_bytes(item.address),
            storage_keys: item.storage_keys.iter().map(encode_bytes).collect(),
        })
        .collect()
}

fn require_chain_id(chain_id: Option<U256>, variant: &str) -> Result<U256> {
    chain_id.ok_or_else(|| {
        ConvertError::InconsistentTransactionShape(format!("{variant} transaction without chainId"))
    })
}

/// Builds canonical transaction parameters from an RPC transaction object.
pub fn from_wire(raw: &RpcTransaction) -> Result<CanonicalTransaction> {
    let declared_type = decode_optional_quantity("type", raw.tx_type.as_deref())?;
    let shape = fee_shape(raw, declared_type)?;

    let nonce = decode_quantity("nonce", &raw.nonce)?;
    let gas_limit = decode_quantity("gas", &raw.gas)?;
    let to = decode_to(raw.to.as_deref())?;
    let value = decode_quantity("value", &raw.value)?;
    let data = decode_bytes("input", &raw.input)?;
    let chain_id = decode_optional_quantity("chainId", raw.chain_id.as_deref())?;
    let signature = TxSignature {
        v: decode_quantity("v", &raw.v)?,
        r: decode_quantity("r", &raw.r)?,
        s: decode_quantity("s", &raw.s)?,
    };
    let access_list = raw
        .access_list
        .as_deref()
        .map(decode_access_list)
        .transpose()?
        .unwrap_or_default();

    let tx = match shape {
        FeeShape::Legacy { gas_price } => CanonicalTransaction::Legacy(LegacyTransaction {
            chain_id,
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            signature,
        }),
        FeeShape::AccessList { gas_price } => {
            CanonicalTransaction::AccessList(AccessListTransaction {
                chain_id: require_chain_id(chain_id, "access-list")?,
                nonce,
                gas_price,
                gas_limit,
                to,
                value,
                data,
                access_list,
                signature,
            })
        }
        FeeShape::FeeMarket {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        } => CanonicalTransaction::FeeMarket(FeeMarketTransaction {
            chain_id: require_chain_id(chain_id, "fee-market")?,
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            data,
            access_list,
            signature,
        }),
    };

    if let Some(declared) = declared_type {
        if declared != U256::from(tx.tx_type()) {
            tracing::debug!(
                declared = %declared,
                selected = tx.tx_type(),
                hash = raw.hash.as_deref().unwrap_or("<none>"),
                "transaction type tag disagrees with fee fields; using fee fields"
            );
        }
    }

    Ok(tx)
}

/// Encodes a sealed transaction as an RPC transaction object.
///
/// Without an `inclusion` (the pending case) `blockHash` and `blockNumber`
/// are `null`; without an `index`, `transactionIndex` is `null`.
///
/// `gasPrice` is the fee cap for fee-market transactions, see
/// [`CanonicalTransaction::gas_price`].
pub fn to_wire<T: TransactionView + ?Sized>(
    tx: &T,
    inclusion: Option<Inclusion>,
    index: Option<usize>,
) -> RpcTransaction {
    let inner = tx.transaction();
    let signature = inner.signature();

    RpcTransaction {
        block_hash: inclusion.map(|at| encode_bytes(at.block_hash)),
        block_number: inclusion.map(|at| encode_quantity(at.block_number)),
        from: Some(encode_bytes(tx.sender())),
        gas: encode_quantity(inner.gas_limit()),
        gas_price: Some(encode_quantity(inner.gas_price())),
        max_fee_per_gas: inner.max_fee_per_gas().map(encode_quantity),
        max_priority_fee_per_gas: inner.max_priority_fee_per_gas().map(encode_quantity),
        tx_type: Some(encode_quantity(U256::from(inner.tx_type()))),
        access_list: inner.access_list().map(encode_access_list),
        chain_id: inner.chain_id().map(encode_quantity),
        hash: Some(encode_bytes(tx.hash())),
        input: encode_bytes(inner.data()),
        nonce: encode_quantity(inner.nonce()),
        to: inner.to().map(encode_bytes),
        transaction_index: index.map(|i| encode_quantity(U256::from(i))),
        value: encode_quantity(inner.value()),
        v: encode_quantity(signature.v),
        r: encode_quantity(signature.r),
        s: encode_quantity(signature.s),
        max_fee_per_blob_gas: None,
        blob_versioned_hashes: None,
        authorization_list: None,
    }
}
