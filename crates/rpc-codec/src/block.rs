//! Block translation, composed from [`crate::header`] and
//! [`crate::transaction`].

use alloy::primitives::{B256, U256};

use crate::encoding::{encode_bytes, encode_quantity};
use crate::error::{ConvertError, Result};
use crate::header;
use crate::sealed::{BlockView, Inclusion, TransactionView};
use crate::transaction;
use crate::types::CanonicalBlock;
use crate::wire::{BlockTransactions, RpcBlock, RpcTransaction};

/// Builds canonical block parameters from an RPC block with full
/// transaction objects.
///
/// A hash-only transaction list cannot be translated and yields
/// [`ConvertError::MissingTransactionBodies`]. Any failing transaction fails
/// the whole block.
pub fn from_wire(raw: &RpcBlock) -> Result<CanonicalBlock> {
    let header = header::from_wire(&raw.header)?;

    let txs: &[RpcTransaction] = match &raw.transactions {
        BlockTransactions::Full(txs) => txs.as_slice(),
        BlockTransactions::Hashes(hashes) if !hashes.is_empty() => {
            return Err(ConvertError::MissingTransactionBodies)
        }
        BlockTransactions::Hashes(_) => &[],
    };

    let transactions = txs
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            transaction::from_wire(tx).inspect_err(|e| {
                tracing::debug!(
                    block_number = %header.number,
                    index,
                    error = %e,
                    "transaction failed to translate"
                );
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(
        block_number = %header.number,
        transactions = transactions.len(),
        "translated block"
    );

    Ok(CanonicalBlock {
        header,
        transactions,
    })
}

/// Encodes a sealed block as an RPC block object.
///
/// `total_difficulty` and `ommer_hashes` depend on chain position, which only
/// the caller knows. With `include_transactions` the block carries full
/// transaction objects (with block position and index), otherwise only their
/// hashes in block order.
///
/// `size` is the byte length of this block's JSON in full-transaction form
/// with `size` itself absent, so it does not depend on `include_transactions`.
pub fn to_wire<B: BlockView + ?Sized>(
    block: &B,
    total_difficulty: U256,
    ommer_hashes: &[B256],
    include_transactions: bool,
) -> Result<RpcBlock> {
    let inclusion = Inclusion::of(block);
    let full = block
        .transactions()
        .iter()
        .enumerate()
        .map(|(index, tx)| transaction::to_wire(tx, Some(inclusion), Some(index)))
        .collect();

    let mut rpc = RpcBlock {
        hash: Some(encode_bytes(block.hash())),
        header: header::to_wire(block.header()),
        total_difficulty: Some(encode_quantity(total_difficulty)),
        size: None,
        transactions: BlockTransactions::Full(full),
        uncles: ommer_hashes.iter().map(encode_bytes).collect(),
    };

    let size = serde_json::to_vec(&rpc)?.len();
    rpc.size = Some(encode_quantity(U256::from(size)));

    if !include_transactions {
        rpc.transactions = BlockTransactions::Hashes(
            block
                .transactions()
                .iter()
                .map(|tx| encode_bytes(tx.hash()))
                .collect(),
        );
    }

    Ok(rpc)
}
