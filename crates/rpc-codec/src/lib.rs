//! rpc-codec: translation between Ethereum JSON-RPC payloads and a typed
//! canonical chain model.
//!
//! Four stateless translators compose the layer:
//! - [`header`]: RPC header fields → [`CanonicalHeader`]
//! - [`transaction`]: RPC transaction ↔ [`CanonicalTransaction`]
//! - [`block`]: RPC block ↔ [`CanonicalBlock`] (built on the two above)
//! - [`receipt`]: RPC receipt → [`CanonicalReceipt`]
//!
//! Hashes and senders are never computed here. Outbound translation reads
//! them from the domain model through [`TransactionView`] and [`BlockView`].

pub mod block;
pub mod encoding;
pub mod error;
pub mod header;
pub mod receipt;
pub mod sealed;
pub mod transaction;
pub mod types;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use error::{ConvertError, Result};
pub use sealed::{BlockView, Inclusion, SealedBlock, SealedTransaction, TransactionView};
pub use types::{
    AccessListItem, AccessListTransaction, CanonicalBlock, CanonicalHeader, CanonicalReceipt,
    CanonicalTransaction, FeeMarketTransaction, LegacyTransaction, Log, ReceiptOutcome,
    TxSignature,
};
pub use wire::{BlockTransactions, RpcBlock, RpcHeader, RpcLog, RpcReceipt, RpcTransaction};
