//! Canonical chain model handed to the chain-processing engine.
//!
//! Values are built once from a wire payload and never mutated. Fork-specific
//! header fields are `Option`s: `None` means the source did not supply the
//! field, which is distinct from zero.

use alloy::primitives::{Address, Bloom, Bytes, B256, B64, U256};

/// Canonical block header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalHeader {
    pub parent_hash: B256,
    pub ommers_hash: B256,
    pub coinbase: Address,
    pub state_root: B256,
    pub transactions_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub difficulty: U256,
    pub number: U256,
    pub gas_limit: U256,
    pub gas_used: U256,
    pub timestamp: U256,
    pub extra_data: Bytes,
    pub mix_hash: B256,
    pub nonce: B64,
    /// London.
    pub base_fee_per_gas: Option<U256>,
    /// Shanghai.
    pub withdrawals_root: Option<B256>,
    /// Cancun.
    pub blob_gas_used: Option<U256>,
    /// Cancun.
    pub excess_blob_gas: Option<U256>,
    /// Cancun.
    pub parent_beacon_block_root: Option<B256>,
}

/// ECDSA signature components exactly as the source reported them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxSignature {
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

/// One EIP-2930 access list entry. Key order is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

/// Pre-EIP-2718 transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyTransaction {
    /// Only set for EIP-155 transactions whose source reports it.
    pub chain_id: Option<U256>,
    pub nonce: U256,
    pub gas_price: U256,
    pub gas_limit: U256,
    /// `None` creates a contract.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub signature: TxSignature,
}

/// EIP-2930 transaction (type 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessListTransaction {
    pub chain_id: U256,
    pub nonce: U256,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
    pub signature: TxSignature,
}

/// EIP-1559 transaction (type 2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeMarketTransaction {
    pub chain_id: U256,
    pub nonce: U256,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: U256,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
    pub signature: TxSignature,
}

/// Closed set of transaction shapes this layer models.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanonicalTransaction {
    Legacy(LegacyTransaction),
    AccessList(AccessListTransaction),
    FeeMarket(FeeMarketTransaction),
}

impl CanonicalTransaction {
    /// EIP-2718 type byte of the variant.
    pub fn tx_type(&self) -> u8 {
        match self {
            Self::Legacy(_) => 0,
            Self::AccessList(_) => 1,
            Self::FeeMarket(_) => 2,
        }
    }

    pub fn chain_id(&self) -> Option<U256> {
        match self {
            Self::Legacy(tx) => tx.chain_id,
            Self::AccessList(tx) => Some(tx.chain_id),
            Self::FeeMarket(tx) => Some(tx.chain_id),
        }
    }

    pub fn nonce(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.nonce,
            Self::AccessList(tx) => tx.nonce,
            Self::FeeMarket(tx) => tx.nonce,
        }
    }

    pub fn gas_limit(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.gas_limit,
            Self::AccessList(tx) => tx.gas_limit,
            Self::FeeMarket(tx) => tx.gas_limit,
        }
    }

    /// Price reported in the RPC `gasPrice` field.
    ///
    /// Fee-market transactions have no single gas price; RPC consumers still
    /// expect the field, so the fee cap (`maxFeePerGas`) is reported.
    pub fn gas_price(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.gas_price,
            Self::AccessList(tx) => tx.gas_price,
            Self::FeeMarket(tx) => tx.max_fee_per_gas,
        }
    }

    pub fn max_fee_per_gas(&self) -> Option<U256> {
        match self {
            Self::FeeMarket(tx) => Some(tx.max_fee_per_gas),
            _ => None,
        }
    }

    pub fn max_priority_fee_per_gas(&self) -> Option<U256> {
        match self {
            Self::FeeMarket(tx) => Some(tx.max_priority_fee_per_gas),
            _ => None,
        }
    }

    pub fn to(&self) -> Option<Address> {
        match self {
            Self::Legacy(tx) => tx.to,
            Self::AccessList(tx) => tx.to,
            Self::FeeMarket(tx) => tx.to,
        }
    }

    pub fn is_create(&self) -> bool {
        self.to().is_none()
    }

    pub fn value(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.value,
            Self::AccessList(tx) => tx.value,
            Self::FeeMarket(tx) => tx.value,
        }
    }

    pub fn data(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => &tx.data,
            Self::AccessList(tx) => &tx.data,
            Self::FeeMarket(tx) => &tx.data,
        }
    }

    /// `None` for legacy transactions, which cannot carry one.
    pub fn access_list(&self) -> Option<&[AccessListItem]> {
        match self {
            Self::Legacy(_) => None,
            Self::AccessList(tx) => Some(&tx.access_list),
            Self::FeeMarket(tx) => Some(&tx.access_list),
        }
    }

    pub fn signature(&self) -> &TxSignature {
        match self {
            Self::Legacy(tx) => &tx.signature,
            Self::AccessList(tx) => &tx.signature,
            Self::FeeMarket(tx) => &tx.signature,
        }
    }
}

/// Block construction parameters produced by inbound translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalBlock {
    pub header: CanonicalHeader,
    pub transactions: Vec<CanonicalTransaction>,
}

/// Event log emitted during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

/// What distinguishes the two historical receipt shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiptOutcome {
    /// Pre-Byzantium: intermediate state root after the transaction.
    StateRoot(B256),
    /// Post-Byzantium (EIP-658): `true` on success.
    Status(bool),
}

/// Canonical transaction receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalReceipt {
    pub cumulative_gas_used: U256,
    pub logs_bloom: Bloom,
    pub logs: Vec<Log>,
    pub outcome: ReceiptOutcome,
}

impl CanonicalReceipt {
    pub fn is_pre_byzantium(&self) -> bool {
        matches!(self.outcome, ReceiptOutcome::StateRoot(_))
    }

    pub fn state_root(&self) -> Option<B256> {
        match self.outcome {
            ReceiptOutcome::StateRoot(root) => Some(root),
            ReceiptOutcome::Status(_) => None,
        }
    }

    pub fn status(&self) -> Option<bool> {
        match self.outcome {
            ReceiptOutcome::Status(success) => Some(success),
            ReceiptOutcome::StateRoot(_) => None,
        }
    }
}
