//! Seam to the domain model for values that have been hashed and recovered.
//!
//! Outbound translation needs transaction hashes, senders and block hashes.
//! Computing them is the domain model's job; this crate only reads them
//! through [`TransactionView`] and [`BlockView`].

use alloy::primitives::{Address, B256, U256};

use crate::types::{CanonicalHeader, CanonicalTransaction};

/// A transaction whose hash and sender the domain model has derived.
pub trait TransactionView {
    fn transaction(&self) -> &CanonicalTransaction;
    fn hash(&self) -> B256;
    /// Address recovered from the signature.
    fn sender(&self) -> Address;
}

/// A block whose hash the domain model has computed.
pub trait BlockView {
    type Transaction: TransactionView;

    fn header(&self) -> &CanonicalHeader;
    fn hash(&self) -> B256;
    /// Transactions in block order.
    fn transactions(&self) -> &[Self::Transaction];
}

/// Plain carrier for a transaction plus its derived hash and sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedTransaction {
    transaction: CanonicalTransaction,
    hash: B256,
    sender: Address,
}

impl SealedTransaction {
    pub fn new(transaction: CanonicalTransaction, hash: B256, sender: Address) -> Self {
        Self {
            transaction,
            hash,
            sender,
        }
    }
}

impl TransactionView for SealedTransaction {
    fn transaction(&self) -> &CanonicalTransaction {
        &self.transaction
    }

    fn hash(&self) -> B256 {
        self.hash
    }

    fn sender(&self) -> Address {
        self.sender
    }
}

/// Plain carrier for a header, its sealed transactions and the block hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedBlock {
    header: CanonicalHeader,
    transactions: Vec<SealedTransaction>,
    hash: B256,
}

impl SealedBlock {
    pub fn new(header: CanonicalHeader, transactions: Vec<SealedTransaction>, hash: B256) -> Self {
        Self {
            header,
            transactions,
            hash,
        }
    }
}

impl BlockView for SealedBlock {
    type Transaction = SealedTransaction;

    fn header(&self) -> &CanonicalHeader {
        &self.header
    }

    fn hash(&self) -> B256 {
        self.hash
    }

    fn transactions(&self) -> &[SealedTransaction] {
        &self.transactions
    }
}

/// Position of a mined transaction's enclosing block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inclusion {
    pub block_hash: B256,
    pub block_number: U256,
}

impl Inclusion {
    pub fn of<B: BlockView + ?Sized>(block: &B) -> Self {
        Self {
            block_hash: block.hash(),
            block_number: block.header().number,
        }
    }
}
