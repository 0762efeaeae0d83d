//! Error taxonomy for wire ↔ canonical translation.
//!
//! Every failure is local to one translation call. Callers either get a
//! fully populated canonical value or one of these errors, never a partial
//! result.

use thiserror::Error;

/// Failure while translating a single wire payload.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A quantity field did not parse as a non-negative 256-bit integer.
    #[error("malformed quantity in `{field}`: {value:?}")]
    MalformedQuantity {
        /// Wire field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// A byte field had an odd digit count, a bad digit, or the wrong width.
    #[error("malformed bytes in `{field}`: {reason}")]
    MalformedBytes {
        /// Wire field name.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A receipt carried neither a `root` nor a `status`.
    #[error("unsupported receipt format: neither `root` nor `status` present")]
    UnsupportedReceiptFormat,

    /// The fee fields of a transaction do not describe any known variant.
    #[error("inconsistent transaction shape: {0}")]
    InconsistentTransactionShape(String),

    /// The transaction belongs to a type this layer does not model.
    #[error("unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),

    /// A block arrived with transaction hashes instead of transaction objects.
    #[error("block transactions were returned as hashes; full transaction objects are required")]
    MissingTransactionBodies,

    /// Serializing an outbound payload failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

impl ConvertError {
    pub(crate) fn quantity(field: &'static str, value: &str) -> Self {
        Self::MalformedQuantity {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn bytes(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedBytes {
            field,
            reason: reason.into(),
        }
    }
}
