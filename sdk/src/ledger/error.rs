//! The error surface of the request builder layer.
//!
//! Exactly two kinds. A structurally bad payload is
//! [`LedgerError::InvalidStructure`]; asking for a transaction type the
//! registry does not know is [`LedgerError::UnknownTransactionType`].
//! Neither is ever recovered locally: retrying a structurally invalid
//! payload cannot succeed without the caller changing it first.

use thiserror::Error;

use super::validate::ValidationFailure;

/// Errors surfaced by the request builders.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The payload failed schema validation. Carries the transaction type
    /// name and the complete deficiency set, so the caller can react
    /// without re-parsing the original payload.
    #[error("invalid {txn_type} request payload: {failure}")]
    InvalidStructure {
        txn_type: &'static str,
        failure: ValidationFailure,
    },

    /// No schema is registered for the requested type code. The registry
    /// fails closed: an unknown type never proceeds with an empty schema.
    #[error("unknown transaction type code '{0}'")]
    UnknownTransactionType(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
