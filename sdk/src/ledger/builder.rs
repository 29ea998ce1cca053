//! The request builder facade: one entry point per transaction type.
//!
//! Each builder composes schema lookup, payload validation, and
//! canonicalization into a single pure call. On failure the caller gets a
//! [`LedgerError::InvalidStructure`] carrying the complete deficiency set;
//! no partial request ever leaks, and nothing here touches a network, a
//! wallet, or a disk. Retries belong to the transport layer above -- a
//! structurally invalid payload cannot succeed twice in a row.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::identity::Did;

use super::canonical::{canonicalize, CanonicalRequest};
use super::error::LedgerError;
use super::schema::TxnType;
use super::validate::{validate, ValidationOutcome};

/// Builds a node-configuration request (`operation.type = "0"`).
///
/// The payload must carry all seven node fields: `node_ip`, `node_port`,
/// `client_ip`, `client_port`, `alias`, `services`, `blskey`.
///
/// # Errors
///
/// [`LedgerError::InvalidStructure`] naming every missing or malformed
/// field when validation fails.
pub fn build_node_request(
    identifier: &Did,
    dest: &Did,
    payload: &Map<String, Value>,
) -> Result<CanonicalRequest, LedgerError> {
    build_for_type(TxnType::Node, identifier, dest, payload)
}

/// Builds a nym-registration request (`operation.type = "1"`).
///
/// All payload fields (`verkey`, `alias`, `role`) are optional; an empty
/// payload registers a bare nym.
pub fn build_nym_request(
    identifier: &Did,
    dest: &Did,
    payload: &Map<String, Value>,
) -> Result<CanonicalRequest, LedgerError> {
    build_for_type(TxnType::Nym, identifier, dest, payload)
}

/// Builds an attribute-attachment request (`operation.type = "100"`).
///
/// The payload must carry at least one of `raw`, `hash`, `enc`.
pub fn build_attrib_request(
    identifier: &Did,
    dest: &Did,
    payload: &Map<String, Value>,
) -> Result<CanonicalRequest, LedgerError> {
    build_for_type(TxnType::Attrib, identifier, dest, payload)
}

/// Generic entry point keyed by string type code.
///
/// Resolves the code through the schema registry and fails closed with
/// [`LedgerError::UnknownTransactionType`] for codes the registry does
/// not know. Prefer the typed builders when the transaction type is
/// fixed at the call site.
pub fn build_request(
    type_code: &str,
    identifier: &Did,
    dest: &Did,
    payload: &Map<String, Value>,
) -> Result<CanonicalRequest, LedgerError> {
    let txn_type = TxnType::from_code(type_code)?;
    build_for_type(txn_type, identifier, dest, payload)
}

fn build_for_type(
    txn_type: TxnType,
    identifier: &Did,
    dest: &Did,
    payload: &Map<String, Value>,
) -> Result<CanonicalRequest, LedgerError> {
    match validate(txn_type.schema(), payload) {
        ValidationOutcome::Valid(normalized) => {
            let request = canonicalize(identifier, dest, txn_type, normalized);
            debug!(txn_type = %txn_type, dest = %dest, "built ledger request");
            Ok(request)
        }
        ValidationOutcome::Invalid(failure) => {
            warn!(txn_type = %txn_type, %failure, "rejected malformed request payload");
            Err(LedgerError::InvalidStructure {
                txn_type: txn_type.name(),
                failure,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
