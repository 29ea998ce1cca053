//! Deterministic assembly of the canonical request structure.
//!
//! The ledger hashes and signs the serialized request, so the structure
//! emitted here must be byte-identical for identical inputs. Two things
//! guarantee that: there is nothing nondeterministic in the layout (no
//! timestamps, no request IDs), and the payload map is BTree-backed, so
//! key order is sorted and stable across calls.
//!
//! Nothing outside this module's parent calls [`canonicalize`] directly.
//! Its payload parameter is [`NormalizedPayload`], which only
//! [`super::validate::validate`] can produce -- the invariant that no
//! unvalidated payload reaches the canonical structure is enforced by
//! the type, not by discipline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identity::Did;

use super::schema::TxnType;
use super::validate::NormalizedPayload;

// ---------------------------------------------------------------------------
// Canonical structures
// ---------------------------------------------------------------------------

/// The `operation` object of a canonical request.
///
/// Serializes with the payload fields flattened to the same nesting level
/// as `type` and `dest`:
///
/// ```json
/// {"type": "0", "dest": "VsKV7grR1BUE29mG2Fm2kX", "alias": "some", ...}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// String-encoded numeric transaction type code, e.g. `"0"`.
    #[serde(rename = "type")]
    pub type_code: String,

    /// Destination identifier: the entity the operation acts on.
    pub dest: String,

    /// Validated payload fields, merged flat under `operation`.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// An unsigned, ledger-consumable transaction request.
///
/// This is the artifact handed to the caller, who owns it thereafter. A
/// signer attaches a signature over its canonical serialization; a
/// transport submits it. Both are outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRequest {
    /// The actor submitting the request.
    pub identifier: String,

    /// The operation being requested.
    pub operation: Operation,
}

impl CanonicalRequest {
    /// Canonical JSON serialization: the bytes a signer operates over.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Canonicalization
// ---------------------------------------------------------------------------

/// Assembles the canonical request from validated parts.
///
/// Pure and deterministic: the same four inputs produce a byte-identical
/// structure every time. Only reachable through the builder facade after
/// a `Valid` outcome, by construction of [`NormalizedPayload`].
pub fn canonicalize(
    identifier: &Did,
    dest: &Did,
    txn_type: TxnType,
    payload: NormalizedPayload,
) -> CanonicalRequest {
    CanonicalRequest {
        identifier: identifier.as_str().to_string(),
        operation: Operation {
            type_code: txn_type.code().to_string(),
            dest: dest.as_str().to_string(),
            fields: payload.into_fields(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
