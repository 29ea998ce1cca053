//! # Protocol Constants
//!
//! Every magic value of the Meridian request format lives here. Type codes
//! and enum vocabularies are consensus-visible: nodes reject requests that
//! disagree with these values, so changing them is a network-wide event,
//! not a refactor.

// ---------------------------------------------------------------------------
// Transaction Type Codes
// ---------------------------------------------------------------------------

/// Node configuration change (add or reconfigure a validator node).
pub const TXN_TYPE_NODE: &str = "0";

/// Nym registration (create or update a ledger identity record).
pub const TXN_TYPE_NYM: &str = "1";

/// Attribute attachment (raw, hashed, or encrypted data on a nym).
pub const TXN_TYPE_ATTRIB: &str = "100";

// ---------------------------------------------------------------------------
// Enum Vocabularies
// ---------------------------------------------------------------------------

/// A node that participates in consensus.
pub const SERVICE_VALIDATOR: &str = "VALIDATOR";

/// A node that replicates the ledger but does not vote.
pub const SERVICE_OBSERVER: &str = "OBSERVER";

/// Every service a node configuration request may declare.
pub const NODE_SERVICES: &[&str] = &[SERVICE_VALIDATOR, SERVICE_OBSERVER];

/// Roles a nym may be granted. Absence of a role means an ordinary identity.
pub const ROLE_TRUSTEE: &str = "TRUSTEE";
pub const ROLE_STEWARD: &str = "STEWARD";
pub const ROLE_TRUST_ANCHOR: &str = "TRUST_ANCHOR";

/// Every role a nym registration request may declare.
pub const NYM_ROLES: &[&str] = &[ROLE_TRUSTEE, ROLE_STEWARD, ROLE_TRUST_ANCHOR];

// ---------------------------------------------------------------------------
// Canonical Layout
// ---------------------------------------------------------------------------

/// Field names the canonical `operation` object claims for itself. Payload
/// fields merge flat under `operation`, so a payload reusing one of these
/// names would corrupt the request shape and is rejected at validation.
pub const RESERVED_OPERATION_FIELDS: &[&str] = &["type", "dest"];
