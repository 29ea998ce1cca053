//! # Ledger Request Construction
//!
//! Turns caller-supplied payloads into canonical, ledger-consumable
//! transaction requests, or rejects them with the complete list of what
//! was wrong. Every component here is pure and synchronous: no I/O, no
//! clocks, no randomness, no shared mutable state.
//!
//! ## Architecture
//!
//! ```text
//! schema.rs    — Declarative per-transaction-type field schemas (the registry)
//! validate.rs  — Payload validation against a schema; accumulates all faults
//! canonical.rs — Deterministic assembly of the canonical request structure
//! builder.rs   — Per-transaction-type facade: lookup -> validate -> canonicalize
//! error.rs     — The two-kind error surface of this layer
//! ```
//!
//! ## Request Lifecycle
//!
//! 1. **Resolve** — The builder picks the schema for its transaction type.
//! 2. **Validate** — The payload is checked field by field; every missing or
//!    malformed field is collected, not just the first.
//! 3. **Canonicalize** — Only a [`validate::NormalizedPayload`] (the proof
//!    that validation passed) can enter canonicalization. Unvalidated maps
//!    cannot reach this step; the type system won't let them.
//! 4. **Hand off** — The [`CanonicalRequest`] goes to a signer and then a
//!    transport, both outside this crate.
//!
//! ## Design Decisions
//!
//! - Schemas are `'static` data resolved by exhaustive `match` on a closed
//!   [`TxnType`] enum. Adding a transaction type is a compile-time-checked
//!   extension, not a runtime string lookup.
//! - Payload maps are BTree-backed (`serde_json::Map`), so serialization
//!   order is sorted and stable. Downstream signing is hash-sensitive to
//!   shape; determinism here is a correctness requirement, not a nicety.
//! - Fields the schema does not know pass through unchanged. The ledger
//!   tolerates additive fields, and so do we.

pub mod builder;
pub mod canonical;
pub mod error;
pub mod schema;
pub mod validate;

pub use builder::{build_attrib_request, build_node_request, build_nym_request, build_request};
pub use canonical::{CanonicalRequest, Operation};
pub use error::LedgerError;
pub use schema::{schema_for, FieldKind, FieldSpec, TxnSchema, TxnType};
pub use validate::{validate, FieldFault, NormalizedPayload, ValidationFailure, ValidationOutcome};
