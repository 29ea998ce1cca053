//! The schema registry: per-transaction-type field schemas as data.
//!
//! A schema is a table, not code. The validator walks whatever table it is
//! handed, so adding a transaction type means adding a [`TxnType`] variant
//! and a static table here -- the compiler then forces every `match` in the
//! crate to account for it. No reflection, no runtime registration.
//!
//! Schemas are `'static` and immutable: built at compile time, shared
//! freely across threads, never mutated. That is the whole concurrency
//! story of this registry.

use std::fmt;

use crate::config::{
    NODE_SERVICES, NYM_ROLES, TXN_TYPE_ATTRIB, TXN_TYPE_NODE, TXN_TYPE_NYM,
};

use super::error::LedgerError;

// ---------------------------------------------------------------------------
// TxnType
// ---------------------------------------------------------------------------

/// The closed set of transaction types this SDK can build requests for.
///
/// Each variant carries (via [`TxnType::schema`]) the immutable schema the
/// validator enforces. The string codes are consensus-visible and live in
/// [`crate::config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxnType {
    /// Node configuration change, code `"0"`.
    Node,
    /// Nym registration, code `"1"`.
    Nym,
    /// Attribute attachment, code `"100"`.
    Attrib,
}

impl TxnType {
    /// The string-encoded numeric code carried in `operation.type`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Node => TXN_TYPE_NODE,
            Self::Nym => TXN_TYPE_NYM,
            Self::Attrib => TXN_TYPE_ATTRIB,
        }
    }

    /// Human-readable name, used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Node => "NODE",
            Self::Nym => "NYM",
            Self::Attrib => "ATTRIB",
        }
    }

    /// Resolves a string type code to a transaction type.
    ///
    /// Fails closed: a code with no registry entry is an error, never an
    /// empty schema.
    pub fn from_code(code: &str) -> Result<Self, LedgerError> {
        match code {
            TXN_TYPE_NODE => Ok(Self::Node),
            TXN_TYPE_NYM => Ok(Self::Nym),
            TXN_TYPE_ATTRIB => Ok(Self::Attrib),
            other => Err(LedgerError::UnknownTransactionType(other.to_string())),
        }
    }

    /// The field schema for this transaction type. Total over the enum.
    pub fn schema(self) -> &'static TxnSchema {
        match self {
            Self::Node => &NODE_SCHEMA,
            Self::Nym => &NYM_SCHEMA,
            Self::Attrib => &ATTRIB_SCHEMA,
        }
    }
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Registry lookup keyed by string type code.
///
/// The entry point for callers that carry a code rather than a [`TxnType`].
/// Unknown codes fail with [`LedgerError::UnknownTransactionType`].
pub fn schema_for(code: &str) -> Result<&'static TxnSchema, LedgerError> {
    Ok(TxnType::from_code(code)?.schema())
}

// ---------------------------------------------------------------------------
// Field specifications
// ---------------------------------------------------------------------------

/// Shape constraint for a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON string.
    Str,
    /// A JSON integer (`i64` or `u64`). Floats are rejected.
    Int,
    /// A string drawn from a fixed vocabulary.
    Enum(&'static [&'static str]),
    /// A list of strings, each drawn from a fixed vocabulary.
    EnumList(&'static [&'static str]),
}

/// One field of a transaction schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// Declarative schema for one transaction type.
#[derive(Debug, Clone, Copy)]
pub struct TxnSchema {
    pub txn_type: TxnType,
    /// Known fields. Payload fields absent from this list pass through
    /// validation untouched (the ledger tolerates additive fields).
    pub fields: &'static [FieldSpec],
    /// Names of which at least one must be present in the payload.
    /// Empty slice means no such constraint.
    pub at_least_one_of: &'static [&'static str],
}

const fn req(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
        kind,
    }
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
        kind,
    }
}

// ---------------------------------------------------------------------------
// The registry tables
// ---------------------------------------------------------------------------

/// Node configuration: all seven fields required.
static NODE_SCHEMA: TxnSchema = TxnSchema {
    txn_type: TxnType::Node,
    fields: &[
        req("node_ip", FieldKind::Str),
        req("node_port", FieldKind::Int),
        req("client_ip", FieldKind::Str),
        req("client_port", FieldKind::Int),
        req("alias", FieldKind::Str),
        req("services", FieldKind::EnumList(NODE_SERVICES)),
        req("blskey", FieldKind::Str),
    ],
    at_least_one_of: &[],
};

/// Nym registration: everything optional. A bare nym is a valid nym.
static NYM_SCHEMA: TxnSchema = TxnSchema {
    txn_type: TxnType::Nym,
    fields: &[
        opt("verkey", FieldKind::Str),
        opt("alias", FieldKind::Str),
        opt("role", FieldKind::Enum(NYM_ROLES)),
    ],
    at_least_one_of: &[],
};

/// Attribute attachment: raw, hashed, or encrypted. At least one of them.
static ATTRIB_SCHEMA: TxnSchema = TxnSchema {
    txn_type: TxnType::Attrib,
    fields: &[
        opt("raw", FieldKind::Str),
        opt("hash", FieldKind::Str),
        opt("enc", FieldKind::Str),
    ],
    at_least_one_of: &["raw", "hash", "enc"],
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
