//! Opaque decentralized identifiers.
//!
//! A [`Did`] names an actor or target entity on the ledger. It is supplied
//! by the caller, never generated here, and the SDK treats it as an opaque
//! token: the one invariant this layer enforces is that it is not empty.
//! Anything stronger (base58 shape, method prefixes, verkey consistency)
//! belongs to the identity subsystem that issued it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur constructing a [`Did`].
#[derive(Debug, Error)]
pub enum DidError {
    /// The identifier string was empty.
    #[error("identifier must not be empty")]
    Empty,
}

/// An opaque ledger identifier.
///
/// Immutable once created. Serializes as a bare JSON string so it can sit
/// directly in the `identifier` and `dest` slots of a canonical request.
///
/// # Examples
///
/// ```
/// use meridian_sdk::identity::Did;
///
/// let did = Did::new("VsKV7grR1BUE29mG2Fm2kX").unwrap();
/// assert_eq!(did.as_str(), "VsKV7grR1BUE29mG2Fm2kX");
/// assert!(Did::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    /// Wraps an identifier string, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, DidError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DidError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
