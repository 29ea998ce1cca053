//! # Identity Boundary
//!
//! The SDK's view of ledger identities is deliberately narrow: a [`Did`] is
//! an opaque string issued and validated by the external identity subsystem.
//! The only check this layer owns is non-emptiness. Key material, DID method
//! resolution, and verkey derivation all live above this crate.

pub mod did;

pub use did::{Did, DidError};
