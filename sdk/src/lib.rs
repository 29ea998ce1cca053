// Copyright (c) 2026 Meridian Contributors. MIT License.
// See LICENSE for details.

//! # Meridian SDK — Core Library
//!
//! Client-side request construction for the Meridian permissioned ledger.
//! This crate is the layer that turns "I want to register a validator node"
//! into the exact bytes the ledger expects -- or refuses to, loudly, before
//! anything touches a network or a signing key.
//!
//! The ledger treats canonical request shape as semantically meaningful:
//! what this crate emits is what gets hashed and signed downstream. Every
//! client binding must therefore produce byte-for-byte identical structures
//! for identical inputs, which is why this crate is obsessive about
//! determinism and refuses to emit anything it has not validated.
//!
//! ## Architecture
//!
//! - **config** -- Protocol constants: transaction type codes, enum vocabularies.
//! - **identity** -- The `Did` boundary type. Opaque on purpose.
//! - **ledger** -- Schema registry, payload validation, canonicalization,
//!   and the per-transaction-type builder facade.
//!
//! ## What this crate does NOT do
//!
//! Signing, transport, consensus, wallets, pool configuration. Those are
//! collaborators above this crate. The builder emits an *unsigned* canonical
//! request and its job ends there.
//!
//! ## Design Philosophy
//!
//! 1. Validate first, construct second. No partial request ever escapes.
//! 2. Schemas are data, not code. New transaction types are tables.
//! 3. Deterministic output or no output. Hashes downstream depend on it.

pub mod config;
pub mod identity;
pub mod ledger;
