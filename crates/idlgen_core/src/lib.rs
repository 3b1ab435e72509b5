//! Provide shared, pure vocabulary and naming helpers for the idlgen code generator.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces that both the IR model and every
//! backend need to agree on:
//! - the declaration-kind registry (stable ids, canonical spellings, template names, emission order),
//! - the IDL primitive and handle type vocabularies,
//! - Rust keyword escaping data,
//! - identifier case conversion and library naming conventions.
//!
//! ## Notes
//!
//! - No IO, no global state, no IR types. Everything here is a lookup table or a pure function.

pub mod lang;
pub mod naming;
