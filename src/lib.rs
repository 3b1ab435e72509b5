#![forbid(unsafe_code)]
//! idlgen: declaration composition and template rendering for IDL compiler backends.
//!
//! Given a validated IR module (crate `idlgen_ir`), a backend configuration and a template registry, the source
//! assembler produces one complete target-language compilation unit: a fixed prologue, one declaration per
//! external dependency, then every declaration rendered through the registry in a fixed group order.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod version;

pub use backend::{
    Backend, Config, GenerationError, RustBackend, SourceAssembler, TemplateError, TemplateRegistry, generate,
};
pub use idlgen_ir::{Decl, DeclKind, Module};
