//! idlgen backends
//!
//! This module turns an IR module into one generated source file.
//!
//! The pipeline is:
//! 1. The CLI (or another caller) builds an IR [`Module`](idlgen_ir::Module) and a [`Config`]
//! 2. The [`SourceAssembler`] walks the declarations in fixed group order
//! 3. Each declaration is rendered by the backend's [`TemplateRegistry`]
//! 4. The prologue and rendered declarations are joined into one compilation unit
//!
//! ## Module Organization
//!
//! - `assembler.rs` - Whole-file composition, the `Backend` trait and `GenerationError`
//! - `config.rs` - Output/include base configuration
//! - `templates/` - Renderer trait, registry keyed by declaration kind, render context
//! - `rust/` - Rust backend
//!   - `mod.rs` - Prologue and `RustBackend`
//!   - `emit.rs` - Identifier, literal and formatting helpers
//!   - `types.rs` - IR type to Rust type mapping
//!   - `consts.rs`, `enums.rs`, `unions.rs`, `structs.rs`, `interfaces.rs` - Per-kind templates

#![deny(clippy::unwrap_used)]

pub mod assembler;
pub mod config;
pub mod rust;
pub mod templates;

pub use assembler::{Backend, GenerationError, Prologue, SourceAssembler, generate};
pub use config::Config;
pub use rust::RustBackend;
pub use templates::{DeclRenderer, RenderContext, TemplateError, TemplateRegistry};

/// Names accepted by [`backend_for`].
pub const BACKEND_NAMES: &[&str] = &["rust"];

/// Look up a backend by its command-line name.
pub fn backend_for(name: &str) -> Option<Box<dyn Backend>> {
    match name {
        "rust" => Some(Box::new(RustBackend::new())),
        _ => None,
    }
}
