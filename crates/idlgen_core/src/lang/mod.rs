//! idlgen language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`decl_kinds::DeclKind`], [`primitives::PrimitiveId`]) and look up
//! spellings/metadata via const registry tables instead of comparing strings ad hoc.
//!
//! ## Examples
//! ```rust
//! use idlgen_core::lang::decl_kinds::{self, DeclKind};
//!
//! assert_eq!(decl_kinds::from_str("struct"), Some(DeclKind::Struct));
//! assert_eq!(DeclKind::Struct.template_name(), "StructDeclaration");
//! ```

pub mod decl_kinds;
pub mod handles;
pub mod primitives;
pub mod rust_keywords;
