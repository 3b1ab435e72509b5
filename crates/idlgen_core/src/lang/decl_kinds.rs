//! Define the declaration-kind vocabulary shared by the IR and every backend.
//!
//! This module is the single source of truth for the five declaration kinds: a stable identifier ([`DeclKind`])
//! plus a const metadata table ([`DECL_KINDS`]) recording the canonical spelling, the template name a backend
//! registers its renderer under, and a short description.
//!
//! ## Notes
//! - [`DECL_KINDS`] is listed in **emission order**. Generated files always present consts, then enums, unions,
//!   structs and finally interfaces.
//! - Lookup via [`from_str`] is case-sensitive; [`from_template_name`] resolves `"EnumDeclaration"`-style names.
//!
//! ## Examples
//! ```rust
//! use idlgen_core::lang::decl_kinds::{self, DeclKind};
//!
//! assert_eq!(decl_kinds::from_template_name("UnionDeclaration"), Some(DeclKind::Union));
//! assert_eq!(decl_kinds::as_str(DeclKind::Interface), "interface");
//! ```

use std::fmt;

/// Stable identifier for a declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum DeclKind {
    Const,
    Enum,
    Union,
    Struct,
    Interface,
}

/// Metadata for a declaration kind.
#[derive(Debug, Clone, Copy)]
pub struct DeclKindInfo {
    pub id: DeclKind,
    pub canonical: &'static str,
    pub template_name: &'static str,
    pub description: &'static str,
}

/// Registry of declaration kinds, in emission order.
pub const DECL_KINDS: &[DeclKindInfo] = &[
    info(DeclKind::Const, "const", "ConstDeclaration", "Named compile-time constant."),
    info(DeclKind::Enum, "enum", "EnumDeclaration", "Enumeration over an integral primitive."),
    info(DeclKind::Union, "union", "UnionDeclaration", "Tagged union of typed members."),
    info(DeclKind::Struct, "struct", "StructDeclaration", "Record of typed, laid-out members."),
    info(
        DeclKind::Interface,
        "interface",
        "InterfaceDeclaration",
        "RPC-style protocol of ordinal-tagged methods.",
    ),
];

impl DeclKind {
    /// All kinds, in emission order.
    pub const ALL: [DeclKind; 5] = [
        DeclKind::Const,
        DeclKind::Enum,
        DeclKind::Union,
        DeclKind::Struct,
        DeclKind::Interface,
    ];

    /// Canonical lowercase spelling (e.g. `"enum"`).
    pub fn as_str(self) -> &'static str {
        as_str(self)
    }

    /// Name a backend registers this kind's renderer under (e.g. `"EnumDeclaration"`).
    pub fn template_name(self) -> &'static str {
        info_for(self).template_name
    }

    /// Position of this kind in the fixed emission order.
    pub fn emission_rank(self) -> usize {
        DeclKind::ALL.iter().position(|k| *k == self).unwrap_or(DeclKind::ALL.len())
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a canonical spelling to a [`DeclKind`].
pub fn from_str(name: &str) -> Option<DeclKind> {
    DECL_KINDS.iter().find(|k| k.canonical == name).map(|k| k.id)
}

/// Resolve a template name (e.g. `"StructDeclaration"`) to a [`DeclKind`].
pub fn from_template_name(name: &str) -> Option<DeclKind> {
    DECL_KINDS.iter().find(|k| k.template_name == name).map(|k| k.id)
}

/// Return the canonical spelling for a declaration kind.
pub fn as_str(id: DeclKind) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for a declaration kind.
pub fn info_for(id: DeclKind) -> &'static DeclKindInfo {
    DECL_KINDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: declaration kind info missing")
}

const fn info(
    id: DeclKind,
    canonical: &'static str,
    template_name: &'static str,
    description: &'static str,
) -> DeclKindInfo {
    DeclKindInfo {
        id,
        canonical,
        template_name,
        description,
    }
}
