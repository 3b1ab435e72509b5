//! Language-neutral IR of one IDL module.
//!
//! The IR is the input of every idlgen backend. It is produced by an external front-end that has already parsed
//! and validated the IDL source, so nothing here can fail: a [`Module`] is a plain value holding
//!
//! - five ordered declaration groups (consts, enums, unions, structs, interfaces), and
//! - the external crates the rendered declarations depend on.
//!
//! Declaration order within a group is author-significant and is preserved by every operation in this crate.
//!
//! ## JSON form
//!
//! ```json
//! {
//!   "name": "fidl.test",
//!   "extern_crates": ["fidl_fuchsia_mem"],
//!   "consts": [{"name": "MAX", "type": {"kind": "primitive", "subtype": "uint32"},
//!               "value": {"kind": "literal", "literal": {"kind": "numeric", "value": "10"}}}],
//!   "enums": [{"name": "Color", "members": [{"name": "Red"}, {"name": "Green"}]}]
//! }
//! ```

pub mod decl;
pub mod deps;
pub mod types;

pub use decl::{
    Const, Constant, Decl, Enum, EnumMember, Interface, Literal, Method, Parameter, Struct, StructMember, Union,
    UnionMember,
};
pub use deps::ExternCrates;
pub use idlgen_core::lang::decl_kinds::DeclKind;
pub use types::IrType;

use std::collections::HashMap;

use idlgen_core::naming;
use serde::{Deserialize, Serialize};

/// One IDL module (library) ready for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Library name (e.g. `fuchsia.ui.input`).
    pub name: String,
    /// External crates required by the declarations. May contain duplicates.
    #[serde(default)]
    pub extern_crates: Vec<String>,
    #[serde(default)]
    pub consts: Vec<Const>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub unions: Vec<Union>,
    #[serde(default)]
    pub structs: Vec<Struct>,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a module from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the module to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Declarations of one group, in IR order.
    pub fn group(&self, kind: DeclKind) -> Vec<Decl<'_>> {
        match kind {
            DeclKind::Const => self.consts.iter().map(Decl::Const).collect(),
            DeclKind::Enum => self.enums.iter().map(Decl::Enum).collect(),
            DeclKind::Union => self.unions.iter().map(Decl::Union).collect(),
            DeclKind::Struct => self.structs.iter().map(Decl::Struct).collect(),
            DeclKind::Interface => self.interfaces.iter().map(Decl::Interface).collect(),
        }
    }

    /// All declarations: groups in emission order, each group in IR order.
    pub fn declarations(&self) -> impl Iterator<Item = Decl<'_>> + '_ {
        DeclKind::ALL.into_iter().flat_map(move |kind| self.group(kind))
    }

    /// Total number of declarations across all groups.
    pub fn decl_count(&self) -> usize {
        self.consts.len() + self.enums.len() + self.unions.len() + self.structs.len() + self.interfaces.len()
    }

    /// Deduplicated external crates, in first-seen order.
    pub fn extern_crates(&self) -> ExternCrates {
        self.extern_crates.iter().cloned().collect()
    }

    /// Build the name → kind index for cross-references into this module.
    pub fn index(&self) -> DeclIndex {
        DeclIndex::build(self)
    }
}

/// Name → kind lookup over one module's declarations.
///
/// Used by renderers that need to know what a referenced identifier is (an interface reference renders
/// differently from a struct reference). Identifiers naming other libraries are not resolved.
#[derive(Debug, Clone, Default)]
pub struct DeclIndex {
    library: String,
    kinds: HashMap<String, DeclKind>,
}

impl DeclIndex {
    pub fn build(module: &Module) -> Self {
        let kinds = module
            .declarations()
            .map(|decl| (decl.name().to_string(), decl.kind()))
            .collect();
        Self {
            library: module.name.clone(),
            kinds,
        }
    }

    /// Library the index was built for.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Kind of the declaration an identifier names, if it is local to this module.
    ///
    /// Accepts both bare names (`Color`) and compound identifiers (`fidl.test/Color`).
    pub fn lookup(&self, identifier: &str) -> Option<DeclKind> {
        match naming::split_compound_identifier(identifier) {
            (Some(library), name) if library == self.library => self.kinds.get(name).copied(),
            (Some(_), _) => None,
            (None, name) => self.kinds.get(name).copied(),
        }
    }

    /// Whether an identifier names a declaration of another library.
    pub fn is_foreign(&self, identifier: &str) -> bool {
        matches!(naming::split_compound_identifier(identifier), (Some(library), _) if library != self.library)
    }
}
