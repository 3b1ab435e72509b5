//! Rust backend: bindings for the `fidl` runtime crate.
//!
//! Every generated file starts with the same prologue:
//!
//! ```text
//! // Copyright ... BSD-style license ...
//!
//! extern crate fuchsia_async as fasync;
//! extern crate fuchsia_zircon as zx;
//! #[macro_use]
//! extern crate fidl;
//! #[macro_use]
//! extern crate futures;
//! extern crate <dependency>;          (one per deduplicated dependency)
//!
//! use fidl::encoding2::{Encodable, Decodable};
//! use futures::{Future, Stream, Never};
//! ```
//!
//! followed by the declarations, each rendered by one of the templates in this module. Templates build items
//! with `quote!`, parse them with `syn` and print them with `prettyplease`, so every declaration is valid Rust by
//! construction.
//!
//! ## Notes
//!
//! - The async runtime crate is bound as `fasync`; `async` is a reserved word.
//! - The templates are registered under their kinds and can be replaced individually through
//!   [`RustBackend::registry_mut`].

mod consts;
mod emit;
mod enums;
mod interfaces;
mod structs;
mod types;
mod unions;

pub use consts::ConstTemplate;
pub use enums::EnumTemplate;
pub use interfaces::InterfaceTemplate;
pub use structs::StructTemplate;
pub use unions::UnionTemplate;

use idlgen_ir::DeclKind;

use super::assembler::{Backend, Prologue};
use super::templates::TemplateRegistry;

/// Fixed prologue of every generated Rust file.
pub const RUST_PROLOGUE: Prologue = Prologue {
    license: "// Copyright 2018 The idlgen Authors. All rights reserved.\n\
              // Use of this source code is governed by a BSD-style license that can be\n\
              // found in the LICENSE file.\n",
    runtime_imports: &[
        "extern crate fuchsia_async as fasync;",
        "extern crate fuchsia_zircon as zx;",
        "#[macro_use]\nextern crate fidl;",
        "#[macro_use]\nextern crate futures;",
    ],
    dependency_prefix: "extern crate ",
    dependency_suffix: ";",
    codec_imports: &[
        "use fidl::encoding2::{Encodable, Decodable};",
        "use futures::{Future, Stream, Never};",
    ],
};

/// Registry with the Rust template for every declaration kind.
pub fn rust_registry() -> TemplateRegistry {
    TemplateRegistry::new()
        .with(DeclKind::Const, ConstTemplate)
        .with(DeclKind::Enum, EnumTemplate)
        .with(DeclKind::Union, UnionTemplate)
        .with(DeclKind::Struct, StructTemplate)
        .with(DeclKind::Interface, InterfaceTemplate)
}

/// The Rust backend.
#[derive(Debug)]
pub struct RustBackend {
    registry: TemplateRegistry,
}

impl RustBackend {
    pub fn new() -> Self {
        Self {
            registry: rust_registry(),
        }
    }

    /// Mutable access to the templates, for overriding individual kinds.
    pub fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn prologue(&self) -> &Prologue {
        &RUST_PROLOGUE
    }

    fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::assembler::generate;
    use crate::backend::config::Config;
    use idlgen_ir::Module;

    #[test]
    fn test_registry_covers_every_kind() {
        assert_eq!(rust_registry().kinds(), DeclKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_module_prologue() {
        let out = generate(&RustBackend::new(), &Module::new("fidl.test"), &Config::default()).unwrap();
        let expected = "\
// Copyright 2018 The idlgen Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

extern crate fuchsia_async as fasync;
extern crate fuchsia_zircon as zx;
#[macro_use]
extern crate fidl;
#[macro_use]
extern crate futures;

use fidl::encoding2::{Encodable, Decodable};
use futures::{Future, Stream, Never};
";
        assert_eq!(out, expected);
        syn::parse_file(&out).unwrap();
    }
}
