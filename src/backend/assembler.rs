//! Assemble one complete compilation unit from an IR module.
//!
//! This module implements the whole-file template of every backend:
//!
//! ```text
//! license header
//!
//! runtime imports          (fixed per backend)
//! dependency declarations  (deduplicated, first-seen order)
//!
//! codec/concurrency imports (fixed per backend)
//!
//! consts, enums, unions, structs, interfaces (each through the template registry)
//! ```
//!
//! ## Notes
//!
//! - The assembler is syntax-agnostic. Everything target-specific comes from the backend's [`Prologue`] and
//!   [`TemplateRegistry`].
//! - Output is all-or-nothing: every declaration is rendered before any text is composed, and the first renderer
//!   failure aborts the run with a [`GenerationError`].
//! - Sections and declarations are separated by exactly one blank line and the output ends with a single newline.
//!
//! ## See also
//!
//! - [`crate::backend::templates`]
//! - [`crate::backend::rust`]

use idlgen_ir::{DeclKind, Module};
use thiserror::Error;

use super::config::Config;
use super::templates::{RenderContext, TemplateError, TemplateRegistry};

/// Error during whole-file generation.
///
/// Carries the kind and name of the declaration that failed so callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to generate {kind} `{name}`: {source}")]
pub struct GenerationError {
    pub kind: DeclKind,
    pub name: String,
    #[source]
    pub source: TemplateError,
}

impl GenerationError {
    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed text every file of a backend starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prologue {
    /// License/copyright header, emitted verbatim.
    pub license: &'static str,
    /// Runtime bindings required by every generated file (crate imports, macro activations).
    pub runtime_imports: &'static [&'static str],
    /// Text before a dependency name in its declaration (`extern crate `).
    pub dependency_prefix: &'static str,
    /// Text after a dependency name in its declaration (`;`).
    pub dependency_suffix: &'static str,
    /// Encoding/decoding and concurrency imports required by every generated interface module.
    pub codec_imports: &'static [&'static str],
}

impl Prologue {
    /// Declaration line for one external dependency.
    pub fn dependency_line(&self, name: &str) -> String {
        format!("{}{}{}", self.dependency_prefix, name, self.dependency_suffix)
    }
}

/// A target language: its fixed prologue plus the templates for each declaration kind.
pub trait Backend: Send + Sync {
    /// Short name used on the command line (e.g. `rust`).
    fn name(&self) -> &'static str;

    /// Extension of the generated file, without the dot.
    fn file_extension(&self) -> &'static str;

    fn prologue(&self) -> &Prologue;

    fn registry(&self) -> &TemplateRegistry;
}

/// Whole-file renderer composing the per-kind templates of a registry.
#[derive(Debug, Clone, Copy)]
pub struct SourceAssembler<'a> {
    prologue: &'a Prologue,
    registry: &'a TemplateRegistry,
}

impl<'a> SourceAssembler<'a> {
    pub fn new(prologue: &'a Prologue, registry: &'a TemplateRegistry) -> Self {
        Self { prologue, registry }
    }

    /// Assembler for a backend's prologue and registry.
    pub fn for_backend(backend: &'a dyn Backend) -> Self {
        Self::new(backend.prologue(), backend.registry())
    }

    /// Render `module` to one compilation unit.
    #[tracing::instrument(skip_all, fields(library = %module.name, decl_count = module.decl_count()))]
    pub fn assemble(&self, module: &Module, config: &Config) -> Result<String, GenerationError> {
        let crates = module.extern_crates();
        let index = module.index();
        let ctx = RenderContext::new(config, self.registry, &index);

        let mut rendered = Vec::with_capacity(module.decl_count());
        for decl in module.declarations() {
            tracing::debug!(kind = %decl.kind(), name = decl.name(), "rendering declaration");
            let text = self
                .registry
                .render(decl.kind(), decl, &ctx)
                .map_err(|source| GenerationError {
                    kind: decl.kind(),
                    name: decl.name().to_string(),
                    source,
                })?;
            rendered.push(text);
        }

        let mut sections: Vec<String> = Vec::with_capacity(rendered.len() + 3);
        push_section(&mut sections, self.prologue.license);

        let mut bindings: Vec<String> = self.prologue.runtime_imports.iter().map(|s| s.to_string()).collect();
        bindings.extend(crates.iter().map(|name| self.prologue.dependency_line(name)));
        push_section(&mut sections, &bindings.join("\n"));

        push_section(&mut sections, &self.prologue.codec_imports.join("\n"));

        for text in &rendered {
            push_section(&mut sections, text);
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        tracing::debug!(
            extern_crates = crates.len(),
            bytes = out.len(),
            "assembled compilation unit"
        );
        Ok(out)
    }
}

/// Render `module` with `backend`.
pub fn generate(backend: &dyn Backend, module: &Module, config: &Config) -> Result<String, GenerationError> {
    SourceAssembler::for_backend(backend).assemble(module, config)
}

/// Append a section with surrounding blank lines stripped; sections with no text are dropped.
fn push_section(sections: &mut Vec<String>, text: &str) {
    let trimmed = text.trim_start_matches(['\n', '\r']).trim_end();
    if !trimmed.is_empty() {
        sections.push(trimmed.to_string());
    }
}
