//! Template registry: one renderer per declaration kind, composable by reference.
//!
//! A backend describes its target syntax entirely through the renderers it registers here. The source assembler
//! only asks the registry to render each declaration; it never knows how a struct or an interface looks in the
//! target language.
//!
//! Renderers receive a [`RenderContext`] and may call back into the registry through it, by kind or by template
//! name (`"StructDeclaration"`). This is how an interface template reuses the struct template for its request and
//! response messages instead of duplicating struct emission.
//!
//! ## Notes
//!
//! - The registry and every renderer are `Send + Sync`; a registry can be shared by renders running in parallel.
//! - Rendering never mutates the registry or the IR.
//!
//! ## See also
//!
//! - [`crate::backend::assembler`]: whole-file composition
//! - [`crate::backend::rust`]: the Rust backend's renderers

mod errors;

pub use errors::TemplateError;

use std::collections::HashMap;

use idlgen_core::lang::decl_kinds;
use idlgen_ir::{Decl, DeclIndex, DeclKind};

use super::config::Config;

/// Renders one declaration to target-language text.
pub trait DeclRenderer: Send + Sync {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError>;
}

impl<F> DeclRenderer for F
where
    F: Fn(Decl<'_>, &RenderContext<'_>) -> Result<String, TemplateError> + Send + Sync,
{
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        self(decl, ctx)
    }
}

/// Mapping from declaration kind to renderer.
#[derive(Default)]
pub struct TemplateRegistry {
    renderers: HashMap<DeclKind, Box<dyn DeclRenderer>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the renderer for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: DeclKind, renderer: impl DeclRenderer + 'static) -> &mut Self {
        self.renderers.insert(kind, Box::new(renderer));
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, kind: DeclKind, renderer: impl DeclRenderer + 'static) -> Self {
        self.register(kind, renderer);
        self
    }

    pub fn contains(&self, kind: DeclKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Registered kinds, in emission order.
    pub fn kinds(&self) -> Vec<DeclKind> {
        DeclKind::ALL.into_iter().filter(|k| self.contains(*k)).collect()
    }

    /// Render one declaration with the template registered for `kind`.
    pub fn render(&self, kind: DeclKind, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        if decl.kind() != kind {
            return Err(TemplateError::KindMismatch {
                expected: kind,
                found: decl.kind(),
                name: decl.name().to_string(),
            });
        }
        let renderer = self
            .renderers
            .get(&kind)
            .ok_or_else(|| TemplateError::UnknownKind(kind.template_name().to_string()))?;
        renderer.render(decl, ctx)
    }

    /// Render one declaration with the template registered under `name`.
    ///
    /// `name` may be a template name (`"EnumDeclaration"`) or a canonical kind spelling (`"enum"`).
    pub fn render_named(&self, name: &str, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let kind = decl_kinds::from_template_name(name)
            .or_else(|| decl_kinds::from_str(name))
            .ok_or_else(|| TemplateError::UnknownKind(name.to_string()))?;
        self.render(kind, decl, ctx)
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry").field("kinds", &self.kinds()).finish()
    }
}

/// Ambient context handed to every renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a Config,
    registry: &'a TemplateRegistry,
    index: &'a DeclIndex,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, registry: &'a TemplateRegistry, index: &'a DeclIndex) -> Self {
        Self {
            config,
            registry,
            index,
        }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Library of the module being rendered.
    pub fn library(&self) -> &'a str {
        self.index.library()
    }

    /// Cross-reference index of the module being rendered.
    pub fn index(&self) -> &'a DeclIndex {
        self.index
    }

    /// Invoke another template by kind.
    pub fn render(&self, kind: DeclKind, decl: Decl<'_>) -> Result<String, TemplateError> {
        self.registry.render(kind, decl, self)
    }

    /// Invoke another template by name.
    pub fn render_named(&self, name: &str, decl: Decl<'_>) -> Result<String, TemplateError> {
        self.registry.render_named(name, decl, self)
    }
}
