use idlgen_ir::{Decl, DeclKind, IrType};
use proc_macro2::{Ident, Span};
use quote::quote;

use super::emit;
use crate::backend::templates::{DeclRenderer, RenderContext, TemplateError};

/// `ConstDeclaration`: `pub const NAME: T = value;`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstTemplate;

impl DeclRenderer for ConstTemplate {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let Decl::Const(c) = decl else {
            return Err(emit::kind_mismatch(DeclKind::Const, decl));
        };
        let name = emit::ident(&c.name, decl, "name")?;
        let ty = match &c.ty {
            IrType::Primitive { subtype } => {
                let prim = Ident::new(subtype.rust_name(), Span::call_site());
                quote! { #prim }
            }
            IrType::String { nullable: false, .. } => quote! { &'static str },
            _ => {
                return Err(TemplateError::invalid(
                    decl,
                    "type",
                    "only primitive and non-nullable string constants are supported",
                ));
            }
        };
        let value = emit::constant(&c.value, decl, "value", ctx)?;
        emit::format_items(quote! { pub const #name: #ty = #value; }, decl)
    }
}
