use idlgen_core::naming;
use idlgen_ir::{Decl, DeclKind};
use proc_macro2::Literal;
use quote::quote;

use super::{emit, types};
use crate::backend::templates::{DeclRenderer, RenderContext, TemplateError};

/// `UnionDeclaration`: one tuple variant per member plus `fidl_union!` wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionTemplate;

impl DeclRenderer for UnionTemplate {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let Decl::Union(u) = decl else {
            return Err(emit::kind_mismatch(DeclKind::Union, decl));
        };
        if u.members.is_empty() {
            return Err(TemplateError::missing(decl, "members"));
        }

        let name = emit::ident(&u.name, decl, "name")?;
        let mut variants = Vec::with_capacity(u.members.len());
        let mut tys = Vec::with_capacity(u.members.len());
        let mut offsets = Vec::with_capacity(u.members.len());
        let mut names = emit::EmittedNames::new();
        for member in &u.members {
            let variant = emit::ident(&naming::to_upper_camel_case(&member.name), decl, "members")?;
            names.claim(&variant, &member.name, decl, "members")?;
            variants.push(variant);
            tys.push(types::rust_type(&member.ty, decl, "members", ctx)?);
            offsets.push(Literal::u32_unsuffixed(member.offset));
        }
        let size = Literal::u32_unsuffixed(u.size);
        let align = Literal::u32_unsuffixed(u.alignment);

        emit::format_items(
            quote! {
                #[derive(Debug, PartialEq)]
                pub enum #name {
                    #(#variants(#tys),)*
                }

                fidl_union! {
                    name: #name,
                    members: [
                        #(#variants {
                            ty: #tys,
                            offset: #offsets,
                        },)*
                    ],
                    size: #size,
                    align: #align,
                }
            },
            decl,
        )
    }
}
