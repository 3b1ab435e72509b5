use std::collections::HashMap;

use idlgen_core::naming;
use idlgen_ir::{Constant, Decl, DeclKind, Enum, Literal};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::emit;
use crate::backend::templates::{DeclRenderer, RenderContext, TemplateError};

/// `EnumDeclaration`: a `#[repr(T)]` enum plus its `fidl_enum!` wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumTemplate;

impl DeclRenderer for EnumTemplate {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let Decl::Enum(e) = decl else {
            return Err(emit::kind_mismatch(DeclKind::Enum, decl));
        };
        if e.members.is_empty() {
            return Err(TemplateError::missing(decl, "members"));
        }
        if !e.ty.is_integral() {
            return Err(TemplateError::invalid(
                decl,
                "type",
                format!("`{}` is not an integral type", e.ty.as_str()),
            ));
        }

        let name = emit::ident(&e.name, decl, "name")?;
        let repr = Ident::new(e.ty.rust_name(), Span::call_site());
        let (variants, values) = variants(e, decl, ctx)?;

        emit::format_items(
            quote! {
                #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
                #[repr(#repr)]
                pub enum #name {
                    #(#variants = #values,)*
                }

                fidl_enum! {
                    #name(#repr) {
                        #(#variants = #values,)*
                    }
                }
            },
            decl,
        )
    }
}

fn variants(
    e: &Enum,
    decl: Decl<'_>,
    ctx: &RenderContext<'_>,
) -> Result<(Vec<Ident>, Vec<TokenStream>), TemplateError> {
    let mut variants = Vec::with_capacity(e.members.len());
    let mut values = Vec::with_capacity(e.members.len());
    let mut names = emit::EmittedNames::new();
    let mut discriminants: HashMap<String, &str> = HashMap::new();
    for (position, member) in e.members.iter().enumerate() {
        let variant = emit::ident(&naming::to_upper_camel_case(&member.name), decl, "members")?;
        names.claim(&variant, &member.name, decl, "members")?;
        variants.push(variant);
        let value = match &member.value {
            None => {
                let lit = proc_macro2::Literal::usize_unsuffixed(position);
                quote! { #lit }
            }
            Some(Constant::Literal {
                literal: Literal::Numeric { value },
            }) => emit::numeric_literal(value, decl, "members")?,
            Some(c @ Constant::Identifier { .. }) => emit::constant(c, decl, "members", ctx)?,
            Some(Constant::Literal { .. }) => {
                return Err(TemplateError::invalid(
                    decl,
                    "members",
                    format!("`{}` has a non-numeric value", member.name),
                ));
            }
        };
        if let Some(previous) = discriminants.insert(discriminant_key(&value), &member.name) {
            return Err(TemplateError::invalid(
                decl,
                "members",
                format!("`{}` repeats the value of `{}`", member.name, previous),
            ));
        }
        values.push(value);
    }
    Ok((variants, values))
}

/// Comparable spelling of a discriminant: integer literals in base 10, anything else as written.
fn discriminant_key(value: &TokenStream) -> String {
    match syn::parse2::<syn::Expr>(value.clone()) {
        Ok(syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int), ..
        })) => int.base10_digits().to_string(),
        Ok(syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        })) => match *expr {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Int(int), ..
            }) => format!("-{}", int.base10_digits()),
            other => format!("-{}", quote! { #other }),
        },
        _ => value.to_string(),
    }
}
