//! Shared emission helpers for the Rust templates: identifiers, literals, formatting.

use std::collections::HashMap;

use idlgen_core::lang::rust_keywords;
use idlgen_core::naming;
use idlgen_ir::{Constant, Decl, DeclKind, Literal};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::backend::templates::{RenderContext, TemplateError};

/// Build a Rust identifier from an IR name.
///
/// Keywords are emitted as raw identifiers (`type` → `r#type`). Names that cannot be Rust identifiers at all,
/// including `self`/`Self`/`super`/`crate`, are reported against `field` of `decl`.
pub(super) fn ident(name: &str, decl: Decl<'_>, field: &str) -> Result<Ident, TemplateError> {
    if !is_identifier(name) {
        return Err(TemplateError::invalid(
            decl,
            field,
            format!("`{}` is not a valid identifier", name),
        ));
    }
    if rust_keywords::is_non_raw_keyword(name) {
        return Err(TemplateError::invalid(
            decl,
            field,
            format!("`{}` is reserved and cannot be escaped", name),
        ));
    }
    if rust_keywords::is_keyword(name) {
        return Ok(Ident::new_raw(name, Span::call_site()));
    }
    Ok(Ident::new(name, Span::call_site()))
}

/// Rust names already emitted within one item, keyed to the IR name they came from.
///
/// Re-casing can map distinct IR names onto one Rust name (`foo_bar` and `FooBar` both become `foo_bar`).
#[derive(Debug, Default)]
pub(super) struct EmittedNames<'a> {
    seen: HashMap<String, &'a str>,
}

impl<'a> EmittedNames<'a> {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Record `ident`, emitted for the IR name `source`; fails if another IR name already produced it.
    pub(super) fn claim(
        &mut self,
        ident: &Ident,
        source: &'a str,
        decl: Decl<'_>,
        field: &str,
    ) -> Result<(), TemplateError> {
        match self.seen.insert(ident.to_string(), source) {
            Some(previous) => Err(TemplateError::invalid(
                decl,
                field,
                format!("`{}` collides with `{}` as `{}`", source, previous, ident),
            )),
            None => Ok(()),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Path to a declaration named by an IR identifier, with `suffix` appended to the final segment.
///
/// Local names (bare or qualified with the current library) become a single segment; names from another
/// library are qualified with that library's crate (`fuchsia.mem/Buffer` → `fidl_fuchsia_mem::Buffer`).
pub(super) fn decl_path(
    identifier: &str,
    suffix: &str,
    decl: Decl<'_>,
    field: &str,
    ctx: &RenderContext<'_>,
) -> Result<TokenStream, TemplateError> {
    let (library, name) = naming::split_compound_identifier(identifier);
    let item = ident(&format!("{}{}", name, suffix), decl, field)?;
    match library {
        Some(library) if library != ctx.library() => {
            let krate = ident(&naming::library_crate_name(library), decl, field)?;
            Ok(quote! { #krate::#item })
        }
        _ => Ok(quote! { #item }),
    }
}

/// Emit a numeric literal, accepting only plain or negated literals.
pub(super) fn numeric_literal(value: &str, decl: Decl<'_>, field: &str) -> Result<TokenStream, TemplateError> {
    let expr: syn::Expr = syn::parse_str(value)
        .map_err(|_| TemplateError::invalid(decl, field, format!("`{}` is not a numeric literal", value)))?;
    let is_literal = match &expr {
        syn::Expr::Lit(lit) => matches!(lit.lit, syn::Lit::Int(_) | syn::Lit::Float(_)),
        syn::Expr::Unary(unary) => {
            matches!(unary.op, syn::UnOp::Neg(_))
                && matches!(&*unary.expr, syn::Expr::Lit(lit) if matches!(lit.lit, syn::Lit::Int(_) | syn::Lit::Float(_)))
        }
        _ => false,
    };
    if !is_literal {
        return Err(TemplateError::invalid(
            decl,
            field,
            format!("`{}` is not a numeric literal", value),
        ));
    }
    Ok(quote! { #expr })
}

/// Emit a constant value usable in a Rust `const` context.
pub(super) fn constant(
    value: &Constant,
    decl: Decl<'_>,
    field: &str,
    ctx: &RenderContext<'_>,
) -> Result<TokenStream, TemplateError> {
    match value {
        Constant::Identifier { identifier } => decl_path(identifier, "", decl, field, ctx),
        Constant::Literal { literal } => match literal {
            Literal::Numeric { value } => numeric_literal(value, decl, field),
            Literal::String { value } => {
                let lit = proc_macro2::Literal::string(value);
                Ok(quote! { #lit })
            }
            Literal::True => Ok(quote! { true }),
            Literal::False => Ok(quote! { false }),
            Literal::Default => Err(TemplateError::invalid(
                decl,
                field,
                "`default` has no constant representation",
            )),
        },
    }
}

/// Error for a template handed a declaration of another kind.
pub(super) fn kind_mismatch(expected: DeclKind, decl: Decl<'_>) -> TemplateError {
    TemplateError::KindMismatch {
        expected,
        found: decl.kind(),
        name: decl.name().to_string(),
    }
}

/// Parse emitted items and pretty-print them.
pub(super) fn format_items(tokens: TokenStream, decl: Decl<'_>) -> Result<String, TemplateError> {
    let file: syn::File = syn::parse2(tokens).map_err(|e| TemplateError::syntax(decl, e))?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlgen_ir::Struct;

    fn decl() -> Struct {
        Struct {
            name: "S".into(),
            members: vec![],
            size: 0,
            alignment: 1,
        }
    }

    #[test]
    fn test_ident_escapes_keywords() {
        let s = decl();
        assert_eq!(ident("type", Decl::Struct(&s), "members").unwrap().to_string(), "r#type");
        assert_eq!(ident("value", Decl::Struct(&s), "members").unwrap().to_string(), "value");
    }

    #[test]
    fn test_ident_rejects_invalid_names() {
        let s = decl();
        for bad in ["", "_", "1abc", "a-b", "self", "crate", "héllo"] {
            assert!(
                matches!(ident(bad, Decl::Struct(&s), "members"), Err(TemplateError::InvalidField { .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_emitted_names_reject_recased_duplicates() {
        let s = decl();
        let mut names = EmittedNames::new();
        let first = ident(&naming::to_snake_case("foo_bar"), Decl::Struct(&s), "members").unwrap();
        let second = ident(&naming::to_snake_case("FooBar"), Decl::Struct(&s), "members").unwrap();
        names.claim(&first, "foo_bar", Decl::Struct(&s), "members").unwrap();
        let err = names.claim(&second, "FooBar", Decl::Struct(&s), "members").unwrap_err();
        assert_eq!(
            err.to_string(),
            "struct `S` has invalid `members`: `FooBar` collides with `foo_bar` as `foo_bar`"
        );
    }

    #[test]
    fn test_numeric_literal_accepts_literals_only() {
        let s = decl();
        for ok in ["10", "-1", "0x20", "1.5"] {
            assert!(numeric_literal(ok, Decl::Struct(&s), "value").is_ok(), "rejected {:?}", ok);
        }
        for bad in ["foo", "1 + 2", "f()", "\"str\""] {
            assert!(numeric_literal(bad, Decl::Struct(&s), "value").is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_format_items_reports_syntax_errors() {
        let s = decl();
        let err = format_items(quote! { pub struct }, Decl::Struct(&s)).unwrap_err();
        assert!(matches!(err, TemplateError::Syntax { .. }));
    }
}
