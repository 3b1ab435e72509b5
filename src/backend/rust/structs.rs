use idlgen_core::naming;
use idlgen_ir::{Decl, DeclKind, IrType, StructMember};
use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{emit, types};
use crate::backend::templates::{DeclRenderer, RenderContext, TemplateError};

/// `StructDeclaration`: a struct with public fields plus `fidl_struct!` wiring.
///
/// Structs with member defaults also get a `Default` impl; members without one use `Default::default()`.
///
/// Also used by the interface template for request and response messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructTemplate;

impl DeclRenderer for StructTemplate {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let Decl::Struct(s) = decl else {
            return Err(emit::kind_mismatch(DeclKind::Struct, decl));
        };

        let name = emit::ident(&s.name, decl, "name")?;
        let mut fields = Vec::with_capacity(s.members.len());
        let mut tys = Vec::with_capacity(s.members.len());
        let mut offsets = Vec::with_capacity(s.members.len());
        let mut names = emit::EmittedNames::new();
        for member in &s.members {
            let field = emit::ident(&naming::to_snake_case(&member.name), decl, "members")?;
            names.claim(&field, &member.name, decl, "members")?;
            fields.push(field);
            tys.push(types::rust_type(&member.ty, decl, "members", ctx)?);
            offsets.push(Literal::u32_unsuffixed(member.offset));
        }
        let size = Literal::u32_unsuffixed(s.size);
        let align = Literal::u32_unsuffixed(s.alignment);

        let default_impl = if s.members.iter().any(|m| m.maybe_default_value.is_some()) {
            let mut defaults = Vec::with_capacity(s.members.len());
            for member in &s.members {
                defaults.push(default_value(member, decl, ctx)?);
            }
            quote! {
                impl Default for #name {
                    fn default() -> Self {
                        Self {
                            #(#fields: #defaults,)*
                        }
                    }
                }
            }
        } else {
            TokenStream::new()
        };

        emit::format_items(
            quote! {
                #[derive(Debug, PartialEq)]
                pub struct #name {
                    #(pub #fields: #tys,)*
                }

                fidl_struct! {
                    name: #name,
                    members: [
                        #(#fields {
                            ty: #tys,
                            offset: #offsets,
                        },)*
                    ],
                    size: #size,
                    align: #align,
                }

                #default_impl
            },
            decl,
        )
    }
}

/// Initializer for one member of the `Default` impl.
fn default_value(member: &StructMember, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<TokenStream, TemplateError> {
    let Some(value) = &member.maybe_default_value else {
        return Ok(quote! { Default::default() });
    };
    let (is_string, nullable) = match &member.ty {
        IrType::Primitive { .. } => (false, false),
        IrType::String { nullable, .. } => (true, *nullable),
        _ => {
            return Err(TemplateError::invalid(
                decl,
                "members",
                format!("`{}` cannot have a default value", member.name),
            ));
        }
    };
    let expr = emit::constant(value, decl, "members", ctx)?;
    let expr = if is_string { quote! { String::from(#expr) } } else { expr };
    Ok(if nullable { quote! { Some(#expr) } } else { expr })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::Config;
    use crate::backend::templates::TemplateRegistry;
    use idlgen_core::lang::primitives::PrimitiveId;
    use idlgen_ir::{Constant, Module, Struct};

    fn render(s: Struct) -> Result<String, TemplateError> {
        let mut module = Module::new("fidl.test");
        module.structs.push(s);
        let index = module.index();
        let registry = TemplateRegistry::new();
        let config = Config::default();
        let ctx = RenderContext::new(&config, &registry, &index);
        StructTemplate.render(Decl::Struct(&module.structs[0]), &ctx)
    }

    #[test]
    fn test_struct_fields_and_layout() {
        let out = render(Struct {
            name: "Point".into(),
            members: vec![
                StructMember::new("x", IrType::primitive(PrimitiveId::Int32), 0),
                StructMember::new("y", IrType::primitive(PrimitiveId::Int32), 4),
            ],
            size: 8,
            alignment: 4,
        })
        .unwrap();
        assert!(out.contains("pub struct Point {"), "{}", out);
        assert!(out.contains("pub x: i32,"), "{}", out);
        assert!(out.contains("pub y: i32,"), "{}", out);
        assert!(out.contains("fidl_struct!"), "{}", out);
        syn::parse_file(&out).unwrap();
    }

    #[test]
    fn test_field_names_are_snake_cased_and_escaped() {
        let out = render(Struct {
            name: "Entry".into(),
            members: vec![
                StructMember::new("DisplayName", IrType::string().nullable(), 0),
                StructMember::new("type", IrType::primitive(PrimitiveId::Uint8), 16),
            ],
            size: 24,
            alignment: 8,
        })
        .unwrap();
        assert!(out.contains("pub display_name: Option<String>,"), "{}", out);
        assert!(out.contains("pub r#type: u8,"), "{}", out);
    }

    #[test]
    fn test_empty_struct() {
        let out = render(Struct {
            name: "Empty".into(),
            members: vec![],
            size: 1,
            alignment: 1,
        })
        .unwrap();
        assert!(out.contains("pub struct Empty"), "{}", out);
        syn::parse_file(&out).unwrap();
    }

    #[test]
    fn test_recased_member_names_collide() {
        let err = render(Struct {
            name: "Pair".into(),
            members: vec![
                StructMember::new("foo_bar", IrType::primitive(PrimitiveId::Uint32), 0),
                StructMember::new("FooBar", IrType::primitive(PrimitiveId::Uint32), 4),
            ],
            size: 8,
            alignment: 4,
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "struct `Pair` has invalid `members`: `FooBar` collides with `foo_bar` as `foo_bar`"
        );
    }

    #[test]
    fn test_member_defaults_produce_default_impl() {
        let out = render(Struct {
            name: "Options".into(),
            members: vec![
                StructMember::new("retries", IrType::primitive(PrimitiveId::Uint8), 0).with_default(Constant::numeric("3")),
                StructMember::new("label", IrType::string(), 8).with_default(Constant::string("none")),
                StructMember::new("verbose", IrType::primitive(PrimitiveId::Bool), 24),
            ],
            size: 32,
            alignment: 8,
        })
        .unwrap();
        let file = syn::parse_file(&out).unwrap();
        let default_impl = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Impl(imp) if imp.trait_.is_some() => Some(quote! { #imp }.to_string()),
                _ => None,
            })
            .unwrap();
        assert!(default_impl.contains(&quote! { retries: 3 }.to_string()), "{}", default_impl);
        assert!(
            default_impl.contains(&quote! { label: String::from("none") }.to_string()),
            "{}",
            default_impl
        );
        assert!(
            default_impl.contains(&quote! { verbose: Default::default() }.to_string()),
            "{}",
            default_impl
        );
    }

    #[test]
    fn test_struct_without_defaults_has_no_default_impl() {
        let out = render(Struct {
            name: "Point".into(),
            members: vec![StructMember::new("x", IrType::primitive(PrimitiveId::Int32), 0)],
            size: 4,
            alignment: 4,
        })
        .unwrap();
        assert!(!out.contains("impl Default"), "{}", out);
    }

    #[test]
    fn test_default_on_handle_is_rejected() {
        let err = render(Struct {
            name: "Holder".into(),
            members: vec![
                StructMember::new("pipe", IrType::handle(idlgen_core::lang::handles::HandleSubtype::Channel), 0)
                    .with_default(Constant::numeric("0")),
            ],
            size: 4,
            alignment: 4,
        })
        .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidField { ref field, .. } if field == "members"));
    }

    #[test]
    fn test_invalid_member_name() {
        let err = render(Struct {
            name: "Bad".into(),
            members: vec![StructMember::new("self", IrType::primitive(PrimitiveId::Bool), 0)],
            size: 1,
            alignment: 1,
        })
        .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidField { ref field, .. } if field == "members"));
    }
}
