//! Map IR types to Rust type syntax.
//!
//! | IR type                 | Rust                                     |
//! |-------------------------|------------------------------------------|
//! | `uint32`                | `u32`                                    |
//! | `string`                | `String`                                 |
//! | `vector<T>`             | `Vec<T>`                                 |
//! | `array<T>:N`            | `[T; N]`                                 |
//! | `handle<channel>`       | `zx::Channel`                            |
//! | `request<Foo>`          | `fidl::endpoints2::ServerEnd<FooMarker>` |
//! | `Foo` (interface)       | `fidl::endpoints2::ClientEnd<FooMarker>` |
//! | `Foo` (struct, union)   | `Foo`                                    |
//!
//! Nullable types are wrapped in `Option<...>`; nullable structs and unions are additionally boxed.

use idlgen_ir::{Decl, DeclKind, IrType};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use super::emit;
use crate::backend::templates::{RenderContext, TemplateError};

/// Emit the Rust type for `ty`, as used in fields and parameters.
pub(super) fn rust_type(
    ty: &IrType,
    decl: Decl<'_>,
    field: &str,
    ctx: &RenderContext<'_>,
) -> Result<TokenStream, TemplateError> {
    let (inner, nullable) = match ty {
        IrType::Primitive { subtype } => {
            let prim = Ident::new(subtype.rust_name(), Span::call_site());
            (quote! { #prim }, false)
        }
        IrType::String { nullable, .. } => (quote! { String }, *nullable),
        IrType::Vector {
            element_type, nullable, ..
        } => {
            let element = rust_type(element_type, decl, field, ctx)?;
            (quote! { Vec<#element> }, *nullable)
        }
        IrType::Array {
            element_type,
            element_count,
        } => {
            let element = rust_type(element_type, decl, field, ctx)?;
            let count = Literal::usize_unsuffixed(*element_count as usize);
            (quote! { [#element; #count] }, false)
        }
        IrType::Handle { subtype, nullable } => {
            let handle = Ident::new(subtype.rust_name(), Span::call_site());
            (quote! { zx::#handle }, *nullable)
        }
        IrType::Request { subtype, nullable } => {
            let marker = emit::decl_path(subtype, "Marker", decl, field, ctx)?;
            (quote! { fidl::endpoints2::ServerEnd<#marker> }, *nullable)
        }
        IrType::Identifier { identifier, nullable } => {
            return identifier_type(identifier, *nullable, decl, field, ctx);
        }
    };
    Ok(if nullable { quote! { Option<#inner> } } else { inner })
}

fn identifier_type(
    identifier: &str,
    nullable: bool,
    decl: Decl<'_>,
    field: &str,
    ctx: &RenderContext<'_>,
) -> Result<TokenStream, TemplateError> {
    match ctx.index().lookup(identifier) {
        Some(DeclKind::Interface) => {
            let marker = emit::decl_path(identifier, "Marker", decl, field, ctx)?;
            let client = quote! { fidl::endpoints2::ClientEnd<#marker> };
            Ok(if nullable { quote! { Option<#client> } } else { client })
        }
        Some(DeclKind::Const) => Err(TemplateError::invalid(
            decl,
            field,
            format!("`{}` names a const, not a type", identifier),
        )),
        Some(DeclKind::Enum) => {
            let path = emit::decl_path(identifier, "", decl, field, ctx)?;
            Ok(if nullable { quote! { Option<#path> } } else { path })
        }
        // Structs, unions and declarations of other libraries.
        _ => {
            let path = emit::decl_path(identifier, "", decl, field, ctx)?;
            Ok(if nullable { quote! { Option<Box<#path>> } } else { path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::Config;
    use crate::backend::templates::TemplateRegistry;
    use idlgen_core::lang::handles::HandleSubtype;
    use idlgen_core::lang::primitives::PrimitiveId;
    use idlgen_ir::{Const, Constant, Interface, Module, Struct};

    fn module() -> Module {
        let mut module = Module::new("fidl.test");
        module.interfaces.push(Interface {
            name: "Echo".into(),
            service_name: None,
            methods: vec![],
        });
        module.structs.push(Struct {
            name: "Point".into(),
            members: vec![],
            size: 0,
            alignment: 1,
        });
        module.consts.push(Const {
            name: "MAX".into(),
            ty: IrType::primitive(PrimitiveId::Uint32),
            value: Constant::numeric("1"),
        });
        module
    }

    fn render(ty: IrType) -> Result<String, TemplateError> {
        let m = module();
        let index = m.index();
        let registry = TemplateRegistry::new();
        let config = Config::default();
        let ctx = RenderContext::new(&config, &registry, &index);
        rust_type(&ty, Decl::Struct(&m.structs[0]), "members", &ctx).map(|t| t.to_string())
    }

    #[test]
    fn test_value_types() {
        assert_eq!(render(IrType::primitive(PrimitiveId::Int64)).unwrap(), quote! { i64 }.to_string());
        assert_eq!(render(IrType::string()).unwrap(), quote! { String }.to_string());
        assert_eq!(
            render(IrType::array(IrType::primitive(PrimitiveId::Uint8), 16)).unwrap(),
            quote! { [u8; 16] }.to_string()
        );
    }

    #[test]
    fn test_nullable_wrapping() {
        assert_eq!(
            render(IrType::string().nullable()).unwrap(),
            quote! { Option<String> }.to_string()
        );
        assert_eq!(
            render(IrType::identifier("fidl.test/Point").nullable()).unwrap(),
            quote! { Option<Box<Point>> }.to_string()
        );
        assert_eq!(
            render(IrType::handle(HandleSubtype::Vmo).nullable()).unwrap(),
            quote! { Option<zx::Vmo> }.to_string()
        );
    }

    #[test]
    fn test_interface_references_use_endpoints() {
        assert_eq!(
            render(IrType::identifier("fidl.test/Echo")).unwrap(),
            quote! { fidl::endpoints2::ClientEnd<EchoMarker> }.to_string()
        );
        assert_eq!(
            render(IrType::request("fidl.test/Echo")).unwrap(),
            quote! { fidl::endpoints2::ServerEnd<EchoMarker> }.to_string()
        );
    }

    #[test]
    fn test_foreign_identifiers_are_crate_qualified() {
        assert_eq!(
            render(IrType::vector(IrType::identifier("fuchsia.mem/Buffer"))).unwrap(),
            quote! { Vec<fidl_fuchsia_mem::Buffer> }.to_string()
        );
    }

    #[test]
    fn test_const_is_not_a_type() {
        assert!(matches!(
            render(IrType::identifier("MAX")),
            Err(TemplateError::InvalidField { .. })
        ));
    }
}
