//! Interface template.
//!
//! For an interface `Echo` this emits, in order:
//!
//! - one `u32` ordinal constant per method (`ECHO_ECHO_STRING_ORDINAL`);
//! - the request and response message structs (`EchoEchoStringRequest`, `EchoEchoStringResponse`), rendered by
//!   the registry's `StructDeclaration` template;
//! - `EchoMarker` and its `ServiceMarker` impl;
//! - `EchoProxy`, with one client method per request-bearing method;
//! - the `Echo` server trait, with one associated future per request-bearing method.
//!
//! Events (response-only methods) contribute their ordinal and response struct only.

use idlgen_core::naming;
use idlgen_ir::{Decl, DeclKind, Interface, Method, Parameter, Struct, StructMember};
use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use super::{emit, types};
use crate::backend::templates::{DeclRenderer, RenderContext, TemplateError};

/// Alignment of every message body.
const MESSAGE_ALIGNMENT: u32 = 8;

/// `InterfaceDeclaration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceTemplate;

impl DeclRenderer for InterfaceTemplate {
    fn render(&self, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        let Decl::Interface(iface) = decl else {
            return Err(emit::kind_mismatch(DeclKind::Interface, decl));
        };
        for method in &iface.methods {
            validate_method(method, decl)?;
        }

        let mut pieces = Vec::new();
        if !iface.methods.is_empty() {
            pieces.push(ordinals(iface, decl)?);
        }
        for method in &iface.methods {
            for message in messages(iface, method) {
                pieces.push(ctx.render_named("StructDeclaration", Decl::Struct(&message))?);
            }
        }
        pieces.push(endpoints(iface, decl, ctx)?);
        Ok(pieces.join("\n"))
    }
}

fn validate_method(method: &Method, decl: Decl<'_>) -> Result<(), TemplateError> {
    if !method.has_request && !method.has_response {
        return Err(TemplateError::invalid(
            decl,
            "methods",
            format!("`{}` has neither a request nor a response", method.name),
        ));
    }
    if method.has_request && method.maybe_request.is_none() {
        return Err(TemplateError::missing(decl, format!("{}.maybe_request", method.name)));
    }
    if method.has_response && method.maybe_response.is_none() {
        return Err(TemplateError::missing(decl, format!("{}.maybe_response", method.name)));
    }
    Ok(())
}

fn ordinal_ident(iface: &Interface, method: &Method, decl: Decl<'_>) -> Result<Ident, TemplateError> {
    let name = naming::to_screaming_snake_case(&format!("{}{}Ordinal", iface.name, method.name));
    emit::ident(&name, decl, "methods")
}

fn message_name(iface: &Interface, method: &Method, suffix: &str) -> String {
    format!("{}{}{}", iface.name, method.name, suffix)
}

fn ordinals(iface: &Interface, decl: Decl<'_>) -> Result<String, TemplateError> {
    let mut items = Vec::with_capacity(iface.methods.len());
    for method in &iface.methods {
        let name = ordinal_ident(iface, method, decl)?;
        let ordinal = Literal::u32_unsuffixed(method.ordinal);
        items.push(quote! { pub const #name: u32 = #ordinal; });
    }
    emit::format_items(quote! { #(#items)* }, decl)
}

/// Message structs of one method, request first.
fn messages(iface: &Interface, method: &Method) -> Vec<Struct> {
    let mut out = Vec::with_capacity(2);
    if let (true, Some(params)) = (method.has_request, &method.maybe_request) {
        out.push(message(message_name(iface, method, "Request"), params, method.maybe_request_size));
    }
    if let (true, Some(params)) = (method.has_response, &method.maybe_response) {
        out.push(message(message_name(iface, method, "Response"), params, method.maybe_response_size));
    }
    out
}

fn message(name: String, params: &[Parameter], size: u32) -> Struct {
    Struct {
        name,
        members: params
            .iter()
            .map(|p| StructMember::new(p.name.clone(), p.ty.clone(), p.offset))
            .collect(),
        size,
        alignment: MESSAGE_ALIGNMENT,
    }
}

/// Marker, proxy and server trait.
fn endpoints(iface: &Interface, decl: Decl<'_>, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
    let trait_name = emit::ident(&iface.name, decl, "name")?;
    let marker = emit::ident(&format!("{}Marker", iface.name), decl, "name")?;
    let proxy = emit::ident(&format!("{}Proxy", iface.name), decl, "name")?;
    let service_name = Literal::string(iface.service_name.as_deref().unwrap_or(""));

    let mut proxy_methods = Vec::new();
    let mut server_items = Vec::new();
    for method in iface.methods.iter().filter(|m| m.has_request) {
        let params = method.maybe_request.as_deref().unwrap_or_default();
        let fn_name = emit::ident(&naming::to_snake_case(&method.name), decl, "methods")?;
        let ordinal = ordinal_ident(iface, method, decl)?;
        let request = emit::ident(&message_name(iface, method, "Request"), decl, "methods")?;
        let (args, fields) = parameters(params, decl, ctx)?;

        let response = if method.has_response {
            let response = emit::ident(&message_name(iface, method, "Response"), decl, "methods")?;
            proxy_methods.push(quote! {
                pub fn #fn_name(&self, #(#args),*) -> fidl::client2::QueryResponseFut<#response> {
                    self.client.send_query(&mut #request { #(#fields),* }, #ordinal)
                }
            });
            quote! { #response }
        } else {
            proxy_methods.push(quote! {
                pub fn #fn_name(&self, #(#args),*) -> Result<(), fidl::Error> {
                    self.client.send(&mut #request { #(#fields),* }, #ordinal)
                }
            });
            quote! { () }
        };

        let fut = emit::ident(
            &format!("{}Fut", naming::to_upper_camel_case(&method.name)),
            decl,
            "methods",
        )?;
        server_items.push(quote! {
            type #fut: Future<Item = #response, Error = Never> + Send;
            fn #fn_name(&mut self, #(#args),*) -> Self::#fut;
        });
    }

    emit::format_items(
        quote! {
            pub struct #marker;

            impl fidl::endpoints2::ServiceMarker for #marker {
                type Proxy = #proxy;
                const NAME: &'static str = #service_name;
            }

            pub struct #proxy {
                client: fidl::client2::Client,
            }

            impl #proxy {
                pub fn new(channel: fasync::Channel) -> Self {
                    Self {
                        client: fidl::client2::Client::new(channel),
                    }
                }

                #(#proxy_methods)*
            }

            pub trait #trait_name {
                #(#server_items)*
            }
        },
        decl,
    )
}

/// Typed argument list and the matching field initializers.
fn parameters(
    params: &[Parameter],
    decl: Decl<'_>,
    ctx: &RenderContext<'_>,
) -> Result<(Vec<TokenStream>, Vec<Ident>), TemplateError> {
    let mut args = Vec::with_capacity(params.len());
    let mut fields = Vec::with_capacity(params.len());
    let mut names = emit::EmittedNames::new();
    for param in params {
        let name = emit::ident(&naming::to_snake_case(&param.name), decl, "methods")?;
        names.claim(&name, &param.name, decl, "methods")?;
        let ty = types::rust_type(&param.ty, decl, "methods", ctx)?;
        args.push(quote! { #name: #ty });
        fields.push(name);
    }
    Ok((args, fields))
}
