//! IR declaration records, one struct per declaration kind.

use idlgen_core::lang::decl_kinds::DeclKind;
use idlgen_core::lang::primitives::PrimitiveId;
use serde::{Deserialize, Serialize};

use super::IrType;

/// A constant value: either a literal or a reference to another constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constant {
    Literal { literal: Literal },
    Identifier { identifier: String },
}

impl Constant {
    pub fn numeric(value: impl Into<String>) -> Self {
        Constant::Literal {
            literal: Literal::Numeric { value: value.into() },
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Constant::Literal {
            literal: Literal::String { value: value.into() },
        }
    }

    pub fn bool(value: bool) -> Self {
        Constant::Literal {
            literal: if value { Literal::True } else { Literal::False },
        }
    }

    pub fn identifier(identifier: impl Into<String>) -> Self {
        Constant::Identifier {
            identifier: identifier.into(),
        }
    }
}

/// Literal constant value. Numeric literals keep their source spelling (`"10"`, `"-1"`, `"0x20"`, `"1.5"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Literal {
    String { value: String },
    Numeric { value: String },
    True,
    False,
    Default,
}

/// `const NAME: type = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Const {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IrType,
    pub value: Constant,
}

/// Enumeration over an integral primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(rename = "type", default = "default_enum_type")]
    pub ty: PrimitiveId,
    pub members: Vec<EnumMember>,
}

fn default_enum_type() -> PrimitiveId {
    PrimitiveId::Uint32
}

/// Enum member. Members without an explicit value take their position in the member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Constant>,
}

/// Tagged union; exactly one member is present at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    pub name: String,
    pub members: Vec<UnionMember>,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub alignment: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IrType,
    #[serde(default)]
    pub offset: u32,
}

/// Record of laid-out members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    pub members: Vec<StructMember>,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub alignment: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IrType,
    #[serde(default)]
    pub offset: u32,
    /// Value the member takes in a default-constructed struct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maybe_default_value: Option<Constant>,
}

impl StructMember {
    pub fn new(name: impl Into<String>, ty: IrType, offset: u32) -> Self {
        Self {
            name: name.into(),
            ty,
            offset,
            maybe_default_value: None,
        }
    }

    pub fn with_default(mut self, value: Constant) -> Self {
        self.maybe_default_value = Some(value);
        self
    }
}

/// RPC-style interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    /// Discoverable service name, if the interface is published under one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// Interface method.
///
/// A method with a request and a response is a two-way call, request only is one-way, and response only is an
/// event sent by the server. `has_request`/`has_response` state the shape; the parameter lists carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub ordinal: u32,
    pub name: String,
    pub has_request: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maybe_request: Option<Vec<Parameter>>,
    #[serde(default)]
    pub maybe_request_size: u32,
    pub has_response: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maybe_response: Option<Vec<Parameter>>,
    #[serde(default)]
    pub maybe_response_size: u32,
}

impl Method {
    /// Two-way method with the given request and response parameters.
    pub fn two_way(ordinal: u32, name: impl Into<String>, request: Vec<Parameter>, response: Vec<Parameter>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            has_request: true,
            maybe_request: Some(request),
            maybe_request_size: 0,
            has_response: true,
            maybe_response: Some(response),
            maybe_response_size: 0,
        }
    }

    /// Fire-and-forget method.
    pub fn one_way(ordinal: u32, name: impl Into<String>, request: Vec<Parameter>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            has_request: true,
            maybe_request: Some(request),
            maybe_request_size: 0,
            has_response: false,
            maybe_response: None,
            maybe_response_size: 0,
        }
    }

    /// Server-initiated event.
    pub fn event(ordinal: u32, name: impl Into<String>, response: Vec<Parameter>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            has_request: false,
            maybe_request: None,
            maybe_request_size: 0,
            has_response: true,
            maybe_response: Some(response),
            maybe_response_size: 0,
        }
    }
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IrType,
    #[serde(default)]
    pub offset: u32,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: IrType) -> Self {
        Self {
            name: name.into(),
            ty,
            offset: 0,
        }
    }
}

/// Borrowed view of one declaration, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decl<'a> {
    Const(&'a Const),
    Enum(&'a Enum),
    Union(&'a Union),
    Struct(&'a Struct),
    Interface(&'a Interface),
}

impl<'a> Decl<'a> {
    pub fn kind(&self) -> DeclKind {
        match self {
            Decl::Const(_) => DeclKind::Const,
            Decl::Enum(_) => DeclKind::Enum,
            Decl::Union(_) => DeclKind::Union,
            Decl::Struct(_) => DeclKind::Struct,
            Decl::Interface(_) => DeclKind::Interface,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Decl::Const(d) => &d.name,
            Decl::Enum(d) => &d.name,
            Decl::Union(d) => &d.name,
            Decl::Struct(d) => &d.name,
            Decl::Interface(d) => &d.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_view_kind_and_name() {
        let s = Struct {
            name: "Point".to_string(),
            members: vec![],
            size: 0,
            alignment: 1,
        };
        let decl = Decl::Struct(&s);
        assert_eq!(decl.kind(), DeclKind::Struct);
        assert_eq!(decl.name(), "Point");
    }

    #[test]
    fn test_enum_type_defaults_to_uint32() {
        let e: Enum = serde_json::from_str(r#"{"name": "Color", "members": [{"name": "Red"}]}"#).unwrap();
        assert_eq!(e.ty, PrimitiveId::Uint32);
        assert_eq!(e.members[0].value, None);
    }

    #[test]
    fn test_constant_json_shapes() {
        let c: Constant =
            serde_json::from_str(r#"{"kind": "literal", "literal": {"kind": "numeric", "value": "10"}}"#).unwrap();
        assert_eq!(c, Constant::numeric("10"));
        let t: Constant = serde_json::from_str(r#"{"kind": "literal", "literal": {"kind": "true"}}"#).unwrap();
        assert_eq!(t, Constant::bool(true));
        let r: Constant = serde_json::from_str(r#"{"kind": "identifier", "identifier": "lib/MAX"}"#).unwrap();
        assert_eq!(r, Constant::identifier("lib/MAX"));
    }

    #[test]
    fn test_struct_member_default_value() {
        let m: StructMember = serde_json::from_str(
            r#"{"name": "retries", "type": {"kind": "primitive", "subtype": "uint8"}, "offset": 0,
                "maybe_default_value": {"kind": "literal", "literal": {"kind": "numeric", "value": "3"}}}"#,
        )
        .unwrap();
        assert_eq!(m.maybe_default_value, Some(Constant::numeric("3")));

        let plain = StructMember::new("x", IrType::string(), 0);
        let json = serde_json::to_string(&plain).unwrap();
        assert!(!json.contains("maybe_default_value"), "{}", json);
    }

    #[test]
    fn test_method_constructors() {
        let m = Method::event(3, "OnOpen", vec![]);
        assert!(!m.has_request);
        assert!(m.has_response);
        assert!(m.maybe_request.is_none());
    }
}
