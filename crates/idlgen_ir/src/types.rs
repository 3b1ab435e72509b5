//! IR type references.

use idlgen_core::lang::handles::HandleSubtype;
use idlgen_core::lang::primitives::PrimitiveId;
use serde::{Deserialize, Serialize};

/// The type of a member, parameter or constant.
///
/// `Identifier` and `Request` refer to other declarations by compound name (`library/Name`). The IR does not
/// guarantee those names resolve in the current module; references into other libraries are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrType {
    Primitive {
        subtype: PrimitiveId,
    },
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maybe_element_count: Option<u32>,
        #[serde(default)]
        nullable: bool,
    },
    Vector {
        element_type: Box<IrType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maybe_element_count: Option<u32>,
        #[serde(default)]
        nullable: bool,
    },
    Array {
        element_type: Box<IrType>,
        element_count: u32,
    },
    Handle {
        subtype: HandleSubtype,
        #[serde(default)]
        nullable: bool,
    },
    /// Server end of a channel speaking the named interface.
    Request {
        subtype: String,
        #[serde(default)]
        nullable: bool,
    },
    Identifier {
        identifier: String,
        #[serde(default)]
        nullable: bool,
    },
}

impl IrType {
    pub fn primitive(subtype: PrimitiveId) -> Self {
        IrType::Primitive { subtype }
    }

    pub fn string() -> Self {
        IrType::String {
            maybe_element_count: None,
            nullable: false,
        }
    }

    pub fn vector(element: IrType) -> Self {
        IrType::Vector {
            element_type: Box::new(element),
            maybe_element_count: None,
            nullable: false,
        }
    }

    pub fn array(element: IrType, count: u32) -> Self {
        IrType::Array {
            element_type: Box::new(element),
            element_count: count,
        }
    }

    pub fn handle(subtype: HandleSubtype) -> Self {
        IrType::Handle {
            subtype,
            nullable: false,
        }
    }

    pub fn identifier(identifier: impl Into<String>) -> Self {
        IrType::Identifier {
            identifier: identifier.into(),
            nullable: false,
        }
    }

    pub fn request(interface: impl Into<String>) -> Self {
        IrType::Request {
            subtype: interface.into(),
            nullable: false,
        }
    }

    /// Return the same type marked nullable. Primitives and arrays cannot be nullable and are returned as-is.
    pub fn nullable(self) -> Self {
        match self {
            IrType::String { maybe_element_count, .. } => IrType::String {
                maybe_element_count,
                nullable: true,
            },
            IrType::Vector {
                element_type,
                maybe_element_count,
                ..
            } => IrType::Vector {
                element_type,
                maybe_element_count,
                nullable: true,
            },
            IrType::Handle { subtype, .. } => IrType::Handle { subtype, nullable: true },
            IrType::Request { subtype, .. } => IrType::Request { subtype, nullable: true },
            IrType::Identifier { identifier, .. } => IrType::Identifier {
                identifier,
                nullable: true,
            },
            other => other,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            IrType::String { nullable, .. }
            | IrType::Vector { nullable, .. }
            | IrType::Handle { nullable, .. }
            | IrType::Request { nullable, .. }
            | IrType::Identifier { nullable, .. } => *nullable,
            IrType::Primitive { .. } | IrType::Array { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_marks_reference_types() {
        assert!(IrType::string().nullable().is_nullable());
        assert!(IrType::identifier("lib/Foo").nullable().is_nullable());
        assert!(IrType::handle(HandleSubtype::Channel).nullable().is_nullable());
    }

    #[test]
    fn test_nullable_ignored_for_value_types() {
        let ty = IrType::primitive(PrimitiveId::Uint8).nullable();
        assert_eq!(ty, IrType::primitive(PrimitiveId::Uint8));
        assert!(!IrType::array(IrType::primitive(PrimitiveId::Bool), 4).nullable().is_nullable());
    }

    #[test]
    fn test_deserialize_vector_of_strings() {
        let ty: IrType = serde_json::from_str(
            r#"{"kind": "vector", "element_type": {"kind": "string"}, "maybe_element_count": 8, "nullable": true}"#,
        )
        .unwrap();
        assert_eq!(
            ty,
            IrType::Vector {
                element_type: Box::new(IrType::string()),
                maybe_element_count: Some(8),
                nullable: true,
            }
        );
    }

    #[test]
    fn test_deserialize_primitive_and_handle() {
        let prim: IrType = serde_json::from_str(r#"{"kind": "primitive", "subtype": "uint32"}"#).unwrap();
        assert_eq!(prim, IrType::primitive(PrimitiveId::Uint32));
        let handle: IrType = serde_json::from_str(r#"{"kind": "handle", "subtype": "eventpair"}"#).unwrap();
        assert_eq!(handle, IrType::handle(HandleSubtype::EventPair));
    }
}
