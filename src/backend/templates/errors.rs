//! Define error types for per-declaration rendering.
//!
//! A [`TemplateError`] means one declaration could not be rendered: either no template is registered for its
//! kind, or the record does not have the shape the template needs. These are structural problems in the IR or
//! unsupported shapes, never transient conditions, so nothing retries them.

use idlgen_ir::{Decl, DeclKind};
use thiserror::Error;

/// Error rendering a single declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template is registered under this kind or template name.
    #[error("no template registered for `{0}`")]
    UnknownKind(String),

    /// A template was handed a declaration of another kind.
    #[error("{expected} template cannot render {found} `{name}`")]
    KindMismatch {
        expected: DeclKind,
        found: DeclKind,
        name: String,
    },

    /// The record lacks a field the template requires.
    #[error("{kind} `{name}` is missing `{field}`")]
    MissingField { kind: DeclKind, name: String, field: String },

    /// A field is present but cannot be expressed in the target language.
    #[error("{kind} `{name}` has invalid `{field}`: {reason}")]
    InvalidField {
        kind: DeclKind,
        name: String,
        field: String,
        reason: String,
    },

    /// The template produced text that is not valid target syntax.
    #[error("generated code for {kind} `{name}` does not parse: {message}")]
    Syntax {
        kind: DeclKind,
        name: String,
        message: String,
    },
}

impl TemplateError {
    pub fn missing(decl: Decl<'_>, field: impl Into<String>) -> Self {
        TemplateError::MissingField {
            kind: decl.kind(),
            name: decl.name().to_string(),
            field: field.into(),
        }
    }

    pub fn invalid(decl: Decl<'_>, field: impl Into<String>, reason: impl Into<String>) -> Self {
        TemplateError::InvalidField {
            kind: decl.kind(),
            name: decl.name().to_string(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn syntax(decl: Decl<'_>, message: impl std::fmt::Display) -> Self {
        TemplateError::Syntax {
            kind: decl.kind(),
            name: decl.name().to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlgen_ir::Enum;

    #[test]
    fn test_missing_field_message() {
        let e = Enum {
            name: "Color".into(),
            ty: idlgen_core::lang::primitives::PrimitiveId::Uint8,
            members: vec![],
        };
        let err = TemplateError::missing(Decl::Enum(&e), "members");
        assert_eq!(err.to_string(), "enum `Color` is missing `members`");
    }

    #[test]
    fn test_unknown_kind_message() {
        let err = TemplateError::UnknownKind("TableDeclaration".into());
        assert_eq!(err.to_string(), "no template registered for `TableDeclaration`");
    }
}
