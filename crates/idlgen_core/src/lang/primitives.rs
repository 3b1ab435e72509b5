//! IDL primitive type vocabulary.
//!
//! Each primitive has an IDL spelling (`"uint32"`) and the Rust spelling backends emit for it (`"u32"`).
//!
//! ## Notes
//! - `status` is the kernel status code type; it is carried as a signed 32-bit integer.
//! - Only integral primitives may back an enum (see [`PrimitiveId::is_integral`]).
//!
//! ## Examples
//! ```rust
//! use idlgen_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("uint32"), Some(PrimitiveId::Uint32));
//! assert_eq!(PrimitiveId::Uint32.rust_name(), "u32");
//! ```

/// Stable identifier for IDL primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum PrimitiveId {
    Bool,
    Status,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    pub canonical: &'static str,
    pub rust: &'static str,
    pub integral: bool,
}

/// Registry of primitive types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Bool, "bool", "bool", false),
    info(PrimitiveId::Status, "status", "i32", true),
    info(PrimitiveId::Int8, "int8", "i8", true),
    info(PrimitiveId::Int16, "int16", "i16", true),
    info(PrimitiveId::Int32, "int32", "i32", true),
    info(PrimitiveId::Int64, "int64", "i64", true),
    info(PrimitiveId::Uint8, "uint8", "u8", true),
    info(PrimitiveId::Uint16, "uint16", "u16", true),
    info(PrimitiveId::Uint32, "uint32", "u32", true),
    info(PrimitiveId::Uint64, "uint64", "u64", true),
    info(PrimitiveId::Float32, "float32", "f32", false),
    info(PrimitiveId::Float64, "float64", "f64", false),
];

impl PrimitiveId {
    /// IDL spelling (e.g. `"int16"`).
    pub fn as_str(self) -> &'static str {
        info_for(self).canonical
    }

    /// Rust spelling (e.g. `"i16"`).
    pub fn rust_name(self) -> &'static str {
        info_for(self).rust
    }

    /// Whether values of this primitive are integers.
    pub fn is_integral(self) -> bool {
        info_for(self).integral
    }
}

/// Resolve an IDL spelling to a [`PrimitiveId`].
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.canonical == name).map(|p| p.id)
}

/// Return the registry entry for a primitive.
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: primitive type info missing")
}

const fn info(id: PrimitiveId, canonical: &'static str, rust: &'static str, integral: bool) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        canonical,
        rust,
        integral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_classification() {
        assert!(PrimitiveId::Uint8.is_integral());
        assert!(PrimitiveId::Status.is_integral());
        assert!(!PrimitiveId::Bool.is_integral());
        assert!(!PrimitiveId::Float64.is_integral());
    }

    #[test]
    fn test_status_is_i32() {
        assert_eq!(PrimitiveId::Status.rust_name(), "i32");
    }

    #[test]
    fn test_unknown_primitive() {
        assert_eq!(from_str("u32"), None);
        assert_eq!(from_str("string"), None);
    }
}
