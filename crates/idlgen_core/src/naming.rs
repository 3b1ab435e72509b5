//! Identifier naming conventions shared by backends.
//!
//! IDL sources use `UpperCamelCase` for types and methods and dotted library names (`fuchsia.ui.input`).
//! Backends re-case these for their target language; the helpers here are pure string transforms.
//!
//! ## Examples
//! ```rust
//! use idlgen_core::naming;
//!
//! assert_eq!(naming::to_snake_case("EchoString"), "echo_string");
//! assert_eq!(naming::to_upper_camel_case("echo_string"), "EchoString");
//! assert_eq!(naming::to_screaming_snake_case("EchoString"), "ECHO_STRING");
//! assert_eq!(naming::library_crate_name("fuchsia.ui.input"), "fidl_fuchsia_ui_input");
//! ```

/// Prefix for crates generated from IDL libraries.
pub const LIBRARY_CRATE_PREFIX: &str = "fidl_";

/// Separator between library and declaration in a compound identifier (`library/Name`).
pub const COMPOUND_SEPARATOR: char = '/';

/// Convert an identifier to `snake_case`.
///
/// Word boundaries are a lower→upper transition, the last capital of an acronym followed by a lowercase
/// letter (`HTTPServer` → `http_server`), and existing underscores.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an identifier to `UpperCamelCase`.
pub fn to_upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an identifier to `SCREAMING_SNAKE_CASE`.
pub fn to_screaming_snake_case(name: &str) -> String {
    to_snake_case(name).to_ascii_uppercase()
}

/// Name of the crate generated for an IDL library (`fuchsia.ui` → `fidl_fuchsia_ui`).
pub fn library_crate_name(library: &str) -> String {
    format!("{}{}", LIBRARY_CRATE_PREFIX, library.replace('.', "_"))
}

/// Split a compound identifier into `(library, name)`.
///
/// Identifiers without a library part yield `None` for the library.
pub fn split_compound_identifier(identifier: &str) -> (Option<&str>, &str) {
    match identifier.rsplit_once(COMPOUND_SEPARATOR) {
        Some((library, name)) => (Some(library), name),
        None => (None, identifier),
    }
}
