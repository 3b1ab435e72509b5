//! Backend configuration for one generation run.

use std::path::PathBuf;

/// Configuration passed to each generator.
///
/// Both values are opaque to the source assembler: they are forwarded into the render context untouched so that
/// renderers can derive file names or relative include paths. Nothing here is validated; an empty or malformed
/// path surfaces later as an I/O error in whatever writes the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base file name for files generated by this generator.
    pub output_base: String,
    /// Directory to which cross-language includes are relative.
    pub include_base: String,
}

impl Config {
    pub fn new(output_base: impl Into<String>, include_base: impl Into<String>) -> Self {
        Self {
            output_base: output_base.into(),
            include_base: include_base.into(),
        }
    }

    /// Set the output base name.
    pub fn with_output_base(mut self, output_base: impl Into<String>) -> Self {
        self.output_base = output_base.into();
        self
    }

    /// Set the include base directory.
    pub fn with_include_base(mut self, include_base: impl Into<String>) -> Self {
        self.include_base = include_base.into();
        self
    }

    /// Path of the generated file: the output base with `extension` appended (`out` + `rs` → `out.rs`).
    pub fn output_file_name(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.output_base, extension))
    }
}
