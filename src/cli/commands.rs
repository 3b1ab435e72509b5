//! Command implementations for the CLI.

use std::fs;
use std::path::Path;

use idlgen_ir::{DeclKind, Module};

use super::{CliError, CliResult, ExitCode};
use crate::backend::{self, Config};

/// Maximum IR file size (100 MB)
const MAX_IR_SIZE: u64 = 100 * 1024 * 1024;

/// Read and parse an IR module.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_IR_SIZE` (100 MB)
/// - The contents are not a valid IR module
pub fn read_module(path: &Path) -> CliResult<Module> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_IR_SIZE {
        return Err(CliError::failure(format!(
            "IR file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_IR_SIZE
        )));
    }

    let json = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))?;
    Module::from_json(&json).map_err(|e| CliError::failure(format!("Invalid IR in '{}': {}", path.display(), e)))
}

/// Render the module in `ir` with the named backend.
///
/// The file is written to `<output_base>.<ext>` unless `to_stdout` is set. Nothing is written when generation
/// fails.
#[tracing::instrument(skip_all, fields(ir = %ir.display(), backend = backend_name))]
pub fn generate_file(
    ir: &Path,
    backend_name: &str,
    output_base: String,
    include_base: String,
    to_stdout: bool,
) -> CliResult<ExitCode> {
    let backend = backend::backend_for(backend_name).ok_or_else(|| {
        CliError::failure(format!(
            "Unknown backend '{}' (available: {})",
            backend_name,
            backend::BACKEND_NAMES.join(", ")
        ))
    })?;
    let module = read_module(ir)?;
    let config = Config::new(output_base, include_base);

    let output = backend::generate(backend.as_ref(), &module, &config)
        .map_err(|e| CliError::failure(format!("Code generation error: {}", e)))?;

    if to_stdout {
        print!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    let path = config.output_file_name(backend.file_extension());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::failure(format!("Cannot create directory '{}': {}", parent.display(), e)))?;
    }
    fs::write(&path, &output).map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), bytes = output.len(), "wrote generated file");
    Ok(ExitCode::SUCCESS)
}

/// Print every declaration kind with its template name, in emission order.
pub fn list_kinds() -> CliResult<ExitCode> {
    for kind in DeclKind::ALL {
        println!("{:<10} {}", kind.as_str(), kind.template_name());
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_module_missing_file() {
        let err = read_module(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
