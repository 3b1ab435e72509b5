//! CLI module for idlgen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate <IR_JSON>` - Render an IR module with a backend and write `<output-base>.<ext>`
//! - `kinds` - List declaration kinds and their template names
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::IDLGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// IDL code generator
#[derive(Parser, Debug)]
#[command(name = "idlgen")]
#[command(version = IDLGEN_VERSION)]
#[command(about = "Generate source bindings from IDL intermediate representation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an IR module (JSON) to one source file
    Generate {
        /// IR module in JSON form
        #[arg(value_name = "IR_JSON")]
        ir: PathBuf,
        /// Base file name of the generated file (the backend's extension is appended)
        #[arg(long, value_name = "BASE")]
        output_base: String,
        /// Directory cross-language includes are relative to
        #[arg(long, value_name = "DIR", default_value = "")]
        include_base: String,
        /// Target backend
        #[arg(long, value_name = "NAME", default_value = "rust")]
        backend: String,
        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// List declaration kinds and their template names
    Kinds,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            ir,
            output_base,
            include_base,
            backend,
            stdout,
        } => commands::generate_file(&ir, &backend, output_base, include_base, stdout),
        Command::Kinds => commands::list_kinds(),
    }
}

// ============================================================================
// Tests
// ============================================================================
