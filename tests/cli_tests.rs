//! CLI integration tests
//!
//! These drive `idlgen::cli::execute` with parsed arguments and check the files it writes.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use idlgen::cli::{Cli, ExitCode, execute};

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("idlgen_cli_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) -> Result<ExitCode, idlgen::cli::CliError> {
    let mut argv = vec!["idlgen"];
    argv.extend_from_slice(args);
    execute(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_generate_writes_output_base_with_extension() {
    let dir = scratch_dir("generate");
    let base = dir.join("nested").join("echo");
    let code = run(&[
        "generate",
        "tests/fixtures/echo.json",
        "--output-base",
        base.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = fs::read_to_string(base.with_extension("rs")).unwrap();
    assert!(written.contains("pub struct EchoMarker;"));
    syn::parse_file(&written).unwrap();
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generation_failure_writes_nothing() {
    let dir = scratch_dir("failure");
    let ir = dir.join("bad.json");
    fs::write(
        &ir,
        r#"{"name": "fidl.bad", "enums": [{"name": "Empty", "type": "uint32", "members": []}]}"#,
    )
    .unwrap();
    let base = dir.join("bad");

    let err = run(&["generate", ir.to_str().unwrap(), "--output-base", base.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("enum `Empty`"), "{}", err.message);
    assert!(!base.with_extension("rs").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = scratch_dir("invalid");
    let ir = dir.join("broken.json");
    fs::write(&ir, "{ not json").unwrap();

    let err = run(&["generate", ir.to_str().unwrap(), "--output-base", "unused"]).unwrap_err();
    assert!(err.message.starts_with("Invalid IR in"), "{}", err.message);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_kinds_lists_every_kind() {
    assert_eq!(run(&["kinds"]).unwrap(), ExitCode::SUCCESS);
}
