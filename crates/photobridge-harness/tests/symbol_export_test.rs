//! Integration test: symbol-list to version-script file pipeline.
//!
//! Validates that:
//! 1. A symbol file round-trips to the byte-exact version-script format.
//! 2. An empty symbol file produces the empty-global script.
//! 3. A malformed (blank) line aborts with no output written.
//! 4. A missing input path surfaces as an I/O error.
//!
//! Run: cargo test -p photobridge-harness --test symbol_export_test

use photobridge_core::version_script::SymbolListError;
use photobridge_harness::{SymbolExportError, write_version_script};

#[test]
fn symbol_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("libgphoto2.sym");
    let output = dir.path().join("libgphoto2.ver");
    std::fs::write(&input, "gp_library_version\ngp_port_library_version\n").unwrap();

    let count = write_version_script(&input, &output).unwrap();
    assert_eq!(count, 2);

    let script = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        script,
        "{ global:\ngp_library_version;\ngp_port_library_version;\nlocal: *; };\n"
    );
}

#[test]
fn empty_symbol_file_produces_empty_global() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.sym");
    let output = dir.path().join("empty.ver");
    std::fs::write(&input, "").unwrap();

    let count = write_version_script(&input, &output).unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "{ global:\nlocal: *; };\n"
    );
}

#[test]
fn malformed_line_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.sym");
    let output = dir.path().join("bad.ver");
    std::fs::write(&input, "gp_camera_new\n\ngp_camera_exit\n").unwrap();

    let err = write_version_script(&input, &output).unwrap_err();
    assert!(matches!(
        err,
        SymbolExportError::Symbols(SymbolListError::MalformedEntry { line: 2 })
    ));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.sym");
    let output = dir.path().join("out.ver");

    let err = write_version_script(&input, &output).unwrap_err();
    assert!(matches!(err, SymbolExportError::Io(_)));
}
