//! Integration tests for the formgen binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FORMAT_H: &str = r#"
namespace clang {
namespace format {
struct FormatStyle {
  /// Sort includes.
  bool SortIncludes;
  unsigned ColumnLimit;
  std::vector<std::string> Macros;
  std::optional<int> Unsupported;
};
} // namespace format
} // namespace clang
"#;

/// Test a full run writes both files
#[test]
fn test_generates_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let header = temp_dir.path().join("Format.h");
    fs::write(&header, FORMAT_H).unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut cmd = Command::cargo_bin("formgen").unwrap();
    cmd.arg("--clang-format-header-file")
        .arg(&header)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unsupported"));

    let h = fs::read_to_string(out.join("clangformatchecks.h")).unwrap();
    let cpp = fs::read_to_string(out.join("clangformatchecks.cpp")).unwrap();
    assert!(h.contains("QComboBox *m_SortIncludes = nullptr;"));
    assert!(h.contains("QPlainTextEdit *m_Macros = nullptr;"));
    assert!(!h.contains("m_Unsupported"));
    assert!(cpp.contains("Row {m_ColumnLimit, m_setColumnLimit}"));
}

/// Test a run with only the header argument writes into the default directory
#[test]
fn test_default_output_dir_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let header = temp_dir.path().join("Format.h");
    fs::write(&header, FORMAT_H).unwrap();

    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let src = root.join("src");
    let out = src.join("plugins").join("clangformat");
    let created_src = !src.exists();

    let mut cmd = Command::cargo_bin("formgen").unwrap();
    cmd.arg("--clang-format-header-file").arg(&header).assert().success();

    let h = fs::read_to_string(out.join("clangformatchecks.h")).unwrap();
    assert!(h.contains("QComboBox *m_SortIncludes = nullptr;"));
    assert!(out.join("clangformatchecks.cpp").is_file());

    if created_src {
        fs::remove_dir_all(&src).unwrap();
    } else {
        fs::remove_file(out.join("clangformatchecks.h")).unwrap();
        fs::remove_file(out.join("clangformatchecks.cpp")).unwrap();
    }
}

/// Test a missing header file fails with a readable error
#[test]
fn test_missing_header_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("formgen").unwrap();
    cmd.arg("-i")
        .arg(temp_dir.path().join("missing.h"))
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

/// Test a header without FormatStyle fails and writes nothing
#[test]
fn test_class_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let header = temp_dir.path().join("Other.h");
    fs::write(&header, "struct Other { bool X; };\n").unwrap();

    let mut cmd = Command::cargo_bin("formgen").unwrap();
    cmd.arg("-i")
        .arg(&header)
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("FormatStyle"));

    assert!(!temp_dir.path().join("clangformatchecks.h").exists());
}

/// Test the header argument is required
#[test]
fn test_requires_header_argument() {
    let mut cmd = Command::cargo_bin("formgen").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--clang-format-header-file"));
}
