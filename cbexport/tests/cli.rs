//! Runs the `cbexport` binary against snapshots in a temporary directory.

use std::{path::Path, process::Command};

use tempfile::TempDir;

fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let build = dir.join("build");
    std::fs::create_dir_all(&build).unwrap();
    let snapshot = format!(
        r#"
[build]
home_directory = "/src"
home_output_directory = "{build}"
make_program = "make"
configure_command = "cmake"

[[projects]]
name = "demo"
output_directory = "{build}"

[[projects.targets]]
name = "app"
kind = "executable"
build_directory = "{build}"
location = "{build}/app"
"#,
        build = build.display()
    );
    let path = dir.join("cbexport.toml");
    std::fs::write(&path, snapshot).unwrap();
    path
}

fn cbexport() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cbexport"))
}

#[test]
fn test_generate_writes_project_file() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    let output = cbexport()
        .args(["generate", "-s"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let written = std::fs::read_to_string(temp.path().join("build/demo.cbp")).unwrap();
    assert!(written.contains("<Add alias=\"All\" targets=\"app;\" />"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("demo.cbp"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    let output = cbexport()
        .args(["generate", "--dry-run", "--refresh", "none", "-s"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<CodeBlocks_project_file>"));
    assert!(!stdout.contains("ExtraCommands"));
    assert!(!temp.path().join("build/demo.cbp").exists());
}

#[test]
fn test_check_json() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    let output = cbexport()
        .args(["check", "--json", "-s"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["projects"][0]["project"], "demo");
    assert!(report["projects"][0]["fatal"].is_null());
}

#[test]
fn test_missing_snapshot_fails() {
    let temp = TempDir::new().unwrap();

    let output = cbexport()
        .args(["check", "-s"])
        .arg(temp.path().join("nope.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_build_command() {
    let output = cbexport()
        .args([
            "build-command",
            "--ide",
            "codeblocks",
            "--project",
            "demo",
            "--target",
            "clean",
            "--host",
            "unix",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "codeblocks --no-splash-screen --no-ipc --clean demo.cbp"
    );
}
