//! Runs the `studymark` binary the way a user would.

use std::{fs, process::Command};

fn studymark(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_studymark"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run studymark")
}

#[test]
fn writes_both_files_and_reports_success() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let output = studymark(dir.path());
    assert!(output.status.success(), "exit status {}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Logo created successfully\n");
    assert!(dir.path().join("logo.png").is_file(), "logo.png missing");
    assert!(dir.path().join("favicon.ico").is_file(), "favicon.ico missing");
}

#[test]
fn failure_prints_one_diagnostic_line() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::create_dir(dir.path().join("logo.png")).expect("failed to block logo.png");

    let output = studymark(dir.path());
    assert!(!output.status.success(), "run should fail");
    assert!(output.stdout.is_empty(), "nothing should be printed on stdout");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was {stderr:?}");
    assert!(stderr.contains("logo.png"), "stderr was {stderr:?}");
}
