// Running the quotient binary on script files and checking what it reports.

use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};

fn run_script(path: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quotient"))
        .arg(path)
        .env_remove("QUOTIENT_LOG")
        .env_remove("QUOTIENT_PATH")
        .output()
        .expect("run quotient")
}

#[test]
fn missing_script_is_reported_like_any_other_error() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("not-there.qt");
    let output = run_script(&path.to_string_lossy());

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "Error: FileNotFound\n");
    assert!(output.stdout.is_empty());
}

#[test]
fn failing_script_reports_the_trail() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("failing.qt");

    fs::write(&path, "1 .\n\ndrop drop\n2 .\n").expect("write script");

    let output = run_script(&path.to_string_lossy());

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: StackUnderflow\n  at drop (line 3)\n"
    );
}
