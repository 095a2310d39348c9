mod common;

use common::{GO_SOURCE, TestFixture};
use predicates::prelude::*;

#[test]
fn cloc_counts_current_directory() {
    let fixture = TestFixture::new();
    fixture.create_file("main.go", GO_SOURCE);
    fixture.create_file("README", "not code\n");

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc"])
        .assert()
        .success()
        .stdout("Current directory contains 5 lines of code.\n");
}

#[test]
fn cloc_several_paths_print_total() {
    let fixture = TestFixture::new();
    fixture.create_file("a/main.go", GO_SOURCE);
    fixture.create_file("b/script.py", "# comment\nprint('x')\n\nprint('y')\n");

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc", "a", " b ", ""])
        .assert()
        .success()
        .stdout(
            "a contains 5 lines of code.\n\
             b contains 2 lines of code.\n\
             Total number of lines: 7.\n",
        );
}

#[test]
fn cloc_unknown_extensions_count_zero() {
    let fixture = TestFixture::new();
    fixture.create_file("notes.txt", "a\nb\nc\n");
    fixture.create_file("go", "package main\n");

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc", "notes.txt", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of lines: 0."));
}

#[test]
fn cloc_custom_language_from_config() {
    let fixture = TestFixture::new();
    fixture.create_config(
        "[languages.Toy]\nextensions = [\"toy\"]\nsingle_line_comments = [\"--\"]\n",
    );
    fixture.create_file("a.toy", "-- header\nbeep\nboop -- trailing\n");

    toolshed!()
        .current_dir(fixture.path())
        .args(["cloc", "a.toy"])
        .assert()
        .success()
        .stdout("a.toy contains 2 lines of code.\n");
}

#[test]
fn cloc_missing_path_reports_error() {
    let fixture = TestFixture::new();

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc", "missing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot open file missing."));
}

#[test]
fn cloc_json_output() {
    let fixture = TestFixture::new();
    fixture.create_file("main.go", GO_SOURCE);

    let output = toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc", "--format", "json", "main.go"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total"], 5);
    assert_eq!(parsed["paths"][0]["path"], "main.go");
}

#[test]
fn cloc_omits_total_when_a_later_path_fails() {
    let fixture = TestFixture::new();
    fixture.create_file("a/main.go", GO_SOURCE);
    fixture.create_file("b/main.go", GO_SOURCE);

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc", "a", "b", "missing"])
        .assert()
        .code(2)
        .stdout(
            "a contains 5 lines of code.\n\
             b contains 5 lines of code.\n",
        )
        .stderr(predicate::str::contains("Cannot open file missing."));
}

#[cfg(unix)]
#[test]
fn cloc_broken_symlink_with_unknown_extension_counts_zero() {
    let fixture = TestFixture::new();
    fixture.create_file("a.go", GO_SOURCE);
    std::os::unix::fs::symlink(fixture.path().join("gone"), fixture.path().join("x.txt"))
        .unwrap();

    toolshed!()
        .current_dir(fixture.path())
        .args(["--no-config", "cloc"])
        .assert()
        .success()
        .stdout("Current directory contains 5 lines of code.\n");
}
