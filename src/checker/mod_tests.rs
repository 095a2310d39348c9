use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::aggregator::aggregate;

fn check(checker: &LongLineChecker, content: &str) -> Vec<LongLine> {
    checker
        .check_reader(Path::new("mem.txt"), Cursor::new(content.as_bytes()))
        .unwrap()
}

#[test]
fn defaults_are_80_and_2() {
    assert_eq!(LongLineChecker::default(), LongLineChecker::new(80, 2));
}

#[test]
fn line_at_the_limit_is_not_reported() {
    let content = format!("{}\n", "x".repeat(80));
    assert!(check(&LongLineChecker::default(), &content).is_empty());
}

#[test]
fn line_over_the_limit_is_reported() {
    let content = format!("short\n{}\n", "x".repeat(81));

    let found = check(&LongLineChecker::default(), &content);

    assert_eq!(
        found,
        vec![LongLine {
            file: PathBuf::from("mem.txt"),
            line_number: 2,
            length: 81,
        }]
    );
}

#[test]
fn tabs_count_tab_width() {
    // 81 characters plus one tab worth two columns.
    let content = format!("\t{}\n", "y".repeat(81));

    let found = check(&LongLineChecker::default(), &content);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line_number, 1);
    assert_eq!(found[0].length, 83);
}

#[test]
fn tab_expansion_can_push_over_the_limit() {
    let content = format!("\t\t{}", "z".repeat(77));
    let checker = LongLineChecker::new(80, 2);
    assert_eq!(check(&checker, &content)[0].length, 81);

    let no_tabs = LongLineChecker::new(80, 0);
    assert!(check(&no_tabs, &content).is_empty());
}

#[test]
fn multibyte_characters_count_once() {
    let checker = LongLineChecker::new(3, 2);
    assert!(check(&checker, "äöü\n").is_empty());
    assert_eq!(check(&checker, "äöüß\n")[0].length, 4);
}

#[test]
fn carriage_return_is_not_counted() {
    let checker = LongLineChecker::new(3, 2);
    assert!(check(&checker, "abc\r\nabc\r\n").is_empty());
}

#[test]
fn last_line_without_newline_is_checked() {
    let checker = LongLineChecker::new(3, 2);
    let found = check(&checker, "ab\nabcd");
    assert_eq!(found[0].line_number, 2);
}

#[test]
fn invalid_utf8_does_not_fail() {
    let checker = LongLineChecker::new(2, 2);
    let found = checker
        .check_reader(Path::new("bin"), Cursor::new(&b"a\xff\xfeb\n"[..]))
        .unwrap();
    assert_eq!(found[0].length, 4);
}

#[test]
fn records_follow_file_then_line_order() {
    let dir = TempDir::new().unwrap();
    let long = "w".repeat(90);
    fs::write(dir.path().join("b.txt"), format!("{long}\nok\n{long}\n")).unwrap();
    fs::write(dir.path().join("a.txt"), format!("ok\n{long}\n")).unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();
    fs::write(dir.path().join("c/d.txt"), &long).unwrap();

    let found = aggregate(dir.path(), &LongLineChecker::default()).unwrap();

    let positions: Vec<(String, usize)> = found
        .iter()
        .map(|l| {
            let name = l.file.strip_prefix(dir.path()).unwrap();
            (name.to_string_lossy().replace('\\', "/"), l.line_number)
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            ("a.txt".to_string(), 2),
            ("b.txt".to_string(), 1),
            ("b.txt".to_string(), 3),
            ("c/d.txt".to_string(), 1),
        ]
    );
}

#[test]
fn empty_file_has_no_records() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("empty.rs");
    fs::write(&file, "").unwrap();

    assert!(
        aggregate(&file, &LongLineChecker::default())
            .unwrap()
            .is_empty()
    );
}
