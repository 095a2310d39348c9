use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scanner::{DirectoryScanner, GlobFilter};

fn line(line: usize, text: &str) -> CommentLine {
    CommentLine {
        line,
        text: text.to_string(),
    }
}

fn go() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

fn finder() -> TodoFinder<DirectoryScanner<GlobFilter>> {
    let scanner = DirectoryScanner::new(GlobFilter::new(&[]).unwrap());
    TodoFinder::new(LanguageRegistry::default(), scanner)
}

#[test]
fn todo_line_starts_an_item() {
    let items = todos_in_comment(&[line(3, " TODO: add more tests")]);
    assert_eq!(items, vec![(3, "Add more tests".to_string())]);
}

#[test]
fn prefix_is_case_insensitive_and_may_carry_a_name() {
    let items = todos_in_comment(&[line(1, "todo(thomas): be more excited")]);
    assert_eq!(items, vec![(1, "Be more excited".to_string())]);
}

#[test]
fn lines_without_colon_or_prefix_are_ignored() {
    let group = [
        line(1, "TODO remember this"),
        line(2, "note: todo: later"),
        line(3, "todo"),
    ];
    assert!(todos_in_comment(&group).is_empty());
}

#[test]
fn continuation_lines_are_appended_until_blank() {
    let group = [
        line(1, " TODO: not enough o's,"),
        line(2, " we need to add more o's!"),
        line(3, ""),
        line(4, " Unrelated prose."),
    ];

    assert_eq!(
        todos_in_comment(&group),
        vec![(1, "Not enough o's, we need to add more o's!".to_string())]
    );
}

#[test]
fn a_new_todo_ends_the_previous_one() {
    let group = [line(1, "todo: one"), line(2, "todo: two"), line(3, "more")];

    assert_eq!(
        todos_in_comment(&group),
        vec![(1, "One".to_string()), (2, "Two more".to_string())]
    );
}

#[test]
fn empty_item_takes_its_continuation() {
    let group = [line(1, "TODO:"), line(2, "fill this in")];
    assert_eq!(todos_in_comment(&group), vec![(1, "fill this in".to_string())]);

    assert!(todos_in_comment(&[line(1, "TODO:  ")]).is_empty());
}

#[test]
fn non_ascii_first_letter_is_uppercased() {
    let items = todos_in_comment(&[line(1, "todo: élan")]);
    assert_eq!(items[0].1, "Élan");
}

#[test]
fn items_do_not_continue_across_comments() {
    let source = "// TODO: first\ncode();\n// second\n";
    assert_eq!(
        todos_in_source(source, &go()),
        vec![(1, "First".to_string())]
    );
}

#[test]
fn block_comment_todo_with_stars() {
    let source = "/*\n * TODO: handle errors\n * properly\n */\nfn x() {}\n";
    assert_eq!(
        todos_in_source(source, &go()),
        vec![(2, "Handle errors properly".to_string())]
    );
}

#[test]
fn finds_and_sorts_items_in_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("testdata.go"),
        "package testdata\n\n// Something else.\n//\n// TODO: be more excited\nfunc x() {}\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("more_testdata.go"),
        "package testdata\n\n/*\nTODO: More testdata!\n*/\n\n// todo(me): not enough o's\n// we need more!\nfunc y() {}\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "TODO: ignored, unknown language\n").unwrap();

    let items = finder().find(dir.path()).unwrap();

    let summary: Vec<(String, usize, &str)> = items
        .iter()
        .map(|i| {
            (
                i.path.file_name().unwrap().to_string_lossy().into_owned(),
                i.line,
                i.text.as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("more_testdata.go".to_string(), 4, "More testdata!"),
            ("more_testdata.go".to_string(), 7, "Not enough o's we need more!"),
            ("testdata.go".to_string(), 5, "Be more excited"),
        ]
    );
}

#[test]
fn file_argument_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.go");
    fs::write(&file, "package main\n").unwrap();

    let err = finder().find(&file).unwrap_err();

    assert!(matches!(err, ToolshedError::NotADirectory(_)));
}

#[test]
fn format_lists_items() {
    let items = vec![
        TodoItem {
            text: "More testdata!".to_string(),
            path: PathBuf::from("testdata/more_testdata.go"),
            line: 4,
        },
        TodoItem {
            text: "Be more excited".to_string(),
            path: PathBuf::from("testdata/testdata.go"),
            line: 5,
        },
    ];

    let expected = format!(
        "  - [ ] More testdata! ({}, line 4).\n  - [ ] Be more excited ({}, line 5).\n",
        Path::new("testdata/more_testdata.go").display(),
        Path::new("testdata/testdata.go").display()
    );
    assert_eq!(format_todos(&items), expected);
}

#[test]
fn format_without_items() {
    assert_eq!(format_todos(&[]), format!("{NOTHING_TODO}\n"));
}
