use chrono::{TimeZone, Utc};

use super::*;

const TAGGED_WITH_BODY: &str = "hash: b6652b0
author: Thomas de Zeeuw
date: 2015-04-20T00:12:13+02:00
ref: HEAD -> master, tag: v0.2, origin/master
title: Serve: Allow first argument as directory
message: Now you can call `serve dir` or `server -d dir`.

==============================";

const UNTAGGED_NO_BODY: &str = "hash: 7c3924c
author: Thomas de Zeeuw
date: 2015-02-19T20:33:13+01:00
ref:
title: Move Gocover badges to the subdirectories
message:
==============================";

const MULTILINE_BODY: &str = "hash: 14d54f7
author: Thomas de Zeeuw
date: 2015-02-19T20:24:08+01:00
ref:
title: cll, cloc: skip file not found tests
message: The tests fail on travi-ci.org. The problem is likely that the error
message comes from the os and are therefor not platform independent.

==============================";

#[test]
fn parses_tagged_commit_with_body() {
    let commits = parse_git_log(TAGGED_WITH_BODY).unwrap();

    assert_eq!(
        commits,
        vec![Commit {
            hash: "b6652b0".to_string(),
            author: "Thomas de Zeeuw".to_string(),
            date: Utc.with_ymd_and_hms(2015, 4, 19, 22, 12, 13).unwrap(),
            title: "Serve: Allow first argument as directory".to_string(),
            message: "Now you can call `serve dir` or `server -d dir`.".to_string(),
            tag: Some("v0.2".to_string()),
        }]
    );
}

#[test]
fn parses_untagged_commit_without_body() {
    let commit = &parse_git_log(UNTAGGED_NO_BODY).unwrap()[0];

    assert_eq!(commit.hash, "7c3924c");
    assert_eq!(commit.tag, None);
    assert_eq!(commit.message, "");
    assert_eq!(
        commit.date,
        Utc.with_ymd_and_hms(2015, 2, 19, 19, 33, 13).unwrap()
    );
}

#[test]
fn multiline_body_is_joined_with_spaces() {
    let commit = &parse_git_log(MULTILINE_BODY).unwrap()[0];

    assert_eq!(commit.title, "cll, cloc: skip file not found tests");
    assert_eq!(
        commit.message,
        "The tests fail on travi-ci.org. The problem is likely that the error \
         message comes from the os and are therefor not platform independent."
    );
}

#[test]
fn parses_full_git_output() {
    // As printed by git: separator, `%n`, then the entry terminator.
    let log = format!("{TAGGED_WITH_BODY}\n\n{UNTAGGED_NO_BODY}\n\n{MULTILINE_BODY}\n\n");

    let commits = parse_git_log(&log).unwrap();

    let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(hashes, vec!["b6652b0", "7c3924c", "14d54f7"]);
}

#[test]
fn empty_log_has_no_commits() {
    assert!(parse_git_log("").unwrap().is_empty());
    assert!(parse_git_log("\n\n").unwrap().is_empty());
}

#[test]
fn tag_only_ref() {
    let log = UNTAGGED_NO_BODY.replace("ref:\n", "ref: tag: v0.1\n");
    assert_eq!(parse_git_log(&log).unwrap()[0].tag.as_deref(), Some("v0.1"));
}

#[test]
fn ref_without_tag_has_no_tag() {
    let log = UNTAGGED_NO_BODY.replace("ref:\n", "ref: HEAD -> main, origin/main\n");
    assert_eq!(parse_git_log(&log).unwrap()[0].tag, None);
}

#[test]
fn missing_separator_is_a_parse_error() {
    let log = UNTAGGED_NO_BODY.replace("author: Thomas", "author Thomas");

    let err = parse_git_log(&log).unwrap_err();

    assert!(matches!(err, ToolshedError::ChangelogParse(_)));
    assert!(err.to_string().contains("author"));
}

#[test]
fn invalid_date_is_a_parse_error() {
    let log = UNTAGGED_NO_BODY.replace("2015-02-19T20:33:13+01:00", "yesterday");

    let err = parse_git_log(&log).unwrap_err();

    assert!(matches!(err, ToolshedError::ChangelogParse(_)));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn fields_out_of_order_are_rejected() {
    let log = "author: someone\nhash: abc\n==============================";
    assert!(matches!(
        parse_git_log(log),
        Err(ToolshedError::ChangelogParse(_))
    ));
}
