use chrono::{DateTime, Utc};

use super::*;

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn commit(hash: &str, date: &str, title: &str, message: &str, tag: Option<&str>) -> Commit {
    Commit {
        hash: hash.to_string(),
        author: "Thomas de Zeeuw".to_string(),
        date: at(date),
        title: title.to_string(),
        message: message.to_string(),
        tag: tag.map(String::from),
    }
}

fn render(commits: &[Commit]) -> String {
    let mut buf = Vec::new();
    write_changelog(commits, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn no_commits_is_just_the_heading() {
    assert_eq!(render(&[]), "# Changelog\n\n");
}

#[test]
fn untagged_head_starts_under_master() {
    let commits = [commit(
        "7c3924c",
        "2015-02-19T20:33:13+01:00",
        "Move Gocover badges to the subdirectories",
        "",
        None,
    )];

    assert_eq!(
        render(&commits),
        "# Changelog\n\n## Master\n\n - **Move Gocover badges to the subdirectories** \
         (#7c3924c) by *Thomas de Zeeuw*, on *19 Feb 2015 19:33:13 UTC*.\n"
    );
}

#[test]
fn message_follows_a_line_break() {
    let commits = [commit(
        "b6652b0",
        "2015-04-20T00:12:13+02:00",
        "Serve: Allow first argument as directory",
        "Now you can call `serve dir` or `server -d dir`.",
        Some("v0.2"),
    )];

    assert_eq!(
        render(&commits),
        "# Changelog\n\n## v0.2\n\n - **Serve: Allow first argument as directory** (#b6652b0) \
         by *Thomas de Zeeuw*, on *19 Apr 2015 22:12:13 UTC*. <br/>\n\
         *Now you can call `serve dir` or `server -d dir`*.\n"
    );
}

#[test]
fn tagged_head_has_no_master_section() {
    let commits = [
        commit("308ae12", "2016-06-22T15:43:14+02:00", "Version 0.1", "", Some("v0.1")),
        commit(
            "3a08ae3",
            "2016-06-22T14:43:14+02:00",
            "init()",
            "A simple test commit, safe to ignore.",
            None,
        ),
    ];

    assert_eq!(
        render(&commits),
        "# Changelog\n\n## v0.1\n\n\
         \x20- **Version 0.1** (#308ae12) by *Thomas de Zeeuw*, on *22 Jun 2016 13:43:14 UTC*.\n\
         \x20- **init()** (#3a08ae3) by *Thomas de Zeeuw*, on *22 Jun 2016 12:43:14 UTC*. <br/>\n\
         *A simple test commit, safe to ignore*.\n"
    );
}

#[test]
fn later_tags_open_new_sections() {
    let commits = [
        commit("aaa1111", "2016-06-23T10:00:00Z", "Newest", "", None),
        commit("bbb2222", "2016-06-22T10:00:00Z", "Release", "", Some("v1.0")),
    ];

    let out = render(&commits);

    assert!(out.starts_with("# Changelog\n\n## Master\n\n - **Newest**"));
    assert!(out.contains("*.\n## v1.0\n\n - **Release** (#bbb2222)"));
}

#[test]
fn single_trailing_period_is_dropped_from_title() {
    let commits = [commit("ccc3333", "2016-06-22T10:00:00Z", "Fix it..", "Done..", None)];

    let out = render(&commits);

    assert!(out.contains(" - **Fix it.** (#ccc3333)"));
    assert!(out.contains("*Done.*.\n"));
}
