use chrono::{DateTime, Utc};

use crate::error::{Result, ToolshedError};

use super::{COMMIT_SEPARATOR, Commit};

/// Parse the output of `git log --format=LOG_FORMAT`, newest commit first.
///
/// # Errors
/// Returns `ChangelogParse` if a field line is missing its `:` separator or
/// names the wrong field, or if a date is not RFC 3339.
pub fn parse_git_log(log: &str) -> Result<Vec<Commit>> {
    log.split(COMMIT_SEPARATOR)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_commit)
        .collect()
}

fn parse_commit(chunk: &str) -> Result<Commit> {
    let mut rest = chunk.trim_start_matches(['\r', '\n']);

    let hash = take_field(&mut rest, "hash")?.to_string();
    let author = take_field(&mut rest, "author")?.to_string();
    let date = parse_date(take_field(&mut rest, "date")?)?;
    let tag = parse_tag(take_field(&mut rest, "ref")?);
    let title = take_field(&mut rest, "title")?.to_string();
    let message = parse_message(rest)?;

    Ok(Commit {
        hash,
        author,
        date,
        title,
        message,
        tag,
    })
}

/// Split `name: value` off the front of `rest` and return the trimmed value.
fn take_field<'a>(rest: &mut &'a str, name: &str) -> Result<&'a str> {
    let (line, tail) = rest.split_once('\n').unwrap_or((rest, ""));
    let value = field_value(line, name)?;
    *rest = tail;
    Ok(value)
}

fn field_value<'a>(line: &'a str, name: &str) -> Result<&'a str> {
    let (key, value) = line.split_once(':').ok_or_else(|| {
        ToolshedError::ChangelogParse(format!(
            "no separator found in {name} line: {:?}",
            line.trim_end()
        ))
    })?;
    if key.trim() != name {
        return Err(ToolshedError::ChangelogParse(format!(
            "expected field `{name}`, found `{}`",
            key.trim()
        )));
    }
    Ok(value.trim())
}

fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| ToolshedError::ChangelogParse(format!("invalid commit date {value:?}: {e}")))
}

/// The `tag: X` entry of a ref decoration such as `HEAD -> master, tag: v1`.
fn parse_tag(refs: &str) -> Option<String> {
    let (_, after) = refs.split_once("tag: ")?;
    let tag = after.split(',').next().unwrap_or(after).trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Everything after `message:`, one line at a time, trimmed and joined.
fn parse_message(rest: &str) -> Result<String> {
    let (key, body) = rest.split_once(':').ok_or_else(|| {
        ToolshedError::ChangelogParse("no separator found in message line".to_string())
    })?;
    if key.trim() != "message" {
        return Err(ToolshedError::ChangelogParse(format!(
            "expected field `message`, found `{}`",
            key.trim()
        )));
    }

    let joined = body.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    Ok(joined.trim().to_string())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
