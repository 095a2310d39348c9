use std::io::{self, Write};

use super::Commit;

const DATE_FORMAT: &str = "%d %b %Y %H:%M:%S UTC";

/// Write `commits` (newest first) as a Markdown changelog.
///
/// Commits before the first tag are listed under `## Master`; each tagged
/// commit opens a `## {tag}` section.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_changelog<W: Write>(commits: &[Commit], mut w: W) -> io::Result<()> {
    w.write_all(b"# Changelog\n\n")?;

    if commits.first().is_some_and(|c| c.tag.is_none()) {
        w.write_all(b"## Master\n\n")?;
    }

    for commit in commits {
        if let Some(tag) = &commit.tag {
            write!(w, "## {tag}\n\n")?;
        }
        write_commit(commit, &mut w)?;
    }
    Ok(())
}

fn write_commit<W: Write>(commit: &Commit, w: &mut W) -> io::Result<()> {
    let title = commit.title.strip_suffix('.').unwrap_or(&commit.title);
    write!(
        w,
        " - **{title}** (#{}) by *{}*, on *{}*.",
        commit.hash,
        commit.author,
        commit.date.format(DATE_FORMAT)
    )?;

    if commit.message.is_empty() {
        w.write_all(b"\n")
    } else {
        let message = commit.message.strip_suffix('.').unwrap_or(&commit.message);
        write!(w, " <br/>\n*{message}*.\n")
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
