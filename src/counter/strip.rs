use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::language::CommentSyntax;

// A newline, any whitespace (including more newlines), then a newline.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\n\s*\n").expect("Invalid regex"));

/// Removes comments of one language from raw source bytes and counts the
/// lines of code that remain.
///
/// Content is treated as bytes; invalid UTF-8 never fails a count.
#[derive(Debug, Clone)]
pub struct CommentStripper {
    single_line: Vec<Regex>,
    multi_line: Vec<Regex>,
}

impl CommentStripper {
    /// Compile the comment patterns of `syntax`.
    ///
    /// # Errors
    /// Returns an error if a delimiter produces an invalid pattern.
    pub fn new(syntax: &CommentSyntax) -> Result<Self, regex::Error> {
        let single_line = syntax
            .single_line
            .iter()
            .map(|prefix| Regex::new(&format!(r"(?-u){}.*\n?", regex::escape(prefix))))
            .collect::<Result<_, _>>()?;
        let multi_line = syntax
            .multi_line
            .iter()
            .map(|(start, end)| {
                Regex::new(&format!(
                    r"(?s-u){}.*?{}",
                    regex::escape(start),
                    regex::escape(end)
                ))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            single_line,
            multi_line,
        })
    }

    /// Source with every comment removed.
    ///
    /// Single-line comments go first, each replaced by a newline so the line
    /// structure survives. Block comments are then removed non-greedily.
    #[must_use]
    pub fn strip(&self, source: &[u8]) -> Vec<u8> {
        let mut text = source.to_vec();
        for re in &self.single_line {
            text = re.replace_all(&text, &b"\n"[..]).into_owned();
        }
        for re in &self.multi_line {
            text = re.replace_all(&text, &b""[..]).into_owned();
        }
        text
    }

    /// Non-blank, non-comment lines in `source`.
    #[must_use]
    pub fn count_code_lines(&self, source: &[u8]) -> usize {
        let stripped = self.strip(source);
        let collapsed = BLANK_RUN.replace_all(&stripped, &b"\n"[..]);
        let code = trim_padding(&collapsed);

        if code.is_empty() {
            0
        } else {
            code.iter().filter(|&&b| b == b'\n').count() + 1
        }
    }
}

/// Trim NUL bytes and ASCII whitespace from both ends.
fn trim_padding(bytes: &[u8]) -> &[u8] {
    let is_padding = |b: &u8| *b == 0 || b.is_ascii_whitespace();
    let start = bytes
        .iter()
        .position(|b| !is_padding(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !is_padding(b))
        .map_or(start, |idx| idx + 1);
    &bytes[start..end]
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
