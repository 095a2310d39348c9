use crate::language::CommentSyntax;

/// One line of comment text and where it sits in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// 1-based.
    pub line: usize,
    /// Text between the delimiters, untrimmed.
    pub text: String,
}

/// Consecutive comment lines read as one comment: a block comment, or a run
/// of single-line comments each on a line of its own.
pub type CommentGroup = Vec<CommentLine>;

enum Marker<'a> {
    Single(&'a str),
    Block(&'a str, &'a str),
}

/// Every comment in `source`, in file order.
///
/// String literals are not recognized, so delimiters inside them start
/// comments too. An unterminated block comment runs to the end of the file.
#[must_use]
pub fn extract_comments(source: &str, syntax: &CommentSyntax) -> Vec<CommentGroup> {
    let mut groups: Vec<CommentGroup> = Vec::new();
    // End delimiter and lines so far of the block comment being read.
    let mut open_block: Option<(&str, CommentGroup)> = None;
    // Line of the last own-line single-line comment, to join runs.
    let mut last_single: Option<usize> = None;

    for (idx, line) in source.lines().enumerate() {
        let number = idx + 1;
        let mut rest = line;
        let mut code_before = false;
        let mut single_on_line = false;

        loop {
            if let Some((end, lines)) = open_block.as_mut() {
                let text = if lines.is_empty() {
                    rest
                } else {
                    strip_leading_star(rest)
                };
                if let Some(pos) = text.find(*end) {
                    lines.push(CommentLine {
                        line: number,
                        text: text[..pos].to_string(),
                    });
                    let consumed = rest.len() - text.len() + pos + end.len();
                    rest = &rest[consumed..];
                    if let Some((_, finished)) = open_block.take() {
                        groups.push(finished);
                    }
                    code_before = true;
                    continue;
                }
                lines.push(CommentLine {
                    line: number,
                    text: text.to_string(),
                });
                break;
            }

            match first_marker(rest, syntax) {
                None => break,
                Some((pos, Marker::Single(prefix))) => {
                    let own_line = !code_before && rest[..pos].trim().is_empty();
                    let comment = CommentLine {
                        line: number,
                        text: rest[pos + prefix.len()..].to_string(),
                    };
                    match groups.last_mut() {
                        Some(group) if own_line && last_single == Some(number - 1) => {
                            group.push(comment);
                        }
                        _ => groups.push(vec![comment]),
                    }
                    if own_line {
                        single_on_line = true;
                    }
                    break;
                }
                Some((pos, Marker::Block(start, end))) => {
                    open_block = Some((end, Vec::new()));
                    rest = &rest[pos + start.len()..];
                }
            }
        }

        last_single = single_on_line.then_some(number);
    }

    if let Some((_, unterminated)) = open_block {
        groups.push(unterminated);
    }
    groups
}

/// Earliest comment delimiter in `text`; on a tie the longer one wins.
fn first_marker<'a>(text: &str, syntax: &'a CommentSyntax) -> Option<(usize, Marker<'a>)> {
    let singles = syntax
        .single_line
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .filter_map(|prefix| {
            text.find(prefix.as_str())
                .map(|pos| (pos, prefix.len(), Marker::Single(prefix)))
        });
    let blocks = syntax
        .multi_line
        .iter()
        .filter(|(start, end)| !start.is_empty() && !end.is_empty())
        .filter_map(|(start, end)| {
            text.find(start.as_str())
                .map(|pos| (pos, start.len(), Marker::Block(start, end)))
        });

    singles
        .chain(blocks)
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        .map(|(pos, _, marker)| (pos, marker))
}

/// Continuation lines of block comments often start with ` * `.
fn strip_leading_star(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix('*').map_or(line, |after| {
        if after.starts_with('/') {
            line
        } else {
            after
        }
    })
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
