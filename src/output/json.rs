use serde::Serialize;

use crate::checker::LongLine;
use crate::counter::PathCount;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct LongLinesOutput {
    count: usize,
    long_lines: Vec<LongLineEntry>,
}

#[derive(Serialize)]
struct LongLineEntry {
    path: String,
    line: usize,
    length: usize,
}

#[derive(Serialize)]
struct LineCountsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<usize>,
    paths: Vec<PathEntry>,
}

#[derive(Serialize)]
struct PathEntry {
    path: String,
    lines: usize,
}

fn display(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl OutputFormatter for JsonFormatter {
    fn format_long_lines(&self, lines: &[LongLine]) -> Result<String> {
        let output = LongLinesOutput {
            count: lines.len(),
            long_lines: lines
                .iter()
                .map(|l| LongLineEntry {
                    path: display(&l.file),
                    line: l.line_number,
                    length: l.length,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_line_counts(&self, counts: &[PathCount], complete: bool) -> Result<String> {
        let output = LineCountsOutput {
            total: complete.then(|| counts.iter().map(|c| c.lines).sum()),
            paths: counts
                .iter()
                .map(|c| PathEntry {
                    path: display(&c.path),
                    lines: c.lines,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
