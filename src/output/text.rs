use std::fmt::Write;
use std::path::Path;

use crate::checker::LongLine;
use crate::counter::PathCount;
use crate::error::Result;

use super::OutputFormatter;

/// Plain sentences, one per line.
pub struct TextFormatter;

impl TextFormatter {
    fn display_name(path: &Path) -> String {
        if path == Path::new(".") {
            "Current directory".to_string()
        } else {
            path.display().to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_long_lines(&self, lines: &[LongLine]) -> Result<String> {
        let mut output = String::new();
        for line in lines {
            writeln!(
                output,
                "{} line {} is {} characters long.",
                line.file.display(),
                line.line_number,
                line.length
            )
            .ok();
        }
        Ok(output)
    }

    fn format_line_counts(&self, counts: &[PathCount], complete: bool) -> Result<String> {
        let mut output = String::new();
        for count in counts {
            writeln!(
                output,
                "{} contains {} lines of code.",
                Self::display_name(&count.path),
                count.lines
            )
            .ok();
        }
        if complete && counts.len() > 1 {
            let total: usize = counts.iter().map(|c| c.lines).sum();
            writeln!(output, "Total number of lines: {total}.").ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
