//! Section records produced by segmentation.
//!
//! A section is a contiguous run of document lines opened by a header line
//! (or, for the preamble, by the start of the document). Its size metric is
//! always derived from the lines it holds.

use serde::{Deserialize, Serialize};

/// How a section was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Opened by a detected header line.
    Headed,
    /// Lines preceding the first header. Carries an empty title.
    Preamble,
}

/// A contiguous, header-delimited chunk of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Header text trimmed of surrounding whitespace; empty for the preamble.
    pub title: String,
    /// Whether this section was opened by a header.
    pub kind: SectionKind,
    /// Index of the first line (the header for headed sections).
    pub start_line: usize,
    /// Index of the last line, inclusive.
    pub end_line: usize,
    /// Every line of the section, header included.
    pub body_lines: Vec<String>,
}

impl Section {
    /// Build a section whose first body line, at `start_line`, is its header.
    pub fn headed(start_line: usize, body_lines: Vec<String>) -> Self {
        let title = body_lines
            .first()
            .map(|header| header.trim().to_string())
            .unwrap_or_default();
        Self::build(title, SectionKind::Headed, start_line, body_lines)
    }

    /// Build the preamble section covering lines before the first header.
    pub fn preamble(body_lines: Vec<String>) -> Self {
        Self::build(String::new(), SectionKind::Preamble, 0, body_lines)
    }

    fn build(title: String, kind: SectionKind, start_line: usize, body_lines: Vec<String>) -> Self {
        debug_assert!(!body_lines.is_empty(), "a section always holds at least one line");
        let end_line = start_line + body_lines.len().max(1) - 1;
        Self {
            title,
            kind,
            start_line,
            end_line,
            body_lines,
        }
    }

    /// Whether this is the untitled preamble.
    pub fn is_preamble(&self) -> bool {
        self.kind == SectionKind::Preamble
    }

    /// Number of lines covered, header included.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Whitespace-delimited token count over all non-blank body lines.
    pub fn size_metric(&self) -> usize {
        self.body_lines.iter().map(|line| token_count(line)).sum()
    }

    /// The section's lines joined with `'\n'`.
    pub fn body_text(&self) -> String {
        self.body_lines.join("\n")
    }
}

/// Number of whitespace-delimited tokens in `line`; zero for blank lines.
pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}
