//! Line-level change summary between two document texts.
//!
//! Uses the `similar` crate (Myers diff algorithm) to group changed lines
//! into hunks with surrounding context. This complements the character
//! similarity ratio with counts of inserted and deleted lines.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Changed regions between two texts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub hunks: Vec<DiffHunk>,
}

impl LineDiff {
    /// Returns `true` if the two texts are identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of lines added across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of lines removed across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }
}

/// A contiguous region of changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    /// First original line in this hunk (1-based).
    pub old_start: usize,
    pub old_count: usize,
    /// First modified line in this hunk (1-based).
    pub new_start: usize,
    pub new_count: usize,
    pub lines: Vec<DiffLine>,
}

/// A single line in a hunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "text", rename_all = "snake_case")]
pub enum DiffLine {
    Context(String),
    Added(String),
    Removed(String),
}

/// Diff two texts line by line, keeping `context` unchanged lines around
/// each change.
pub fn diff_lines(original: &str, modified: &str, context: usize) -> LineDiff {
    if original == modified {
        return LineDiff::default();
    }

    let text_diff = TextDiff::from_lines(original, modified);
    let mut hunks = Vec::new();

    for group in text_diff.grouped_ops(context) {
        let (old_start, new_start) = match group.first() {
            Some(op) => (op.old_range().start + 1, op.new_range().start + 1),
            None => continue,
        };

        let mut lines = Vec::new();
        let (mut old_count, mut new_count) = (0usize, 0usize);

        for op in &group {
            for change in text_diff.iter_changes(op) {
                let text = change.value().trim_end_matches(['\r', '\n']).to_string();
                match change.tag() {
                    ChangeTag::Equal => {
                        lines.push(DiffLine::Context(text));
                        old_count += 1;
                        new_count += 1;
                    }
                    ChangeTag::Delete => {
                        lines.push(DiffLine::Removed(text));
                        old_count += 1;
                    }
                    ChangeTag::Insert => {
                        lines.push(DiffLine::Added(text));
                        new_count += 1;
                    }
                }
            }
        }

        hunks.push(DiffHunk {
            old_start,
            old_count,
            new_start,
            new_count,
            lines,
        });
    }

    LineDiff { hunks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_no_hunks() {
        let text = "第一章 引言\n内容A\n";
        let diff = diff_lines(text, text, 3);
        assert!(diff.is_empty());
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.deletions(), 0);
    }

    #[test]
    fn appended_chapter_counts_added_lines() {
        let old = "第一章 引言\nx\n";
        let new = "第一章 引言\nx\n第二章 结论\ny\n";
        let diff = diff_lines(old, new, 3);
        assert_eq!(diff.additions(), 2);
        assert_eq!(diff.deletions(), 0);
    }

    #[test]
    fn rewritten_line_is_removed_and_added() {
        let diff = diff_lines("a\nb\nc\n", "a\nB\nc\n", 1);
        assert_eq!(diff.hunks.len(), 1);
        let hunk = &diff.hunks[0];
        assert_eq!(hunk.old_start, 1);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(
            hunk.lines,
            vec![
                DiffLine::Context("a".into()),
                DiffLine::Removed("b".into()),
                DiffLine::Added("B".into()),
                DiffLine::Context("c".into()),
            ]
        );
        assert_eq!((hunk.old_count, hunk.new_count), (3, 3));
    }

    #[test]
    fn distant_changes_form_separate_hunks() {
        let old: String = (0..30).map(|i| format!("line{i}\n")).collect();
        let new = old.replace("line2\n", "changed\n").replace("line27\n", "changed\n");
        let diff = diff_lines(&old, &new, 3);
        assert_eq!(diff.hunks.len(), 2);
        assert!(diff.hunks[1].old_start > diff.hunks[0].old_start);
    }

    #[test]
    fn empty_to_content() {
        let diff = diff_lines("", "新内容\n", 3);
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.deletions(), 0);
    }

    #[test]
    fn crlf_is_stripped_from_line_text() {
        let diff = diff_lines("a\r\n", "b\r\n", 0);
        assert_eq!(diff.hunks[0].lines[0], DiffLine::Removed("a".into()));
    }
}
