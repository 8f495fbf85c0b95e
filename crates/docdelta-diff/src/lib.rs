//! Structural diff engine for docdelta.
//!
//! Compares an original and a modified revision of a long structured text
//! document, producing a [`DiffReport`] with size drift, similarity, section
//! changes, and the first diverging lines.
//!
//! # Key Types
//!
//! - [`SequenceMatcher`] / [`similarity`] -- Longest-matching-block similarity ratio
//! - [`SectionDiff`] / [`SectionDiffEntry`] -- Section-level diff (added/removed/retained)
//! - [`LineDiff`] / [`DiffHunk`] / [`DiffLine`] -- Line-level change summary
//! - [`KeywordDelta`] -- Keyword occurrence deltas
//! - [`DiffReport`] -- The assembled comparison result

pub mod keywords;
pub mod line_diff;
pub mod report;
pub mod section_diff;
pub mod similarity;

pub use docdelta_types::{DiffError, DiffResult};
pub use keywords::{track_keywords, KeywordDelta, PresenceChange};
pub use line_diff::{diff_lines, DiffHunk, DiffLine, LineDiff};
pub use report::{
    assemble, compare, percent_change, scan_divergence, DiffReport, DivergenceScan,
    DocumentStats, LineDivergence, PercentChange, PreambleDelta, SectionSummary,
};
pub use section_diff::{diff_sections, SectionDiff, SectionDiffEntry, SectionStatus};
pub use similarity::{similarity, text_similarity, Match, SequenceMatcher};
