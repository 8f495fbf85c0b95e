//! Report assembly: whole-document statistics plus the section diff.
//!
//! [`assemble`] combines two texts and their segmentations into a
//! [`DiffReport`]. [`compare`] runs the full pipeline from raw text.
//! Degenerate inputs never fail: an empty original yields
//! [`PercentChange::DivisionUndefined`], and documents without headers set
//! [`DiffReport::no_sections_detected`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use docdelta_segment::{split_lines, Segmenter};
use docdelta_types::{DiffConfig, DiffResult, Section, SectionKind};

use crate::keywords::{track_keywords, KeywordDelta};
use crate::line_diff::{diff_lines, LineDiff};
use crate::section_diff::{diff_sections, SectionDiff};
use crate::similarity::text_similarity;

/// Relative change in length, against the original.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PercentChange {
    /// Change as a percentage of the original length.
    Percent(f64),
    /// The original is empty, so no relative change exists.
    DivisionUndefined,
}

impl PercentChange {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::DivisionUndefined => None,
        }
    }
}

/// Percentage change from `original_len` to `modified_len`.
pub fn percent_change(original_len: usize, modified_len: usize) -> PercentChange {
    if original_len == 0 {
        return PercentChange::DivisionUndefined;
    }
    let delta = modified_len as f64 - original_len as f64;
    PercentChange::Percent(delta / original_len as f64 * 100.0)
}

/// Outline entry for one section of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub title: String,
    pub kind: SectionKind,
    pub start_line: usize,
    pub end_line: usize,
    pub size_metric: usize,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            kind: section.kind,
            start_line: section.start_line,
            end_line: section.end_line,
            size_metric: section.size_metric(),
        }
    }
}

/// Size and structure of one document version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Length in Unicode scalar values.
    pub chars: usize,
    pub lines: usize,
    /// Number of detected header lines.
    pub headers: usize,
    /// Every section in document order, preamble included.
    pub outline: Vec<SectionSummary>,
}

impl DocumentStats {
    fn measure(text: &str, line_count: usize, sections: &[Section]) -> Self {
        Self {
            chars: text.chars().count(),
            lines: line_count,
            headers: sections.iter().filter(|s| !s.is_preamble()).count(),
            outline: sections.iter().map(SectionSummary::from).collect(),
        }
    }
}

/// Size comparison of the two preambles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreambleDelta {
    pub original_size_metric: Option<usize>,
    pub modified_size_metric: Option<usize>,
}

impl PreambleDelta {
    fn between(original: &[Section], modified: &[Section]) -> Option<Self> {
        let size = |sections: &[Section]| {
            sections
                .iter()
                .find(|s| s.is_preamble())
                .map(Section::size_metric)
        };
        let delta = Self {
            original_size_metric: size(original),
            modified_size_metric: size(modified),
        };
        (delta.original_size_metric.is_some() || delta.modified_size_metric.is_some())
            .then_some(delta)
    }

    /// Size change, counting a missing preamble as empty.
    pub fn delta(&self) -> i64 {
        self.modified_size_metric.unwrap_or(0) as i64 - self.original_size_metric.unwrap_or(0) as i64
    }
}

/// A line that differs (after trimming) between the two versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDivergence {
    /// 0-based line index.
    pub index: usize,
    pub original: String,
    pub modified: String,
}

/// Pointwise comparison of the leading lines of both documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceScan {
    /// Number of lines actually compared.
    pub window: usize,
    /// Differing lines in index order.
    pub differences: Vec<LineDivergence>,
}

impl DivergenceScan {
    /// The first differing line, or `None` if the window holds no divergence.
    pub fn first(&self) -> Option<&LineDivergence> {
        self.differences.first()
    }
}

/// Compare trimmed lines up to `min(window, len(original), len(modified))`.
pub fn scan_divergence<S: AsRef<str>>(original: &[S], modified: &[S], window: usize) -> DivergenceScan {
    let window = window.min(original.len()).min(modified.len());
    let differences = original
        .iter()
        .map(AsRef::<str>::as_ref)
        .zip(modified.iter().map(AsRef::<str>::as_ref))
        .take(window)
        .enumerate()
        .filter(|(_, (a, b))| a.trim() != b.trim())
        .map(|(index, (a, b))| LineDivergence {
            index,
            original: a.to_string(),
            modified: b.to_string(),
        })
        .collect();
    DivergenceScan { window, differences }
}

/// The full result of comparing two document versions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub original: DocumentStats,
    pub modified: DocumentStats,
    /// `modified.chars - original.chars`.
    pub char_delta: i64,
    /// `modified.lines - original.lines`.
    pub line_delta: i64,
    pub length_change: PercentChange,
    /// Character-level similarity ratio of the two texts.
    pub similarity: f64,
    pub sections: SectionDiff,
    /// Set when either document has no detected header.
    pub no_sections_detected: bool,
    pub preamble: Option<PreambleDelta>,
    pub divergence: DivergenceScan,
    pub line_changes: LineDiff,
    pub keywords: Vec<KeywordDelta>,
}

impl DiffReport {
    /// The first line that differs inside the divergence window.
    pub fn first_divergence(&self) -> Option<&LineDivergence> {
        self.divergence.first()
    }

    /// Tracked keywords whose occurrence counts changed.
    pub fn changed_keywords(&self) -> impl Iterator<Item = &KeywordDelta> {
        self.keywords.iter().filter(|k| k.is_changed())
    }
}

/// Assemble a report from two texts and their segmentations.
pub fn assemble(
    original_text: &str,
    modified_text: &str,
    original_sections: &[Section],
    modified_sections: &[Section],
    config: &DiffConfig,
) -> DiffReport {
    let original_lines = split_lines(original_text);
    let modified_lines = split_lines(modified_text);

    let original = DocumentStats::measure(original_text, original_lines.len(), original_sections);
    let modified = DocumentStats::measure(modified_text, modified_lines.len(), modified_sections);

    let char_delta = modified.chars as i64 - original.chars as i64;
    let line_delta = modified.lines as i64 - original.lines as i64;
    let length_change = percent_change(original.chars, modified.chars);
    let similarity = text_similarity(original_text, modified_text, config.autojunk);

    let sections = diff_sections(original_sections, modified_sections, config);
    let no_sections_detected = original.headers == 0 || modified.headers == 0;

    let report = DiffReport {
        char_delta,
        line_delta,
        length_change,
        similarity,
        sections,
        no_sections_detected,
        preamble: PreambleDelta::between(original_sections, modified_sections),
        divergence: scan_divergence(&original_lines, &modified_lines, config.divergence_window),
        line_changes: diff_lines(original_text, modified_text, config.line_context),
        keywords: track_keywords(original_text, modified_text, &config.keyword_tracking_list),
        original,
        modified,
    };

    debug!(
        char_delta,
        similarity,
        sections = report.sections.len(),
        diverges_at = ?report.first_divergence().map(|d| d.index),
        "assembled diff report"
    );
    report
}

/// Segment both texts and assemble their report.
///
/// Fails only if `config` is invalid.
pub fn compare(original_text: &str, modified_text: &str, config: &DiffConfig) -> DiffResult<DiffReport> {
    config.validate()?;
    let segmenter = Segmenter::from_config(config);
    let original_sections = segmenter.segment(&split_lines(original_text));
    let modified_sections = segmenter.segment(&split_lines(modified_text));
    Ok(assemble(
        original_text,
        modified_text,
        &original_sections,
        &modified_sections,
        config,
    ))
}
