//! Section-level diff: match sections of two segmentations by title.
//!
//! Sections are keyed by their trimmed title; titles are never fuzzy-matched.
//! Keys present only in the original are `Removed`, keys present only in the
//! modified document are `Added`, and keys present in both are `Retained`
//! with a size delta. The preamble is compared separately and never appears
//! here.
//!
//! Entries are ordered removed, then added, then retained. Removed and
//! retained entries follow original document order; added entries follow
//! modified document order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use docdelta_types::{DiffConfig, DuplicateTitlePolicy, Section};

use crate::similarity::text_similarity;

/// Classification of a section across the two documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Retained,
    Added,
    Removed,
}

/// One matched, added, or removed section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDiffEntry {
    /// Trimmed section title.
    pub title: String,
    /// Ordinal of this title among same-titled sections (always 0 under
    /// [`DuplicateTitlePolicy::LastWins`]).
    pub occurrence: usize,
    pub status: SectionStatus,
    /// Present iff retained or removed.
    pub original_size_metric: Option<usize>,
    /// Present iff retained or added.
    pub modified_size_metric: Option<usize>,
    /// `modified - original`, present iff retained.
    pub delta: Option<i64>,
    /// Character similarity of the two bodies, for retained sections when
    /// section similarity is enabled.
    pub content_similarity: Option<f64>,
}

impl SectionDiffEntry {
    fn removed(key: SectionKey<'_>, section: &Section) -> Self {
        Self {
            title: key.title.to_string(),
            occurrence: key.occurrence,
            status: SectionStatus::Removed,
            original_size_metric: Some(section.size_metric()),
            modified_size_metric: None,
            delta: None,
            content_similarity: None,
        }
    }

    fn added(key: SectionKey<'_>, section: &Section) -> Self {
        Self {
            title: key.title.to_string(),
            occurrence: key.occurrence,
            status: SectionStatus::Added,
            original_size_metric: None,
            modified_size_metric: Some(section.size_metric()),
            delta: None,
            content_similarity: None,
        }
    }

    fn retained(
        key: SectionKey<'_>,
        original: &Section,
        modified: &Section,
        content_similarity: Option<f64>,
    ) -> Self {
        let (old_size, new_size) = (original.size_metric(), modified.size_metric());
        Self {
            title: key.title.to_string(),
            occurrence: key.occurrence,
            status: SectionStatus::Retained,
            original_size_metric: Some(old_size),
            modified_size_metric: Some(new_size),
            delta: Some(new_size as i64 - old_size as i64),
            content_similarity,
        }
    }
}

/// The result of comparing two segmentations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDiff {
    /// Removed, then added, then retained entries.
    pub entries: Vec<SectionDiffEntry>,
}

impl SectionDiff {
    /// Returns `true` if neither document has any headed section.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries with the given status, in report order.
    pub fn with_status(&self, status: SectionStatus) -> impl Iterator<Item = &SectionDiffEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }

    /// Number of retained sections.
    pub fn retained(&self) -> usize {
        self.with_status(SectionStatus::Retained).count()
    }

    /// Number of added sections.
    pub fn additions(&self) -> usize {
        self.with_status(SectionStatus::Added).count()
    }

    /// Number of removed sections.
    pub fn removals(&self) -> usize {
        self.with_status(SectionStatus::Removed).count()
    }

    /// Retained sections whose size metric changed.
    pub fn resized(&self) -> impl Iterator<Item = &SectionDiffEntry> {
        self.with_status(SectionStatus::Retained)
            .filter(|e| e.delta.is_some_and(|d| d != 0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SectionKey<'s> {
    title: &'s str,
    occurrence: usize,
}

/// Key every headed section of one document, in document order.
fn keyed_sections(
    sections: &[Section],
    policy: DuplicateTitlePolicy,
) -> Vec<(SectionKey<'_>, &Section)> {
    let headed: Vec<&Section> = sections.iter().filter(|s| !s.is_preamble()).collect();

    match policy {
        DuplicateTitlePolicy::Ordinal => {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            headed
                .into_iter()
                .map(|s| {
                    let count = seen.entry(s.title.as_str()).or_insert(0);
                    let key = SectionKey {
                        title: s.title.as_str(),
                        occurrence: *count,
                    };
                    *count += 1;
                    (key, s)
                })
                .collect()
        }
        DuplicateTitlePolicy::LastWins => {
            let last: HashMap<&str, usize> = headed
                .iter()
                .enumerate()
                .map(|(i, s)| (s.title.as_str(), i))
                .collect();
            headed
                .into_iter()
                .enumerate()
                .filter(|(i, s)| last.get(s.title.as_str()) == Some(i))
                .map(|(_, s)| {
                    let key = SectionKey {
                        title: s.title.as_str(),
                        occurrence: 0,
                    };
                    (key, s)
                })
                .collect()
        }
    }
}

/// Compare two segmentations section by section.
///
/// Uses the duplicate-title policy of `config` and, when
/// `config.section_similarity` is set, scores each retained pair's content.
pub fn diff_sections(original: &[Section], modified: &[Section], config: &DiffConfig) -> SectionDiff {
    let old_keyed = keyed_sections(original, config.duplicate_titles);
    let new_keyed = keyed_sections(modified, config.duplicate_titles);

    let old_map: HashMap<SectionKey<'_>, &Section> = old_keyed.iter().copied().collect();
    let new_map: HashMap<SectionKey<'_>, &Section> = new_keyed.iter().copied().collect();

    let mut entries = Vec::with_capacity(old_keyed.len() + new_keyed.len());

    for &(key, section) in &old_keyed {
        if !new_map.contains_key(&key) {
            entries.push(SectionDiffEntry::removed(key, section));
        }
    }

    for &(key, section) in &new_keyed {
        if !old_map.contains_key(&key) {
            entries.push(SectionDiffEntry::added(key, section));
        }
    }

    for &(key, old_section) in &old_keyed {
        if let Some(new_section) = new_map.get(&key) {
            let content = config.section_similarity.then(|| {
                text_similarity(
                    &old_section.body_text(),
                    &new_section.body_text(),
                    config.autojunk,
                )
            });
            entries.push(SectionDiffEntry::retained(key, old_section, new_section, content));
        }
    }

    let diff = SectionDiff { entries };
    debug!(
        removed = diff.removals(),
        added = diff.additions(),
        retained = diff.retained(),
        "section diff complete"
    );
    diff
}
