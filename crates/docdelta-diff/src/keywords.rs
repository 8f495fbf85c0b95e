//! Keyword occurrence tracking.
//!
//! Counts non-overlapping occurrences of each tracked keyword in both texts.
//! This is a coarse content signal reported next to the structural diff; it
//! takes no part in section matching.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A keyword that appears in only one of the two documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceChange {
    /// Absent from the original, present in the modified document.
    Added,
    /// Present in the original, absent from the modified document.
    Removed,
}

/// Occurrence counts of one keyword in both documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDelta {
    pub keyword: String,
    pub original_count: usize,
    pub modified_count: usize,
    /// `modified_count - original_count`.
    pub delta: i64,
}

impl KeywordDelta {
    fn count(keyword: &str, original: &str, modified: &str) -> Self {
        let original_count = original.matches(keyword).count();
        let modified_count = modified.matches(keyword).count();
        Self {
            keyword: keyword.to_string(),
            original_count,
            modified_count,
            delta: modified_count as i64 - original_count as i64,
        }
    }

    /// Returns `true` if the counts differ.
    pub fn is_changed(&self) -> bool {
        self.delta != 0
    }

    /// Whether the keyword appeared or disappeared entirely.
    pub fn presence(&self) -> Option<PresenceChange> {
        match (self.original_count > 0, self.modified_count > 0) {
            (false, true) => Some(PresenceChange::Added),
            (true, false) => Some(PresenceChange::Removed),
            _ => None,
        }
    }
}

/// Count every keyword in both texts. Repeated keywords are reported once,
/// in first-listed order. Empty keywords are skipped.
pub fn track_keywords<S: AsRef<str>>(original: &str, modified: &str, keywords: &[S]) -> Vec<KeywordDelta> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|k| !k.is_empty() && seen.insert(*k))
        .map(|k| KeywordDelta::count(k, original, modified))
        .collect()
}
