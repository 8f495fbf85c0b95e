use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Marker tokens that must both appear in a header line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMarkers {
    pub primary: String,
    pub secondary: String,
}

impl Default for HeaderMarkers {
    fn default() -> Self {
        Self {
            primary: "第".into(),
            secondary: "章".into(),
        }
    }
}

/// How sections sharing a title are paired across the two documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateTitlePolicy {
    /// Key by `(title, occurrence)`: the n-th section with a title matches the
    /// n-th section with the same title on the other side.
    #[default]
    Ordinal,
    /// Key by title alone; the last occurrence on each side wins.
    LastWins,
}

/// Configuration for a document comparison run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Tokens a line must contain to be considered a section header.
    pub header_markers: HeaderMarkers,
    /// Exclusive upper bound on a header's trimmed length, in characters.
    pub header_max_length: usize,
    /// Number of leading lines scanned for pointwise differences.
    pub divergence_window: usize,
    /// Keywords whose occurrence counts are compared between versions.
    pub keyword_tracking_list: Vec<String>,
    /// Keep lines before the first header as an untitled preamble section.
    pub keep_preamble: bool,
    /// Pairing rule for repeated section titles.
    pub duplicate_titles: DuplicateTitlePolicy,
    /// Score character similarity for every retained section pair.
    pub section_similarity: bool,
    /// Skip very frequent elements as match seeds on long sequences.
    pub autojunk: bool,
    /// Context lines around each line-diff hunk.
    pub line_context: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            header_markers: HeaderMarkers::default(),
            header_max_length: 100,
            divergence_window: 20,
            keyword_tracking_list: Vec::new(),
            keep_preamble: true,
            duplicate_titles: DuplicateTitlePolicy::default(),
            section_similarity: false,
            autojunk: true,
            line_context: 3,
        }
    }
}

impl DiffConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> DiffResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| DiffError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no comparison can run with.
    pub fn validate(&self) -> DiffResult<()> {
        if self.header_markers.primary.is_empty() || self.header_markers.secondary.is_empty() {
            return Err(DiffError::InvalidConfig(
                "header markers must be non-empty".into(),
            ));
        }
        if self.header_max_length == 0 {
            return Err(DiffError::InvalidConfig(
                "header_max_length must be positive".into(),
            ));
        }
        if self.keyword_tracking_list.iter().any(|k| k.is_empty()) {
            return Err(DiffError::InvalidConfig(
                "tracked keywords must be non-empty".into(),
            ));
        }
        Ok(())
    }
}
