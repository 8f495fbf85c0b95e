//! Header detection.
//!
//! Segmentation asks a [`LineClassifier`] whether each line opens a new
//! section. The default [`MarkerClassifier`] requires two marker tokens and a
//! short line, so that body sentences merely mentioning a chapter (which tend
//! to be long) are not taken as headers.

use docdelta_types::DiffConfig;

/// Decides whether a line introduces a new section.
pub trait LineClassifier {
    /// Returns `true` if `line` is a section header.
    fn is_header(&self, line: &str) -> bool;
}

impl<F> LineClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_header(&self, line: &str) -> bool {
        self(line)
    }
}

/// Dual-marker, length-bounded header heuristic.
///
/// A line is a header when it contains both markers (in any order) and its
/// trimmed length in characters is strictly below `max_length`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerClassifier {
    primary: String,
    secondary: String,
    max_length: usize,
}

impl MarkerClassifier {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>, max_length: usize) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            max_length,
        }
    }

    /// Build the classifier described by a comparison configuration.
    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(
            config.header_markers.primary.clone(),
            config.header_markers.secondary.clone(),
            config.header_max_length,
        )
    }
}

impl Default for MarkerClassifier {
    fn default() -> Self {
        Self::from_config(&DiffConfig::default())
    }
}

impl LineClassifier for MarkerClassifier {
    fn is_header(&self, line: &str) -> bool {
        line.contains(self.primary.as_str())
            && line.contains(self.secondary.as_str())
            && line.trim().chars().count() < self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_with_both_markers_is_header() {
        let c = MarkerClassifier::default();
        assert!(c.is_header("第一章 引言"));
        assert!(c.is_header("  第三章 实验结果与讨论  "));
    }

    #[test]
    fn marker_order_does_not_matter() {
        let c = MarkerClassifier::default();
        assert!(c.is_header("章节附录 第A部分"));
    }

    #[test]
    fn single_marker_is_not_header() {
        let c = MarkerClassifier::default();
        assert!(!c.is_header("第一节 背景"));
        assert!(!c.is_header("本章小结"));
    }

    #[test]
    fn length_exactly_at_threshold_is_not_header() {
        let c = MarkerClassifier::default();
        let line = format!("第一章{}", "x".repeat(97));
        assert_eq!(line.chars().count(), 100);
        assert!(!c.is_header(&line));

        let shorter = format!("第一章{}", "x".repeat(96));
        assert!(c.is_header(&shorter));
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let c = MarkerClassifier::default();
        let line = format!("    第一章{}    ", "x".repeat(96));
        assert!(c.is_header(&line));
    }

    #[test]
    fn long_sentence_mentioning_a_chapter_is_body() {
        let c = MarkerClassifier::default();
        let sentence = format!("如第二章所述，{}", "本研究的样品制备方法".repeat(12));
        assert!(!c.is_header(&sentence));
    }

    #[test]
    fn custom_markers_from_config() {
        let mut config = DiffConfig::default();
        config.header_markers.primary = "Chapter".into();
        config.header_markers.secondary = ":".into();
        config.header_max_length = 40;
        let c = MarkerClassifier::from_config(&config);
        assert!(c.is_header("Chapter 2: Methods"));
        assert!(!c.is_header("Chapter 2 Methods"));
    }

    #[test]
    fn closures_are_classifiers() {
        let numbered = |line: &str| line.starts_with("# ");
        assert!(numbered.is_header("# Intro"));
        assert!(!numbered.is_header("Intro"));
    }
}
