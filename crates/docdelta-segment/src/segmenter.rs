//! Segmentation: grouping a document's lines into sections.
//!
//! # Invariants
//!
//! - Sections are emitted in document order and never overlap.
//! - Each section starts where the previous one ended, plus one.
//! - With the preamble kept, the sections cover every input line; otherwise
//!   they cover every line from the first header onward.
//! - No section is empty: a headed section always holds its header line.

use docdelta_types::{DiffConfig, Section};
use tracing::debug;

use crate::detector::{LineClassifier, MarkerClassifier};

/// Splits line sequences into [`Section`]s using a [`LineClassifier`].
#[derive(Clone, Debug)]
pub struct Segmenter<C = MarkerClassifier> {
    classifier: C,
    keep_preamble: bool,
}

impl Segmenter<MarkerClassifier> {
    /// A segmenter using the marker heuristic and preamble setting of `config`.
    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(MarkerClassifier::from_config(config)).with_preamble(config.keep_preamble)
    }
}

impl<C: LineClassifier> Segmenter<C> {
    /// A segmenter that keeps the preamble.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            keep_preamble: true,
        }
    }

    /// Choose whether lines before the first header form a preamble section
    /// or are discarded.
    pub fn with_preamble(mut self, keep: bool) -> Self {
        self.keep_preamble = keep;
        self
    }

    /// Segment `lines` into contiguous sections in document order.
    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut preamble: Vec<String> = Vec::new();
        let mut current: Option<(usize, Vec<String>)> = None;
        let mut discarded = 0usize;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if self.classifier.is_header(line) {
                match current.take() {
                    Some((start, body)) => sections.push(Section::headed(start, body)),
                    None if !preamble.is_empty() => {
                        sections.push(Section::preamble(std::mem::take(&mut preamble)));
                    }
                    None => {}
                }
                current = Some((index, vec![line.to_string()]));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line.to_string());
            } else if self.keep_preamble {
                preamble.push(line.to_string());
            } else {
                discarded += 1;
            }
        }

        match current {
            Some((start, body)) => sections.push(Section::headed(start, body)),
            None if !preamble.is_empty() => sections.push(Section::preamble(preamble)),
            None => {}
        }

        debug!(
            lines = lines.len(),
            sections = sections.len(),
            discarded,
            "segmented document"
        );
        sections
    }
}

/// Segment `lines` with the classifier and preamble policy of `config`.
pub fn segment<S: AsRef<str>>(lines: &[S], config: &DiffConfig) -> Vec<Section> {
    Segmenter::from_config(config).segment(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdelta_types::SectionKind;
    use proptest::prelude::*;

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn headers_open_sections() {
        let lines = ["第一章 引言", "内容A", "", "第二章 方法", "内容B 内容C"];
        let sections = segment(&lines, &DiffConfig::default());

        assert_eq!(titles(&sections), vec!["第一章 引言", "第二章 方法"]);
        assert_eq!((sections[0].start_line, sections[0].end_line), (0, 2));
        assert_eq!((sections[1].start_line, sections[1].end_line), (3, 4));
        assert_eq!(sections[0].body_lines, vec!["第一章 引言", "内容A", ""]);
        assert_eq!(sections[0].size_metric(), 3);
        assert_eq!(sections[1].size_metric(), 4);
    }

    #[test]
    fn header_only_section_holds_its_header() {
        let sections = segment(&["第一章 A", "第二章 B"], &DiffConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body_lines, vec!["第一章 A"]);
        assert_eq!((sections[0].start_line, sections[0].end_line), (0, 0));
        assert_eq!((sections[1].start_line, sections[1].end_line), (1, 1));
    }

    #[test]
    fn preamble_is_kept_by_default() {
        let lines = ["封面", "摘要", "第一章 引言", "x"];
        let sections = segment(&lines, &DiffConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Preamble);
        assert_eq!((sections[0].start_line, sections[0].end_line), (0, 1));
        assert_eq!(sections[1].start_line, 2);
    }

    #[test]
    fn preamble_discarded_when_disabled() {
        let lines = ["封面", "摘要", "第一章 引言", "x"];
        let config = DiffConfig {
            keep_preamble: false,
            ..Default::default()
        };
        let sections = segment(&lines, &config);
        assert_eq!(titles(&sections), vec!["第一章 引言"]);
        assert_eq!(sections[0].start_line, 2);
    }

    #[test]
    fn document_without_headers() {
        let lines = ["just", "text"];
        let kept = segment(&lines, &DiffConfig::default());
        assert_eq!(kept.len(), 1);
        assert!(kept[0].is_preamble());
        assert_eq!(kept[0].end_line, 1);

        let dropped = Segmenter::new(MarkerClassifier::default())
            .with_preamble(false)
            .segment(&lines);
        assert!(dropped.is_empty());
    }

    #[test]
    fn empty_input_yields_no_sections() {
        let lines: [&str; 0] = [];
        assert!(segment(&lines, &DiffConfig::default()).is_empty());
    }

    #[test]
    fn pluggable_classifier() {
        let segmenter = Segmenter::new(|line: &str| line.starts_with("## "));
        let sections = segmenter.segment(&["## One", "a", "## Two", "b", "c"]);
        assert_eq!(titles(&sections), vec!["## One", "## Two"]);
        assert_eq!(sections[1].line_count(), 3);
    }

    #[test]
    fn repeated_titles_stay_separate_sections() {
        let sections = segment(&["第一章 A", "x", "第一章 A", "y"], &DiffConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, sections[1].title);
    }

    fn line_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                (0u8..5).prop_map(|n| format!("第{n}章 标题{n}")),
                "[a-z ]{0,12}",
                Just(String::new()),
            ],
            0..40,
        )
    }

    fn assert_contiguous(sections: &[Section]) {
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end_line + 1, pair[1].start_line);
        }
        for section in sections {
            assert!(section.end_line >= section.start_line);
            assert_eq!(section.body_lines.len(), section.line_count());
        }
    }

    proptest! {
        #[test]
        fn sections_partition_every_line(lines in line_strategy()) {
            let sections = segment(&lines, &DiffConfig::default());
            assert_contiguous(&sections);
            if lines.is_empty() {
                prop_assert!(sections.is_empty());
            } else {
                prop_assert_eq!(sections[0].start_line, 0);
                prop_assert_eq!(sections.last().unwrap().end_line, lines.len() - 1);
                let rebuilt: Vec<String> =
                    sections.iter().flat_map(|s| s.body_lines.clone()).collect();
                prop_assert_eq!(rebuilt, lines);
            }
        }

        #[test]
        fn without_preamble_sections_cover_from_first_header(lines in line_strategy()) {
            let config = DiffConfig { keep_preamble: false, ..Default::default() };
            let classifier = MarkerClassifier::from_config(&config);
            let sections = segment(&lines, &config);
            assert_contiguous(&sections);
            match lines.iter().position(|l| classifier.is_header(l)) {
                Some(first) => {
                    prop_assert_eq!(sections[0].start_line, first);
                    prop_assert_eq!(sections.last().unwrap().end_line, lines.len() - 1);
                }
                None => prop_assert!(sections.is_empty()),
            }
        }

        #[test]
        fn only_the_first_line_of_a_section_is_a_header(lines in line_strategy()) {
            let classifier = MarkerClassifier::default();
            for section in segment(&lines, &DiffConfig::default()) {
                let (first, rest) = section.body_lines.split_first().unwrap();
                prop_assert_eq!(classifier.is_header(first), !section.is_preamble());
                prop_assert!(rest.iter().all(|l| !classifier.is_header(l)));
            }
        }
    }
}
