//! Section detection and segmentation for docdelta.
//!
//! Turns the plain text produced by a document extractor into an ordered list
//! of [`Section`](docdelta_types::Section) records.
//!
//! # Key Types
//!
//! - [`split_lines`] -- Line sequencer (splits on `'\n'` only)
//! - [`LineClassifier`] / [`MarkerClassifier`] -- Pluggable header detection
//! - [`Segmenter`] / [`segment`] -- Groups lines into contiguous sections

pub mod detector;
pub mod lines;
pub mod segmenter;

pub use detector::{LineClassifier, MarkerClassifier};
pub use lines::split_lines;
pub use segmenter::{segment, Segmenter};
