//! Foundation types for docdelta.
//!
//! This crate provides the data model and configuration shared by every other
//! docdelta crate: segmented document sections, the comparison configuration,
//! and the error taxonomy.
//!
//! # Key Types
//!
//! - [`Section`] -- Contiguous, header-delimited chunk of a document's lines
//! - [`SectionKind`] -- Whether a section was opened by a header or is the preamble
//! - [`DiffConfig`] -- Recognized comparison options (markers, thresholds, policies)
//! - [`DuplicateTitlePolicy`] -- How repeated section titles are matched
//! - [`DocumentVersion`] -- Which side of the comparison a value belongs to
//! - [`DiffError`] -- Boundary errors raised before any comparison runs

pub mod config;
pub mod document;
pub mod error;
pub mod section;

pub use config::{DiffConfig, DuplicateTitlePolicy, HeaderMarkers};
pub use document::DocumentVersion;
pub use error::{DiffError, DiffResult};
pub use section::{token_count, Section, SectionKind};
