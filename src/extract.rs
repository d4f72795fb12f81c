//! Text extraction collaborator interface.
//!
//! The core does not parse PDFs itself. A [`SectionExtractor`] supplies
//! ordered `(section name, text)` pairs covering a whole document; how
//! section boundaries are detected (PDF structure, heading heuristics,
//! a single body section) is an implementation choice of the extractor,
//! not part of this crate's contract.

use std::fs;
use std::path::Path;

use crate::document::PaperSection;
use crate::error::{RagError, Result};

/// Extracts the ordered sections of a document at a given path.
pub trait SectionExtractor: Send + Sync {
    /// Return the document's sections, in original order, covering the
    /// whole text.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Pipeline`] if the document cannot be read or
    /// parsed.
    fn extract_sections(&self, path: &Path) -> Result<Vec<PaperSection>>;
}

/// A [`SectionExtractor`] that reads a plain-text file as one section.
///
/// Useful for tests and demos where a real PDF extractor is not wired
/// in. The whole file becomes a single section named `Body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl SectionExtractor for PlainTextExtractor {
    fn extract_sections(&self, path: &Path) -> Result<Vec<PaperSection>> {
        let text = fs::read_to_string(path).map_err(|e| {
            RagError::Pipeline(format!("failed to read '{}': {e}", path.display()))
        })?;
        Ok(vec![PaperSection::new("Body", text)])
    }
}
