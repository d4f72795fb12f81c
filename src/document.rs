//! Data types for papers, segments, and search results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single extracted section of a paper: a name and its text.
///
/// Produced by a [`SectionExtractor`](crate::extract::SectionExtractor)
/// collaborator; the core treats section boundaries as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaperSection {
    /// Logical section name (e.g. "Abstract", "Method").
    pub name: String,
    /// The text of the section.
    pub text: String,
}

impl PaperSection {
    /// Create a new section.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

/// An ingested paper: identifier, ordered section names, and full text.
///
/// Immutable after ingestion. The pipeline holds at most one document
/// per session and replaces it wholesale on re-ingest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// Ordered names of the sections the document was extracted into.
    pub sections: Vec<String>,
    /// The full extracted text (section texts joined by blank lines).
    pub text: String,
}

/// A bounded span of document text stored for retrieval.
///
/// Segment IDs are generated as `{document_id}_{index}`. Metadata always
/// carries the `section` name and the `segment_index`; the embedding is
/// empty until the index attaches one at build time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Unique identifier for the segment.
    pub id: String,
    /// The ID of the parent [`Document`].
    pub document_id: String,
    /// The section this segment was cut from.
    pub section: String,
    /// The text content of the segment.
    pub text: String,
    /// The vector embedding for this segment's text.
    pub embedding: Vec<f32>,
    /// Key-value metadata (section name plus any future filter keys).
    pub metadata: HashMap<String, String>,
}

/// A retrieved [`Segment`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSegment {
    /// The retrieved segment.
    pub segment: Segment,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}

/// A generated answer together with the segments used as evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The generated answer text, returned verbatim from the provider.
    pub text: String,
    /// The segments whose text was supplied as context.
    pub evidence: Vec<ScoredSegment>,
}

/// Paper metadata for trend analysis, independent of the indexing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaperMeta {
    /// Unique identifier for the paper.
    pub id: String,
    /// Keywords attached to the paper.
    pub keywords: Vec<String>,
    /// Publication year, if recorded.
    pub year: Option<i32>,
}
