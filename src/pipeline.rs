//! Pipeline orchestration: one session over one document.
//!
//! [`RagPipeline`] is the explicit session object tying the components
//! together: segment on ingest, build the index, answer questions over
//! it, and summarize the current document. State is process-local and
//! discarded wholesale when a new document is ingested.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paperlens::{PaperSection, RagConfig, RagPipeline};
//!
//! let pipeline = RagPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(Arc::new(embedder))
//!     .generation_provider(Arc::new(generator))
//!     .build()?;
//!
//! pipeline.ingest("paper42", sections).await?;
//! let answer = pipeline.answer("What dataset was used?").await?;
//! let summary = pipeline.summarize().await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::RagConfig;
use crate::document::{Answer, Document, PaperSection};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract::SectionExtractor;
use crate::generation::GenerationProvider;
use crate::index::{InMemoryVectorIndex, VectorIndex};
use crate::qa::QaEngine;
use crate::retriever::Retriever;
use crate::segmenter::{SectionSegmenter, Segmenter};
use crate::summarizer::Summarizer;

/// The session orchestrator for ingestion, question answering, and
/// summarization over a single active document.
///
/// Each call is a blocking request/response step; there is no
/// background indexing and no internal retry. Construct one via
/// [`RagPipeline::builder()`].
pub struct RagPipeline {
    config: RagConfig,
    segmenter: Arc<dyn Segmenter>,
    index: Arc<dyn VectorIndex>,
    qa: QaEngine,
    summarizer: Summarizer,
    document: RwLock<Option<Document>>,
}

impl RagPipeline {
    /// Create a new [`RagPipelineBuilder`].
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Return a reference to the vector index.
    pub fn index(&self) -> &Arc<dyn VectorIndex> {
        &self.index
    }

    /// The currently ingested document, if any.
    pub async fn current_document(&self) -> Option<Document> {
        self.document.read().await.clone()
    }

    /// Ingest a document's sections: segment, embed, and index them.
    ///
    /// Replaces any previously ingested document and its index content.
    /// The document's full text is the section texts joined by blank
    /// lines. Returns the number of segments indexed.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmptyIndex`] if the sections produce no
    /// segments, or [`RagError::Embedding`] if embedding fails.
    pub async fn ingest(
        &self,
        document_id: &str,
        sections: Vec<PaperSection>,
    ) -> Result<usize> {
        let mut segments = Vec::new();
        for section in &sections {
            segments.extend(self.segmenter.segment(document_id, &section.name, &section.text));
        }

        let count = self.index.build(segments).await?;

        let document = Document {
            id: document_id.to_string(),
            sections: sections.iter().map(|s| s.name.clone()).collect(),
            text: sections.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join("\n\n"),
        };
        *self.document.write().await = Some(document);

        info!(document_id, segment_count = count, "document ingested");
        Ok(count)
    }

    /// Extract sections from `path` with the given extractor, then ingest.
    ///
    /// # Errors
    ///
    /// Propagates extraction failures as [`RagError::Pipeline`] and
    /// ingestion failures as in [`ingest`](RagPipeline::ingest).
    pub async fn ingest_path(
        &self,
        extractor: &dyn SectionExtractor,
        path: &Path,
        document_id: &str,
    ) -> Result<usize> {
        let sections = extractor.extract_sections(path)?;
        self.ingest(document_id, sections).await
    }

    /// Answer a question about the current document using retrieval-
    /// augmented generation.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::IndexNotBuilt`] if no document has been
    /// ingested, and propagates provider failures unmodified.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        self.qa.answer(question).await
    }

    /// Generate a structured summary of the current document.
    ///
    /// The document text is truncated to the configured
    /// `summary_char_budget` (on a character boundary) before it is
    /// passed to the summarizer.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Pipeline`] if no document has been ingested,
    /// and propagates generation failures unmodified.
    pub async fn summarize(&self) -> Result<String> {
        let text = {
            let guard = self.document.read().await;
            let document = guard
                .as_ref()
                .ok_or_else(|| RagError::Pipeline("no document ingested".to_string()))?;
            truncate_chars(&document.text, self.config.summary_char_budget).to_string()
        };
        self.summarizer.summarize(&text).await
    }

    /// Generate a structured summary of caller-supplied text.
    ///
    /// No truncation is applied here; keeping the text within a
    /// provider-safe size is the caller's responsibility.
    pub async fn summarize_text(&self, text: &str) -> Result<String> {
        self.summarizer.summarize(text).await
    }
}

/// Truncate `text` to at most `budget` characters, on a char boundary.
fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builder for constructing a [`RagPipeline`].
///
/// A generation provider is always required. Either an embedding
/// provider (for the default in-memory index) or a pre-built
/// [`VectorIndex`] must be supplied. Config and segmenter fall back to
/// defaults.
#[derive(Default)]
pub struct RagPipelineBuilder {
    config: Option<RagConfig>,
    segmenter: Option<Arc<dyn Segmenter>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    generation_provider: Option<Arc<dyn GenerationProvider>>,
    vector_index: Option<Arc<dyn VectorIndex>>,
}

impl RagPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a custom segmenter.
    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Set the embedding provider backing the default in-memory index.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the generation provider used for answers and summaries.
    pub fn generation_provider(mut self, provider: Arc<dyn GenerationProvider>) -> Self {
        self.generation_provider = Some(provider);
        self
    }

    /// Set a custom vector index, overriding the in-memory default.
    pub fn vector_index(mut self, index: Arc<dyn VectorIndex>) -> Self {
        self.vector_index = Some(index);
        self
    }

    /// Build the [`RagPipeline`], validating that required parts are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if the generation provider is
    /// missing, or if neither an embedding provider nor a vector index
    /// was supplied.
    pub fn build(self) -> Result<RagPipeline> {
        let config = self.config.unwrap_or_default();

        let generator = self.generation_provider.ok_or_else(|| {
            RagError::Config("generation_provider is required".to_string())
        })?;

        let index: Arc<dyn VectorIndex> = match (self.vector_index, self.embedding_provider) {
            (Some(index), _) => index,
            (None, Some(embedder)) => Arc::new(InMemoryVectorIndex::new(embedder)),
            (None, None) => {
                return Err(RagError::Config(
                    "either embedding_provider or vector_index is required".to_string(),
                ));
            }
        };

        let segmenter = self.segmenter.unwrap_or_else(|| {
            Arc::new(SectionSegmenter::new(config.segment_size, config.segment_overlap))
        });

        let retriever = Retriever::new(Arc::clone(&index), config.top_k);
        let qa = QaEngine::new(retriever, Arc::clone(&generator));
        let summarizer = Summarizer::new(generator);

        Ok(RagPipeline { config, segmenter, index, qa, summarizer, document: RwLock::new(None) })
    }
}
