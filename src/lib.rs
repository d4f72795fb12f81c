//! # paperlens
//!
//! Retrieval-augmented analysis of research papers: semantic indexing,
//! question answering, structured summarization, and trend statistics.
//!
//! ## Architecture
//!
//! The crate is a library consumed by a presentation layer. It is
//! organized around a small set of components:
//!
//! - **document**: core data types (`Document`, `Segment`, `Answer`, ...)
//! - **segmenter**: overlapping bounded segmentation of section text
//! - **embedding** / **generation**: provider traits for the external
//!   model capabilities the core consumes
//! - **index**: vector index trait plus an in-memory cosine flat scan
//! - **retriever**: top-k adapter over the index
//! - **qa**: context assembly and answer generation
//! - **summarizer**: fixed structured summary template
//! - **trends** / **citations**: pure metadata analytics
//! - **pipeline**: the per-session orchestrator tying it all together
//!
//! Remote backends are feature-gated: `openai` (embeddings) and `groq`
//! (generation).
//!
//! ## Workflow
//!
//! 1. A text-extraction collaborator supplies `(section, text)` pairs.
//! 2. `ingest` segments each section and builds the vector index,
//!    replacing any prior document.
//! 3. `answer` retrieves the most relevant segments, assembles a
//!    context-bounded prompt, and returns the generated answer with its
//!    evidence.
//! 4. `summarize` applies the fixed five-field template to the document
//!    text, truncated to the configured budget.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paperlens::{PaperSection, RagPipeline};
//!
//! #[tokio::main]
//! async fn main() -> paperlens::Result<()> {
//!     let pipeline = RagPipeline::builder()
//!         .embedding_provider(Arc::new(embedder))
//!         .generation_provider(Arc::new(generator))
//!         .build()?;
//!
//!     pipeline.ingest("paper42", sections).await?;
//!     let answer = pipeline.answer("What dataset was used?").await?;
//!     println!("{}", answer.text);
//!     Ok(())
//! }
//! ```

pub mod citations;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod generation;
pub mod index;
pub mod pipeline;
pub mod qa;
pub mod retriever;
pub mod segmenter;
pub mod summarizer;
pub mod trends;

#[cfg(feature = "groq")]
pub mod groq;
#[cfg(feature = "openai")]
pub mod openai;

pub use citations::CitationGraph;
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Answer, Document, PaperMeta, PaperSection, ScoredSegment, Segment};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use extract::{PlainTextExtractor, SectionExtractor};
pub use generation::GenerationProvider;
pub use index::{InMemoryVectorIndex, VectorIndex};
pub use pipeline::{RagPipeline, RagPipelineBuilder};
pub use qa::QaEngine;
pub use retriever::Retriever;
pub use segmenter::{SectionSegmenter, Segmenter};
pub use summarizer::Summarizer;
pub use trends::TrendAnalyzer;
