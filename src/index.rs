//! Vector index: segment storage with nearest-neighbor search.
//!
//! The [`VectorIndex`] trait abstracts the similarity-search structure
//! so the underlying algorithm (flat scan, tree, graph) is an
//! implementation choice. [`InMemoryVectorIndex`] is the session-local
//! default: a cosine-similarity flat scan over segments held behind a
//! `tokio::sync::RwLock`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{ScoredSegment, Segment};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};

/// A semantic index over the segments of one document.
///
/// `build` replaces all prior content; there is no incremental merge
/// across documents. `search` embeds the query with the same provider
/// the segments were embedded with.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Embed and store the given segments, replacing any prior content.
    ///
    /// Returns the number of segments indexed.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmptyIndex`] if `segments` is empty, or
    /// [`RagError::Embedding`] if the provider fails.
    async fn build(&self, segments: Vec<Segment>) -> Result<usize>;

    /// Return the `k` segments most similar to `query`, best first.
    ///
    /// If fewer than `k` segments are stored, all of them are returned.
    /// Repeated searches are idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::IndexNotBuilt`] if no build has succeeded yet.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredSegment>>;
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// An in-memory [`VectorIndex`] using cosine similarity over a flat scan.
///
/// Holds the current document's segments (with embeddings attached) for
/// the duration of the session. Suitable for single-document,
/// single-session use; `build` discards the previous index outright.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use paperlens::{InMemoryVectorIndex, VectorIndex};
///
/// let index = InMemoryVectorIndex::new(Arc::new(embedder));
/// index.build(segments).await?;
/// let hits = index.search("what dataset was used?", 5).await?;
/// ```
pub struct InMemoryVectorIndex {
    embedder: Arc<dyn EmbeddingProvider>,
    // None until the first successful build.
    segments: RwLock<Option<Vec<Segment>>>,
}

impl InMemoryVectorIndex {
    /// Create a new empty index backed by the given embedding provider.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { embedder, segments: RwLock::new(None) }
    }

    /// Whether a build has completed for this index.
    pub async fn is_built(&self) -> bool {
        self.segments.read().await.is_some()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn build(&self, mut segments: Vec<Segment>) -> Result<usize> {
        if segments.is_empty() {
            return Err(RagError::EmptyIndex);
        }

        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        for (segment, embedding) in segments.iter_mut().zip(embeddings) {
            segment.embedding = embedding;
        }

        let count = segments.len();
        *self.segments.write().await = Some(segments);
        info!(segment_count = count, "index built");

        Ok(count)
    }

    async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredSegment>> {
        let query_embedding = self.embedder.embed(query).await?;

        let guard = self.segments.read().await;
        let segments = guard.as_ref().ok_or(RagError::IndexNotBuilt)?;

        let mut scored: Vec<ScoredSegment> = segments
            .iter()
            .map(|segment| ScoredSegment {
                score: cosine_similarity(&segment.embedding, &query_embedding),
                segment: segment.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        debug!(result_count = scored.len(), k, "index searched");
        Ok(scored)
    }
}
