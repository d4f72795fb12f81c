//! Semantic retriever: a thin adapter over the vector index.

use std::sync::Arc;

use crate::document::ScoredSegment;
use crate::error::Result;
use crate::index::VectorIndex;

/// Retrieves the most relevant segments for a natural-language query.
///
/// Supplies a default `top_k` and normalizes the return shape for
/// downstream consumers; all ranking comes from the underlying
/// [`VectorIndex`].
#[derive(Clone)]
pub struct Retriever {
    index: Arc<dyn VectorIndex>,
    default_top_k: usize,
}

impl Retriever {
    /// Create a retriever over the given index with a default `top_k`.
    pub fn new(index: Arc<dyn VectorIndex>, default_top_k: usize) -> Self {
        Self { index, default_top_k }
    }

    /// Retrieve the default number of top segments for `query`.
    ///
    /// # Errors
    ///
    /// Propagates [`RagError::IndexNotBuilt`](crate::RagError::IndexNotBuilt)
    /// and embedding failures from the index.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ScoredSegment>> {
        self.retrieve_top_k(query, self.default_top_k).await
    }

    /// Retrieve the top `k` segments for `query`.
    pub async fn retrieve_top_k(&self, query: &str, k: usize) -> Result<Vec<ScoredSegment>> {
        self.index.search(query, k).await
    }
}
