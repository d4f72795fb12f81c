//! Embedding provider trait for mapping text to fixed-length vectors.

use async_trait::async_trait;

use crate::error::Result;

/// A capability that maps text to a fixed-length numeric vector.
///
/// Implementations wrap a concrete backend (a local model, a remote
/// API) behind one async interface. A provider instance must be
/// deterministic and stable across calls within a session, and every
/// vector it produces has the dimensionality reported by
/// [`dimensions`](EmbeddingProvider::dimensions).
///
/// The default [`embed_batch`](EmbeddingProvider::embed_batch) calls
/// [`embed`](EmbeddingProvider::embed) sequentially; backends with
/// native batching should override it.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Embedding`](crate::RagError::Embedding) if the
    /// backend fails to produce a vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs, in order.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
