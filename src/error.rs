//! Error types for the `paperlens` crate.

use thiserror::Error;

/// Errors that can occur in retrieval and generation operations.
///
/// All variants propagate unmodified to the caller: the core never
/// substitutes a fabricated answer for a failed provider call and
/// performs no internal retry.
#[derive(Debug, Error)]
pub enum RagError {
    /// Attempted to build an index from zero segments.
    #[error("Empty index: building an index requires at least one segment")]
    EmptyIndex,

    /// Searched before any successful build.
    #[error("Index not built: ingest a document before searching")]
    IndexNotBuilt,

    /// The embedding provider failed to produce a vector.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The generation provider call failed (transport, auth, rate limit).
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The generation provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error in pipeline orchestration.
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

/// A convenience result type for retrieval and generation operations.
pub type Result<T> = std::result::Result<T, RagError>;
