//! Generation provider trait for prompt-to-text completion.

use async_trait::async_trait;

use crate::error::Result;

/// A capability that turns a prompt into generated text.
///
/// This is the single seam between the core and any language model
/// backend (remote API, local model, test stub). The core issues one
/// blocking call per prompt and returns the output verbatim; transport,
/// auth, and rate-limit failures surface as
/// [`RagError::Generation`](crate::RagError::Generation) with no
/// internal retry.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Generation`](crate::RagError::Generation) if
    /// the backend call fails.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// A short name identifying the backing model, used in logs and errors.
    fn model_name(&self) -> &str;
}
