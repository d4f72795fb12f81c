//! Structured paper summarization.

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::generation::GenerationProvider;

/// The fixed summary prompt. The supplied text is substituted for `{text}`.
const SUMMARY_TEMPLATE: &str = "You are an academic research assistant.\n\n\
Summarize the paper using:\n\
- Problem Statement\n\
- Proposed Method\n\
- Key Contributions\n\
- Results\n\
- Limitations\n\n\
Text:\n{text}";

/// Generates structured academic summaries via a generation provider.
///
/// Applies a fixed template with five sections (Problem Statement,
/// Proposed Method, Key Contributions, Results, Limitations) and
/// returns the generated text verbatim; if the model omits a section,
/// that is passed through unmodified. Truncating over-length input to a
/// provider-safe size is the caller's responsibility.
pub struct Summarizer {
    generator: Arc<dyn GenerationProvider>,
}

impl Summarizer {
    /// Create a new summarizer over the given generation provider.
    pub fn new(generator: Arc<dyn GenerationProvider>) -> Self {
        Self { generator }
    }

    /// Generate a structured summary of `text`.
    ///
    /// # Errors
    ///
    /// Propagates [`RagError::Generation`](crate::RagError::Generation)
    /// from the provider.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = SUMMARY_TEMPLATE.replace("{text}", text);
        info!(text_len = text.len(), model = self.generator.model_name(), "summarizing");
        self.generator.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl GenerationProvider for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn template_contains_all_five_sections_and_the_text() {
        let summarizer = Summarizer::new(Arc::new(EchoGenerator));
        let out = summarizer.summarize("A paper about owls.").await.unwrap();

        for field in
            ["Problem Statement", "Proposed Method", "Key Contributions", "Results", "Limitations"]
        {
            assert!(out.contains(field), "missing template field {field}");
        }
        assert!(out.contains("A paper about owls."));
    }
}
