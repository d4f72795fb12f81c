//! Question answering over retrieved context.
//!
//! The [`QaEngine`] is the retrieval-augmented generation core: it
//! retrieves the segments most relevant to a question, assembles them
//! into a single prompt, and returns the generation provider's output
//! verbatim together with the evidence used.

use std::sync::Arc;

use tracing::{error, info};

use crate::document::Answer;
use crate::error::Result;
use crate::generation::GenerationProvider;
use crate::retriever::Retriever;

/// Answers natural-language questions using retrieved document context.
pub struct QaEngine {
    retriever: Retriever,
    generator: Arc<dyn GenerationProvider>,
}

impl QaEngine {
    /// Create a new engine from a retriever and a generation provider.
    pub fn new(retriever: Retriever, generator: Arc<dyn GenerationProvider>) -> Self {
        Self { retriever, generator }
    }

    /// Answer a question using retrieval-augmented generation.
    ///
    /// Retrieves the top segments for `question`, joins their text in
    /// retrieval order separated by blank lines, and prompts the
    /// generation provider to answer using only that context. The
    /// provider's output is returned verbatim, paired with the retrieved
    /// segments as evidence.
    ///
    /// Zero retrieved segments is not an error: the prompt is issued
    /// with an empty context block, so the answer may be ungrounded.
    /// This is a documented limitation of an empty or unmatched corpus.
    ///
    /// # Errors
    ///
    /// Propagates [`RagError::IndexNotBuilt`](crate::RagError::IndexNotBuilt)
    /// from retrieval and [`RagError::Generation`](crate::RagError::Generation)
    /// from the provider; no retry is performed here.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let evidence = self.retriever.retrieve(question).await?;

        let context = evidence
            .iter()
            .map(|s| s.segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = build_prompt(&context, question);

        info!(
            segment_count = evidence.len(),
            model = self.generator.model_name(),
            "answering question"
        );

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            error!(error = %e, "generation failed while answering");
            e
        })?;

        Ok(Answer { text, evidence })
    }
}

/// Build the QA prompt: instruction, context block, verbatim question.
fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a research assistant. Answer the question using only \
         the context below. If the context does not contain the answer, \
         say so.\n\nContext:\n{context}\n\nQuestion: {question}"
    )
}
