//! Deterministic mock providers shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use paperlens::{EmbeddingProvider, GenerationProvider, Result, Segment};

/// A deterministic bag-of-words embedder.
///
/// Each alphanumeric-normalized token is assigned a vector dimension in
/// first-encountered order, so texts sharing terms get higher cosine
/// similarity and distinct terms never collide while the vocabulary
/// fits in `dims`. Stable across calls within a session, which makes
/// retrieval tests reproducible without a real model.
pub struct HashedEmbedding {
    dims: usize,
    vocab: Mutex<HashMap<String, usize>>,
}

impl HashedEmbedding {
    pub fn new(dims: usize) -> Self {
        Self { dims, vocab: Mutex::new(HashMap::new()) }
    }
}

#[async_trait]
impl EmbeddingProvider for HashedEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dims];
        let mut vocab = self.vocab.lock().unwrap();
        for token in text.to_lowercase().split_whitespace() {
            let token: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
            if token.is_empty() {
                continue;
            }
            let next = vocab.len();
            let slot = *vocab.entry(token).or_insert(next);
            vector[slot % self.dims] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

/// A generator that echoes its prompt, proving prompt assembly without
/// a real model.
pub struct EchoGenerator;

#[async_trait]
impl GenerationProvider for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(prompt.to_string())
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

/// Build a bare segment for index-level tests.
pub fn segment(id: &str, text: &str) -> Segment {
    Segment {
        id: id.to_string(),
        document_id: "doc".to_string(),
        section: "Body".to_string(),
        text: text.to_string(),
        embedding: Vec::new(),
        metadata: HashMap::new(),
    }
}
