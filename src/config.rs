//! Configuration for the retrieval pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{RagError, Result};

/// Configuration parameters for segmentation, retrieval, and summarization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Maximum segment size in characters.
    pub segment_size: usize,
    /// Number of overlapping characters between consecutive segments.
    pub segment_overlap: usize,
    /// Number of top results to retrieve for a query.
    pub top_k: usize,
    /// Character budget applied to document text before summarization.
    pub summary_char_budget: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { segment_size: 800, segment_overlap: 150, top_k: 5, summary_char_budget: 8000 }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the maximum segment size in characters.
    pub fn segment_size(mut self, size: usize) -> Self {
        self.config.segment_size = size;
        self
    }

    /// Set the overlap between consecutive segments in characters.
    pub fn segment_overlap(mut self, overlap: usize) -> Self {
        self.config.segment_overlap = overlap;
        self
    }

    /// Set the number of top results to retrieve for a query.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the character budget applied before summarization.
    pub fn summary_char_budget(mut self, budget: usize) -> Self {
        self.config.summary_char_budget = budget;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if:
    /// - `segment_overlap >= segment_size`
    /// - `top_k == 0`
    /// - `summary_char_budget == 0`
    pub fn build(self) -> Result<RagConfig> {
        if self.config.segment_overlap >= self.config.segment_size {
            return Err(RagError::Config(format!(
                "segment_overlap ({}) must be less than segment_size ({})",
                self.config.segment_overlap, self.config.segment_size
            )));
        }
        if self.config.top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()));
        }
        if self.config.summary_char_budget == 0 {
            return Err(RagError::Config(
                "summary_char_budget must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RagConfig::default();
        assert_eq!(config.segment_size, 800);
        assert_eq!(config.segment_overlap, 150);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.summary_char_budget, 8000);
    }

    #[test]
    fn builder_rejects_overlap_not_less_than_size() {
        let result = RagConfig::builder().segment_size(100).segment_overlap(100).build();
        assert!(matches!(result, Err(RagError::Config(_))));
    }

    #[test]
    fn builder_rejects_zero_top_k() {
        let result = RagConfig::builder().top_k(0).build();
        assert!(matches!(result, Err(RagError::Config(_))));
    }

    #[test]
    fn builder_accepts_valid_config() {
        let config = RagConfig::builder()
            .segment_size(10)
            .segment_overlap(2)
            .top_k(3)
            .summary_char_budget(500)
            .build()
            .unwrap();
        assert_eq!(config.segment_size, 10);
        assert_eq!(config.segment_overlap, 2);
        assert_eq!(config.top_k, 3);
    }
}
