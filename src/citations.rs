//! In-memory citation graph between papers.

use std::collections::HashMap;

/// A directed citation graph: paper A cites paper B.
///
/// Lightweight adjacency list from citing paper ID to cited paper
/// titles. Pure in-memory state; no dependency on the index or any
/// model.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    citations: HashMap<String, Vec<String>>,
}

impl CitationGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a citation edge from a paper to a cited title.
    pub fn add_citation(
        &mut self,
        source_paper_id: impl Into<String>,
        cited_paper_title: impl Into<String>,
    ) {
        self.citations.entry(source_paper_id.into()).or_default().push(cited_paper_title.into());
    }

    /// All titles cited by the given paper, in insertion order.
    pub fn references(&self, paper_id: &str) -> &[String] {
        self.citations.get(paper_id).map_or(&[], Vec::as_slice)
    }

    /// The full citation graph.
    pub fn all_citations(&self) -> &HashMap<String, Vec<String>> {
        &self.citations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_preserve_insertion_order() {
        let mut graph = CitationGraph::new();
        graph.add_citation("p1", "Attention Is All You Need");
        graph.add_citation("p1", "BERT");
        graph.add_citation("p2", "GPT-3");

        assert_eq!(graph.references("p1"), ["Attention Is All You Need", "BERT"]);
        assert_eq!(graph.references("p2"), ["GPT-3"]);
    }

    #[test]
    fn unknown_paper_has_no_references() {
        let graph = CitationGraph::new();
        assert!(graph.references("missing").is_empty());
    }
}
