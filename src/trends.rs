//! Keyword and publication-year trend analysis.
//!
//! Pure aggregation over paper metadata: no index, no model calls,
//! no I/O.

use std::collections::{BTreeMap, HashMap};

use crate::document::PaperMeta;

/// Number of top keywords reported by [`TrendAnalyzer::identify_trends`].
const TOP_KEYWORDS: usize = 10;

/// Keyword- and time-based trend analysis over a paper collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Identify the top recurring keywords across all papers.
    ///
    /// Returns up to ten `(keyword, frequency)` pairs sorted by
    /// descending frequency. Ties are broken by the order in which a
    /// keyword was first encountered, so the ranking is stable.
    pub fn identify_trends(&self, papers: &[PaperMeta]) -> Vec<(String, usize)> {
        // keyword -> (count, first-encountered position)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut next_rank = 0usize;

        for paper in papers {
            for keyword in &paper.keywords {
                let entry = counts.entry(keyword.as_str()).or_insert_with(|| {
                    let rank = next_rank;
                    next_rank += 1;
                    (0, rank)
                });
                entry.0 += 1;
            }
        }

        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
        ranked.truncate(TOP_KEYWORDS);

        ranked.into_iter().map(|(kw, (count, _))| (kw.to_string(), count)).collect()
    }

    /// Count papers per publication year.
    ///
    /// Papers with no recorded year are omitted.
    pub fn yearly_distribution(&self, papers: &[PaperMeta]) -> BTreeMap<i32, usize> {
        let mut years = BTreeMap::new();
        for paper in papers {
            if let Some(year) = paper.year {
                *years.entry(year).or_insert(0) += 1;
            }
        }
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, keywords: &[&str], year: Option<i32>) -> PaperMeta {
        PaperMeta {
            id: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            year,
        }
    }

    #[test]
    fn empty_collection_yields_empty_ranking() {
        let analyzer = TrendAnalyzer::new();
        assert!(analyzer.identify_trends(&[]).is_empty());
        assert!(analyzer.yearly_distribution(&[]).is_empty());
    }

    #[test]
    fn keywords_ranked_by_frequency() {
        let analyzer = TrendAnalyzer::new();
        let papers = vec![
            paper("a", &["nlp", "transformers"], Some(2021)),
            paper("b", &["nlp", "vision"], Some(2022)),
            paper("c", &["nlp", "transformers"], Some(2022)),
        ];

        let trends = analyzer.identify_trends(&papers);
        assert_eq!(trends[0], ("nlp".to_string(), 3));
        assert_eq!(trends[1], ("transformers".to_string(), 2));
        assert_eq!(trends[2], ("vision".to_string(), 1));
    }

    #[test]
    fn ties_broken_by_first_encountered_order() {
        let analyzer = TrendAnalyzer::new();
        let papers = vec![paper("a", &["zebra", "apple", "mango"], None)];

        let trends = analyzer.identify_trends(&papers);
        let keywords: Vec<&str> = trends.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn ranking_is_capped_at_ten() {
        let analyzer = TrendAnalyzer::new();
        let keywords: Vec<String> = (0..15).map(|i| format!("kw{i}")).collect();
        let refs: Vec<&str> = keywords.iter().map(|k| k.as_str()).collect();
        let papers = vec![paper("a", &refs, None)];

        assert_eq!(analyzer.identify_trends(&papers).len(), 10);
    }

    #[test]
    fn yearly_distribution_omits_missing_years() {
        let analyzer = TrendAnalyzer::new();
        let papers = vec![
            paper("a", &[], Some(2020)),
            paper("b", &[], Some(2020)),
            paper("c", &[], None),
        ];

        let years = analyzer.yearly_distribution(&papers);
        assert_eq!(years.len(), 1);
        assert_eq!(years[&2020], 2);
    }
}
