//! Document segmentation.
//!
//! This module provides the [`Segmenter`] trait and its default
//! implementation, [`SectionSegmenter`], which cuts section text into
//! bounded, overlapping segments. Split points are chosen by priority:
//! paragraph boundaries first, then line boundaries, then word
//! boundaries, then a hard character cut.

use std::collections::HashMap;

use crate::document::Segment;

/// A strategy for splitting section text into segments.
///
/// Implementations produce [`Segment`]s with text and metadata but no
/// embeddings. Embeddings are attached later by the index. Output must
/// preserve original text order, contain no empty segments, and be
/// deterministic for identical input and configuration.
pub trait Segmenter: Send + Sync {
    /// Split a section's text into ordered segments.
    ///
    /// Returns an empty `Vec` if `text` is empty.
    fn segment(&self, document_id: &str, section: &str, text: &str) -> Vec<Segment>;
}

/// Splits text into overlapping segments bounded by a character count.
///
/// Each segment holds at most `max_chars` characters and consecutive
/// segments overlap by `overlap` characters so that context at cut
/// points is not lost. Cut positions prefer, in order: the end of a
/// paragraph (`\n\n`), the end of a line (`\n`), the end of a word
/// (space), and finally an arbitrary character position. Separators stay
/// attached to the preceding segment.
///
/// Segment IDs are generated as `{document_id}_{section}_{index}`; each
/// segment carries `section` and `segment_index` metadata.
///
/// # Example
///
/// ```rust,ignore
/// use paperlens::SectionSegmenter;
///
/// let segmenter = SectionSegmenter::new(800, 150);
/// let segments = segmenter.segment("paper42", "Method", &text);
/// ```
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    max_chars: usize,
    overlap: usize,
}

impl SectionSegmenter {
    /// Create a new `SectionSegmenter`.
    ///
    /// `overlap` is clamped below `max_chars` so that segmentation
    /// always advances through the text.
    pub fn new(max_chars: usize, overlap: usize) -> Self {
        let max_chars = max_chars.max(1);
        Self { max_chars, overlap: overlap.min(max_chars - 1) }
    }

    /// Split raw text into segment strings.
    ///
    /// Positions are measured in characters, not bytes, so multi-byte
    /// text never splits inside a scalar value.
    fn split_text(&self, text: &str) -> Vec<String> {
        // Byte offset of every char boundary, plus the end of the text.
        let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bounds.push(text.len());
        let n = bounds.len() - 1;

        if n == 0 {
            return Vec::new();
        }
        if n <= self.max_chars {
            return vec![text.to_string()];
        }

        let chars: Vec<char> = text.chars().collect();
        let mut segments = Vec::new();
        let mut start = 0usize;

        loop {
            let hard_end = (start + self.max_chars).min(n);
            let end = if hard_end == n {
                n
            } else {
                // A break must land far enough in that the next window
                // (which starts `overlap` chars back) still advances.
                let min_end = start + self.overlap + 1;
                find_break(&chars, min_end, hard_end).unwrap_or(hard_end)
            };

            segments.push(text[bounds[start]..bounds[end]].to_string());

            if end == n {
                break;
            }
            start = end - self.overlap;
        }

        segments
    }
}

/// Find the best break position in `(min_end..=hard_end]`, in char space.
///
/// Tries paragraph ends, then line ends, then word ends, scanning
/// backward so the latest qualifying boundary wins. Returns `None` when
/// no boundary of any kind exists in the window.
fn find_break(chars: &[char], min_end: usize, hard_end: usize) -> Option<usize> {
    let ends_paragraph = |p: usize| p >= 2 && chars[p - 1] == '\n' && chars[p - 2] == '\n';
    let ends_line = |p: usize| chars[p - 1] == '\n';
    let ends_word = |p: usize| chars[p - 1] == ' ';

    for pred in [&ends_paragraph as &dyn Fn(usize) -> bool, &ends_line, &ends_word] {
        for p in (min_end..=hard_end).rev() {
            if pred(p) {
                return Some(p);
            }
        }
    }
    None
}

impl Segmenter for SectionSegmenter {
    fn segment(&self, document_id: &str, section: &str, text: &str) -> Vec<Segment> {
        self.split_text(text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut metadata = HashMap::new();
                metadata.insert("section".to_string(), section.to_string());
                metadata.insert("segment_index".to_string(), i.to_string());
                Segment {
                    id: format!("{document_id}_{section}_{i}"),
                    document_id: document_id.to_string(),
                    section: section.to_string(),
                    text,
                    embedding: Vec::new(),
                    metadata,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_text_yields_no_segments() {
        let segmenter = SectionSegmenter::new(100, 20);
        assert!(segmenter.segment("doc", "Body", "").is_empty());
    }

    #[test]
    fn short_text_yields_single_segment_equal_to_input() {
        let segmenter = SectionSegmenter::new(100, 20);
        let segments = segmenter.segment("doc", "Abstract", "A short abstract.");
        assert_eq!(texts(&segments), vec!["A short abstract."]);
    }

    #[test]
    fn segments_are_bounded_and_non_empty() {
        let segmenter = SectionSegmenter::new(50, 10);
        let text = "word ".repeat(100);
        for segment in segmenter.segment("doc", "Body", &text) {
            let len = segment.text.chars().count();
            assert!(len > 0);
            assert!(len <= 50);
        }
    }

    #[test]
    fn prefers_paragraph_boundaries() {
        let segmenter = SectionSegmenter::new(30, 5);
        let text = "First paragraph here.\n\nSecond paragraph follows it.";
        let segments = segmenter.segment("doc", "Body", text);
        // The first cut lands right after the paragraph separator.
        assert!(segments[0].text.ends_with("\n\n"));
    }

    #[test]
    fn falls_back_to_word_boundaries() {
        let segmenter = SectionSegmenter::new(20, 4);
        let text = "alpha beta gamma delta epsilon zeta";
        let segments = segmenter.segment("doc", "Body", text);
        assert!(segments.len() > 1);
        // No separator but spaces: every non-final segment ends on a word.
        for segment in &segments[..segments.len() - 1] {
            assert!(segment.text.ends_with(' '), "segment {:?} not word-aligned", segment.text);
        }
    }

    #[test]
    fn hard_cut_when_no_boundary_exists() {
        let segmenter = SectionSegmenter::new(10, 2);
        let text = "abcdefghijklmnopqrstuvwxyz";
        let segments = segmenter.segment("doc", "Body", text);
        assert_eq!(segments[0].text, "abcdefghij");
        // Next segment re-covers the overlap region.
        assert!(segments[1].text.starts_with("ij"));
    }

    #[test]
    fn overlap_reconstructs_original_text() {
        let segmenter = SectionSegmenter::new(40, 8);
        let text = "The quick brown fox jumps over the lazy dog. \
                    Pack my box with five dozen liquor jugs. \
                    How vexingly quick daft zebras jump.";
        let segments = segmenter.split_text(text);
        assert!(segments.len() > 1);

        // Dropping each segment's leading overlap (the suffix it shares
        // with the text rebuilt so far) must reconstruct the original.
        let mut rebuilt: Vec<char> = segments[0].chars().collect();
        for segment in &segments[1..] {
            let seg: Vec<char> = segment.chars().collect();
            let mut k = seg.len().min(rebuilt.len());
            while k > 0 && rebuilt[rebuilt.len() - k..] != seg[..k] {
                k -= 1;
            }
            assert!(k > 0, "no overlap before segment {segment:?}");
            rebuilt.extend_from_slice(&seg[k..]);
        }
        assert_eq!(rebuilt.into_iter().collect::<String>(), text);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let segmenter = SectionSegmenter::new(60, 12);
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                    Sed do eiusmod tempor incididunt ut labore et dolore.";
        let first = segmenter.segment("doc", "Body", text);
        let second = segmenter.segment("doc", "Body", text);
        assert_eq!(first, second);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let segmenter = SectionSegmenter::new(10, 2);
        let text = "héllo wörld ünïcode tëxt façade naïve";
        for segment in segmenter.segment("doc", "Body", text) {
            assert!(segment.text.chars().count() <= 10);
        }
    }

    #[test]
    fn metadata_carries_section_and_index() {
        let segmenter = SectionSegmenter::new(10, 2);
        let segments = segmenter.segment("p1", "Method", "a method description text");
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.metadata["section"], "Method");
            assert_eq!(segment.metadata["segment_index"], i.to_string());
            assert_eq!(segment.id, format!("p1_Method_{i}"));
            assert_eq!(segment.document_id, "p1");
        }
    }
}
