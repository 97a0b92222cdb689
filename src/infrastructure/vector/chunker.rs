//! Document chunker implementation
//!
//! Splits raw document text into overlapping, bounded-size chunks using a
//! character window. Cut points prefer paragraph, then sentence, then word
//! boundaries so chunks keep semantic coherence where possible.

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{Chunk, ChunkerConfig};

/// Character-window chunker with exact trailing overlap.
///
/// Each chunk covers `[start, end)` in character offsets with
/// `end <= start + chunk_size`, and the next chunk starts at
/// `end - chunk_overlap`. Boundary snapping moves `end` backward to a
/// separator, never forward, so the overlap between consecutive chunks is
/// always exactly `chunk_overlap` characters and the chunks cover the
/// document with no gaps.
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with default configuration (size 1000, overlap 300)
    pub fn new() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }

    /// Create a new chunker with custom configuration
    pub fn with_config(config: ChunkerConfig) -> RagResult<Self> {
        config
            .validate()
            .map_err(|e| RagError::Chunking(format!("invalid chunker config: {e}")))?;

        Ok(Self { config })
    }

    /// Split document text into chunks suitable for embedding.
    ///
    /// A document shorter than `chunk_size` yields exactly one chunk.
    /// Empty text is an error.
    pub fn chunk(&self, text: &str) -> RagResult<Vec<Chunk>> {
        if text.is_empty() {
            return Err(RagError::Chunking("document text is empty".to_string()));
        }

        let chars: Vec<char> = text.chars().collect();
        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_index = 0;

        loop {
            let hard_end = (start + size).min(chars.len());
            let mut end = hard_end;

            // Snap the cut point to a separator, but only if that still
            // leaves the next window strictly ahead of this one.
            if self.config.respect_boundaries && hard_end < chars.len() {
                if let Some(pos) = snap_to_boundary(&chars[start..hard_end]) {
                    if pos > overlap {
                        end = start + pos;
                    }
                }
            }

            let content: String = chars[start..end].iter().collect();
            chunks.push(Chunk::new(content, chunk_index, start, end));

            if end >= chars.len() {
                break;
            }

            start = end - overlap;
            chunk_index += 1;
        }

        Ok(chunks)
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the rightmost separator in the window at decreasing granularity:
/// paragraph break, sentence end, then word break. Returns the cut position
/// (exclusive end) relative to the window start.
fn snap_to_boundary(window: &[char]) -> Option<usize> {
    // Paragraph break: two consecutive newlines.
    for i in (1..window.len()).rev() {
        if window[i] == '\n' && window[i - 1] == '\n' {
            return Some(i + 1);
        }
    }

    // Sentence end.
    for i in (0..window.len()).rev() {
        if matches!(window[i], '.' | '!' | '?' | '\n') {
            return Some(i + 1);
        }
    }

    // Word break.
    for i in (0..window.len()).rev() {
        if window[i] == ' ' {
            return Some(i + 1);
        }
    }

    None
}
