//! Text chunking domain models
//!
//! Models for splitting a document into overlapping chunks for embedding.

use serde::{Deserialize, Serialize};

/// Configuration for document chunking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChunkerConfig {
    /// Maximum size of each chunk in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    /// (preserves context across chunk boundaries)
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Whether to snap chunk cut points to paragraph/sentence/word
    /// boundaries instead of cutting mid-word
    #[serde(default = "default_respect_boundaries")]
    pub respect_boundaries: bool,
}

const fn default_chunk_size() -> usize {
    1000
}

const fn default_chunk_overlap() -> usize {
    300
}

const fn default_respect_boundaries() -> bool {
    true
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            respect_boundaries: default_respect_boundaries(),
        }
    }
}

impl ChunkerConfig {
    /// Validate the chunking configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err("chunk_overlap must be less than chunk_size".to_string());
        }

        Ok(())
    }
}

/// A chunk of text extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content of this chunk
    pub content: String,

    /// Index of this chunk within the document (0-based, insertion order)
    pub chunk_index: usize,

    /// Start position in the original document (character offset)
    pub start_offset: usize,

    /// End position in the original document (character offset, exclusive)
    pub end_offset: usize,
}

impl Chunk {
    pub fn new(content: String, chunk_index: usize, start_offset: usize, end_offset: usize) -> Self {
        Self {
            content,
            chunk_index,
            start_offset,
            end_offset,
        }
    }

    /// Returns true if this is the first chunk of the document
    pub fn is_first(&self) -> bool {
        self.chunk_index == 0
    }

    /// Get a preview of the content (first 100 chars)
    pub fn preview(&self) -> String {
        let chars: Vec<char> = self.content.chars().collect();
        if chars.len() <= 100 {
            self.content.clone()
        } else {
            format!("{}...", chars[..100].iter().collect::<String>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ChunkerConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 300);
        assert!(config.respect_boundaries);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let invalid_size = ChunkerConfig {
            chunk_size: 0,
            ..ChunkerConfig::default()
        };
        assert!(invalid_size.validate().is_err());

        let invalid_overlap = ChunkerConfig {
            chunk_size: 100,
            chunk_overlap: 150,
            ..ChunkerConfig::default()
        };
        assert!(invalid_overlap.validate().is_err());
    }

    #[test]
    fn test_chunk_new() {
        let chunk = Chunk::new("test content".to_string(), 0, 0, 12);
        assert_eq!(chunk.content, "test content");
        assert_eq!(chunk.chunk_index, 0);
        assert!(chunk.is_first());
    }

    #[test]
    fn test_chunk_preview() {
        let short = Chunk::new("short".to_string(), 0, 0, 5);
        assert_eq!(short.preview(), "short");

        let long = Chunk::new("a".repeat(200), 0, 0, 200);
        assert_eq!(long.preview().len(), 103); // 100 chars + "..."
    }
}
